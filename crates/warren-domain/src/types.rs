//! Identifier value objects shared across the Warren backend.
//!
//! Identifiers are opaque strings: they are unique keys into their
//! respective repositories and carry no structure this crate inspects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a VPN peer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeerIdentifier(String);

impl PeerIdentifier {
    /// Creates a peer identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeerIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PeerIdentifier {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PeerIdentifier {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Unique identifier of a VPN interface.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterfaceIdentifier(String);

impl InterfaceIdentifier {
    /// Creates an interface identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InterfaceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InterfaceIdentifier {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for InterfaceIdentifier {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Unique identifier of a portal user.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserIdentifier(String);

impl UserIdentifier {
    /// Creates a user identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserIdentifier {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for UserIdentifier {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A VPN network interface that peers connect through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    /// Unique identifier (the device name, e.g. `wg0`).
    pub identifier: InterfaceIdentifier,
    /// Human-readable name shown in the portal.
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peer_identifier_display_matches_input() {
        let id = PeerIdentifier::new("peer1");
        assert_eq!(id.to_string(), "peer1");
        assert_eq!(id.as_str(), "peer1");
    }

    #[test]
    fn identifiers_compare_by_value() {
        assert_eq!(PeerIdentifier::from("a"), PeerIdentifier::new("a"));
        assert_ne!(UserIdentifier::from("a"), UserIdentifier::new("b"));
    }

    #[test]
    fn identifier_serde_is_transparent() {
        let id = InterfaceIdentifier::new("wg0");
        let json = serde_json::to_string(&id).expect("serialize failed");
        assert_eq!(json, "\"wg0\"");

        let back: InterfaceIdentifier = serde_json::from_str(&json).expect("deserialize failed");
        assert_eq!(back, id);
    }

    #[test]
    fn identifiers_usable_as_map_keys() {
        let mut map = std::collections::HashMap::new();
        map.insert(PeerIdentifier::new("peer1"), "value");
        assert_eq!(map.get(&PeerIdentifier::new("peer1")), Some(&"value"));
    }
}
