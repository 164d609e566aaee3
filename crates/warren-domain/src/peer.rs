//! The peer entity: a VPN endpoint configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{InterfaceIdentifier, PeerIdentifier, UserIdentifier};

/// Longest file-name stem derived from a peer's display name.
const MAX_CONFIG_NAME_LEN: usize = 32;

/// Cryptographic key material belonging to a peer.
///
/// Keys are carried as the base64 text the portal stores and renders into
/// configuration files. The private key may be absent when it is kept
/// encrypted elsewhere and only supplied at send time.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerKeys {
    /// The peer's private key, if the portal holds it in plain form.
    pub private_key: Option<String>,
    /// The peer's public key.
    pub public_key: String,
}

impl fmt::Debug for PeerKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeerKeys")
            .field(
                "private_key",
                &self.private_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// A VPN endpoint configuration belonging to an interface and,
/// optionally, a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    /// Unique identifier of this peer.
    pub identifier: PeerIdentifier,
    /// Human-readable name shown in the portal and used for the
    /// configuration file name.
    pub display_name: String,
    /// The interface this peer connects through.
    pub interface_identifier: Option<InterfaceIdentifier>,
    /// The user this peer belongs to. `None` means the peer is unlinked
    /// and cannot be notified.
    pub user_identifier: Option<UserIdentifier>,
    /// The peer's own key material.
    pub keys: PeerKeys,
}

impl Peer {
    /// Derives the download file name for this peer's configuration.
    ///
    /// The display name is reduced to a safe character set so the result
    /// can be used verbatim as an attachment or download name. If nothing
    /// survives sanitization, the identifier is used instead.
    #[must_use]
    pub fn config_file_name(&self) -> String {
        let mut stem = sanitize_name(&self.display_name);
        if stem.is_empty() {
            stem = sanitize_name(self.identifier.as_str());
        }
        if stem.is_empty() {
            stem = "peer".to_string();
        }
        format!("{stem}.conf")
    }
}

/// Reduces a name to `[A-Za-z0-9_-]`, mapping runs of any other characters
/// to a single `_`, trimming leading/trailing `_`, and truncating the
/// result to a fixed length.
fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len().min(MAX_CONFIG_NAME_LEN));
    let mut gap = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            if gap && !out.is_empty() {
                out.push('_');
            }
            gap = false;
            out.push(c);
        } else {
            gap = true;
        }
        if out.len() >= MAX_CONFIG_NAME_LEN {
            break;
        }
    }
    out.truncate(MAX_CONFIG_NAME_LEN);
    let trimmed = out.trim_matches('_');
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn peer_named(display_name: &str) -> Peer {
        Peer {
            identifier: PeerIdentifier::new("peer-key-1"),
            display_name: display_name.to_string(),
            interface_identifier: Some(InterfaceIdentifier::new("wg0")),
            user_identifier: None,
            keys: PeerKeys {
                private_key: None,
                public_key: "pub".to_string(),
            },
        }
    }

    #[test_case("laptop", "laptop.conf"; "plain name")]
    #[test_case("Alice's Laptop", "Alice_s_Laptop.conf"; "apostrophe and space")]
    #[test_case("office vpn (backup)", "office_vpn_backup.conf"; "parentheses dropped")]
    #[test_case("wg-peer_01", "wg-peer_01.conf"; "already safe")]
    fn config_file_name_sanitizes_display_name(name: &str, expected: &str) {
        assert_eq!(peer_named(name).config_file_name(), expected);
    }

    #[test]
    fn config_file_name_falls_back_to_identifier() {
        let peer = peer_named("***");
        assert_eq!(peer.config_file_name(), "peer-key-1.conf");
    }

    #[test]
    fn config_file_name_has_last_resort_stem() {
        let mut peer = peer_named("***");
        peer.identifier = PeerIdentifier::new("///");
        assert_eq!(peer.config_file_name(), "peer.conf");
    }

    #[test]
    fn config_file_name_truncates_long_names() {
        let peer = peer_named(&"x".repeat(200));
        let name = peer.config_file_name();
        assert_eq!(name.len(), MAX_CONFIG_NAME_LEN + ".conf".len());
    }

    #[test]
    fn peer_keys_debug_redacts_private_key() {
        let keys = PeerKeys {
            private_key: Some("super-secret".to_string()),
            public_key: "pub".to_string(),
        };
        let debug = format!("{keys:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("super-secret"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn config_file_name_is_always_safe(name in ".*") {
                let peer = peer_named(&name);
                let file = peer.config_file_name();

                prop_assert!(file.ends_with(".conf"));
                let stem = file.trim_end_matches(".conf");
                prop_assert!(!stem.is_empty());
                prop_assert!(stem.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
            }

            #[test]
            fn sanitized_stem_never_exceeds_limit(name in ".*") {
                prop_assert!(sanitize_name(&name).len() <= MAX_CONFIG_NAME_LEN);
            }
        }
    }
}
