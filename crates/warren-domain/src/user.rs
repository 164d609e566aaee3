//! The portal user entity.

use serde::{Deserialize, Serialize};

use crate::types::UserIdentifier;

/// A portal user who may own peers and receive notifications.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, also used for access-rights validation.
    pub identifier: UserIdentifier,
    /// Human-readable name used in mail templates.
    pub display_name: String,
    /// The user's email address. `None` means the user cannot be notified.
    pub email: Option<String>,
}

impl User {
    /// Returns the address this user can be notified at.
    ///
    /// A missing or blank email both mean "cannot be notified"; outer
    /// layers sometimes hand through empty strings, which are normalized
    /// here rather than at every call site.
    #[must_use]
    pub fn mail_address(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|addr| !addr.is_empty())
    }
}
