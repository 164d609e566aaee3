//! Shared domain entities and value objects for Warren.
//!
//! `warren-domain` holds the types that the Warren backend passes between its
//! subsystems: opaque identifiers for peers, interfaces, and users, the
//! entities they resolve to, and the mail value objects consumed by the
//! notification pipeline. The crate has no I/O and no persistence; entities
//! are plain values produced by the surrounding repositories.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod mail;
pub mod peer;
pub mod types;
pub mod user;

// Re-export main types at crate root
pub use mail::{MailAttachment, MailBody, MailOptions};
pub use peer::{Peer, PeerKeys};
pub use types::{Interface, InterfaceIdentifier, PeerIdentifier, UserIdentifier};
pub use user::User;
