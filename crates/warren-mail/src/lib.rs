//! Peer configuration mail notifications for Warren.
//!
//! `warren-mail` notifies users about their VPN peer configurations. Given a
//! batch of peer identifiers, the [`MailManager`] resolves each peer and its
//! owning user, applies access control and skip policy, assembles the mail
//! payload, and dispatches it through the mail-transport collaborator, one
//! send per eligible peer.
//!
//! Two delivery modes exist: [`DeliveryMode::LinkOnly`] sends a deep link
//! into the portal, [`DeliveryMode::FullConfig`] attaches the rendered
//! configuration file together with an embedded QR code image of it
//! (rendered by `warren-qr`).
//!
//! The surrounding system plugs in through the collaborator ports in
//! [`traits`]: mail transport, configuration-file source, user and peer
//! repositories, template renderer, and access policy. The manager performs
//! no retries and persists nothing; delivery retry policy belongs to the
//! transport.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use warren_mail::{DeliveryMode, MailManager, MailManagerConfig};
//!
//! let manager = MailManager::new(
//!     MailManagerConfig::default(),
//!     mailer,
//!     config_files,
//!     users,
//!     peers,
//!     templates,
//!     access,
//! );
//!
//! manager
//!     .send_peer_mail(DeliveryMode::FullConfig, &HashMap::new(), &peer_ids)
//!     .await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod manager;
pub mod outcome;
pub mod traits;

// Re-export main types at crate root
pub use error::{MailError, Result, SourceError};
pub use manager::{DeliveryMode, MailManager, MailManagerConfig};
pub use outcome::{SkipReason, StepOutcome};
pub use traits::{
    AccessPolicy, ConfigFileSource, Mailer, PeerRepository, TemplateRenderer, UserRepository,
};
