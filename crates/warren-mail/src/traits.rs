//! Collaborator ports consumed by the notification pipeline.
//!
//! The pipeline composes over six independent capabilities. Each is an
//! object-safe trait so callers can hand in whatever backs them (database
//! repositories, SMTP transports, template engines) and the test suite can
//! substitute in-memory fakes. Ports that cross an I/O boundary are async;
//! a dropped batch future cancels whatever call is in flight.

use async_trait::async_trait;
use warren_domain::{
    Interface, InterfaceIdentifier, MailBody, MailOptions, Peer, PeerIdentifier, User,
    UserIdentifier,
};

use crate::error::SourceError;

/// Outbound mail transport.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends a mail with the given subject and plain-text body to the
    /// recipients. Single-shot: an error means the send failed outright,
    /// there is no partial success and no retry at this layer.
    async fn send(
        &self,
        subject: &str,
        body: &str,
        to: &[String],
        options: &MailOptions,
    ) -> Result<(), SourceError>;
}

/// Source of rendered configuration files.
#[async_trait]
pub trait ConfigFileSource: Send + Sync {
    /// Returns the configuration text for the given peer.
    ///
    /// Takes the resolved peer value, not a bare identifier, so that
    /// send-time key overrides applied to the in-memory peer reach the
    /// rendered configuration.
    async fn peer_config(&self, peer: &Peer) -> Result<String, SourceError>;

    /// Returns a pre-rendered QR code image for the given peer.
    async fn peer_config_qr(&self, id: &PeerIdentifier) -> Result<Vec<u8>, SourceError>;

    /// Returns the configuration text for the given interface.
    async fn interface_config(&self, id: &InterfaceIdentifier) -> Result<String, SourceError>;
}

/// Read access to the user store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns the user with the given identifier.
    async fn user(&self, id: &UserIdentifier) -> Result<User, SourceError>;
}

/// Read access to the peer and interface store.
#[async_trait]
pub trait PeerRepository: Send + Sync {
    /// Returns the peer with the given identifier.
    async fn peer(&self, id: &PeerIdentifier) -> Result<Peer, SourceError>;

    /// Returns the interface with the given identifier.
    async fn interface(&self, id: &InterfaceIdentifier) -> Result<Interface, SourceError>;

    /// Returns the interface and all peers connecting through it.
    async fn interface_with_peers(
        &self,
        id: &InterfaceIdentifier,
    ) -> Result<(Interface, Vec<Peer>), SourceError>;
}

/// Renders notification mail bodies.
///
/// Rendering is CPU-bound, so this port is synchronous.
pub trait TemplateRenderer: Send + Sync {
    /// Renders the text/HTML pair for a mail carrying a deep link into
    /// the portal.
    fn config_mail(&self, user: &User, link: &str) -> Result<MailBody, SourceError>;

    /// Renders the text/HTML pair for a mail carrying the configuration
    /// attachment names given.
    fn config_mail_with_attachment(
        &self,
        user: &User,
        config_name: &str,
        qr_name: &str,
    ) -> Result<MailBody, SourceError>;
}

/// Authorization decisions for acting on peers.
#[async_trait]
pub trait AccessPolicy: Send + Sync {
    /// Returns an error when the caller may not act on a peer owned by
    /// `owner`. An unlinked peer (`None`) is passed through so the policy
    /// decides whether ownerless peers are manageable.
    async fn check_peer_access(&self, owner: Option<&UserIdentifier>) -> Result<(), SourceError>;
}
