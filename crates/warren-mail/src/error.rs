//! Error types for the notification pipeline.

use thiserror::Error;
use warren_domain::PeerIdentifier;

/// Error type produced by collaborator ports at the seam.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Fatal, batch-aborting errors of the notification pipeline.
///
/// Every variant except [`MailError::AccessDenied`] names the peer the
/// batch stopped at; access failures are surfaced verbatim from the
/// authorization layer.
#[derive(Debug, Error)]
pub enum MailError {
    /// The peer could not be resolved. An unresolvable peer indicates a
    /// caller error or data corruption, not a recoverable per-recipient
    /// condition.
    #[error("failed to fetch peer {peer}")]
    PeerLookup {
        /// The peer that could not be resolved.
        peer: PeerIdentifier,
        /// The repository error.
        #[source]
        source: SourceError,
    },

    /// The caller lacks rights to act on the peer's owning user.
    #[error("{source}")]
    AccessDenied {
        /// The authorization layer's error, surfaced unwrapped.
        #[source]
        source: SourceError,
    },

    /// The template collaborator failed to produce a mail body.
    #[error("failed to render mail body for peer {peer}")]
    BodyRender {
        /// The peer whose mail body could not be rendered.
        peer: PeerIdentifier,
        /// The renderer error.
        #[source]
        source: SourceError,
    },

    /// The peer's configuration could not be fetched.
    #[error("failed to fetch configuration for peer {peer}")]
    ConfigFetch {
        /// The peer whose configuration could not be fetched.
        peer: PeerIdentifier,
        /// The config-file source error.
        #[source]
        source: SourceError,
    },

    /// The peer's configuration could not be rendered as a QR image.
    #[error("failed to render configuration QR code for peer {peer}")]
    QrEncode {
        /// The peer whose QR code could not be rendered.
        peer: PeerIdentifier,
        /// The encoder error.
        #[source]
        source: warren_qr::QrError,
    },

    /// The transport refused the assembled mail.
    #[error("failed to send mail for peer {peer}")]
    Transport {
        /// The peer whose mail could not be sent.
        peer: PeerIdentifier,
        /// The transport error.
        #[source]
        source: SourceError,
    },
}

/// Result type for notification operations.
///
/// The error parameter defaults to [`MailError`]; collaborator ports
/// override it with [`SourceError`].
pub type Result<T, E = MailError> = std::result::Result<T, E>;
