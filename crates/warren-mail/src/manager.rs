//! The notification orchestrator.
//!
//! [`MailManager`] is the entry point of the pipeline: it walks a batch of
//! peer identifiers strictly in order, resolves each peer and its owning
//! user through the collaborator ports, applies the skip policy, and
//! dispatches exactly one mail per eligible peer. The first fatal error
//! aborts the batch; remaining peers are left unprocessed.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};
use warren_domain::{MailAttachment, MailBody, MailOptions, Peer, PeerIdentifier, User};

use crate::error::{MailError, Result};
use crate::outcome::{SkipReason, StepOutcome};
use crate::traits::{
    AccessPolicy, ConfigFileSource, Mailer, PeerRepository, TemplateRenderer, UserRepository,
};

/// What a peer notification mail carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// A deep link into the portal; the user fetches the configuration
    /// there. No attachments.
    LinkOnly,
    /// The full configuration file plus an embedded QR code image of it.
    FullConfig,
}

/// Configuration for the mail manager.
#[derive(Debug, Clone)]
pub struct MailManagerConfig {
    /// Subject line of every peer configuration mail.
    pub subject: String,
    /// File name of the embedded QR code attachment.
    pub qr_attachment_name: String,
    /// Base URL of the portal, used to build deep links.
    pub portal_url: String,
}

impl Default for MailManagerConfig {
    fn default() -> Self {
        Self {
            subject: "WireGuard VPN Configuration".to_string(),
            qr_attachment_name: "WireGuardQRCode.png".to_string(),
            portal_url: "http://localhost:8888".to_string(),
        }
    }
}

/// Sends peer configuration mails to the users linked to a batch of peers.
pub struct MailManager {
    config: MailManagerConfig,
    mailer: Arc<dyn Mailer>,
    config_files: Arc<dyn ConfigFileSource>,
    users: Arc<dyn UserRepository>,
    peers: Arc<dyn PeerRepository>,
    templates: Arc<dyn TemplateRenderer>,
    access: Arc<dyn AccessPolicy>,
}

impl MailManager {
    /// Creates a new mail manager over the given collaborators.
    #[must_use]
    pub fn new(
        config: MailManagerConfig,
        mailer: Arc<dyn Mailer>,
        config_files: Arc<dyn ConfigFileSource>,
        users: Arc<dyn UserRepository>,
        peers: Arc<dyn PeerRepository>,
        templates: Arc<dyn TemplateRenderer>,
        access: Arc<dyn AccessPolicy>,
    ) -> Self {
        Self {
            config,
            mailer,
            config_files,
            users,
            peers,
            templates,
            access,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &MailManagerConfig {
        &self.config
    }

    /// Sends a configuration mail to the user linked to each of the given
    /// peers, in order.
    ///
    /// Peers without a linked user, with an unresolvable user record, or
    /// whose user has no email address are skipped with a debug log event.
    /// `key_overrides` maps peer identifiers to replacement private keys
    /// applied to the in-memory peer before config/QR generation; entries
    /// are never persisted or logged.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error (peer lookup, access check, mail
    /// construction, or transport failure); peers after it in the batch
    /// are left unprocessed.
    pub async fn send_peer_mail(
        &self,
        mode: DeliveryMode,
        key_overrides: &HashMap<PeerIdentifier, String>,
        peer_ids: &[PeerIdentifier],
    ) -> Result<()> {
        for peer_id in peer_ids {
            let mut peer = match self.peers.peer(peer_id).await {
                Ok(peer) => peer,
                Err(source) => {
                    return Err(MailError::PeerLookup {
                        peer: peer_id.clone(),
                        source,
                    });
                }
            };

            self.access
                .check_peer_access(peer.user_identifier.as_ref())
                .await
                .map_err(|source| MailError::AccessDenied { source })?;

            let user = match self.resolve_recipient(&peer).await {
                StepOutcome::Proceed(user) => user,
                StepOutcome::Skip(reason) => {
                    log_skip(peer_id, &reason);
                    continue;
                }
                StepOutcome::Fail(err) => return Err(err),
            };

            if let Some(private_key) = key_overrides.get(peer_id) {
                peer.keys.private_key = Some(private_key.clone());
            }

            let address = match recipient_address(&user) {
                StepOutcome::Proceed(address) => address,
                StepOutcome::Skip(reason) => {
                    log_skip(peer_id, &reason);
                    continue;
                }
                StepOutcome::Fail(err) => return Err(err),
            };

            self.deliver(mode, &peer, &user, &address).await?;
        }

        Ok(())
    }

    /// Resolves the user a peer's mail should go to.
    ///
    /// An unlinked peer and an unresolvable user record are both soft
    /// skips; only the peer lookup itself (handled by the caller) is a
    /// structural fault.
    async fn resolve_recipient(&self, peer: &Peer) -> StepOutcome<User> {
        let Some(owner) = peer.user_identifier.as_ref() else {
            return StepOutcome::Skip(SkipReason::NoLinkedUser);
        };

        match self.users.user(owner).await {
            Ok(user) => StepOutcome::Proceed(user),
            Err(source) => StepOutcome::Skip(SkipReason::UserLookupFailed(source)),
        }
    }

    /// Assembles and dispatches the mail for one eligible peer.
    async fn deliver(
        &self,
        mode: DeliveryMode,
        peer: &Peer,
        user: &User,
        address: &str,
    ) -> Result<()> {
        let (body, mut options) = match mode {
            DeliveryMode::LinkOnly => self.link_mail(peer, user)?,
            DeliveryMode::FullConfig => self.full_config_mail(peer, user).await?,
        };

        options.html_body = Some(body.html);

        self.mailer
            .send(
                &self.config.subject,
                &body.text,
                &[address.to_string()],
                &options,
            )
            .await
            .map_err(|source| MailError::Transport {
                peer: peer.identifier.clone(),
                source,
            })?;

        info!(
            peer = %peer.identifier,
            user = %user.identifier,
            mode = ?mode,
            "sent peer configuration mail"
        );

        Ok(())
    }

    /// Builds the deep-link mail: body pair only, no attachments.
    fn link_mail(&self, peer: &Peer, user: &User) -> Result<(MailBody, MailOptions)> {
        let link = self.peer_link(&peer.identifier);
        let body = self
            .templates
            .config_mail(user, &link)
            .map_err(|source| MailError::BodyRender {
                peer: peer.identifier.clone(),
                source,
            })?;

        Ok((body, MailOptions::default()))
    }

    /// Builds the full-configuration mail: body pair plus the plaintext
    /// config and the embedded QR image, in that order.
    async fn full_config_mail(&self, peer: &Peer, user: &User) -> Result<(MailBody, MailOptions)> {
        let config_text =
            self.config_files
                .peer_config(peer)
                .await
                .map_err(|source| MailError::ConfigFetch {
                    peer: peer.identifier.clone(),
                    source,
                })?;

        let qr_png = warren_qr::encode(&config_text).map_err(|source| MailError::QrEncode {
            peer: peer.identifier.clone(),
            source,
        })?;

        let config_name = peer.config_file_name();
        let qr_name = self.config.qr_attachment_name.clone();

        let body = self
            .templates
            .config_mail_with_attachment(user, &config_name, &qr_name)
            .map_err(|source| MailError::BodyRender {
                peer: peer.identifier.clone(),
                source,
            })?;

        let options = MailOptions {
            html_body: None,
            attachments: vec![
                MailAttachment {
                    name: config_name,
                    content_type: "text/plain".to_string(),
                    data: config_text.into_bytes(),
                    embedded: false,
                },
                MailAttachment {
                    name: qr_name,
                    content_type: "image/png".to_string(),
                    data: qr_png,
                    embedded: true,
                },
            ],
        };

        Ok((body, options))
    }

    /// Builds the portal deep link for a peer.
    fn peer_link(&self, peer: &PeerIdentifier) -> String {
        format!("{}/peer/{peer}", self.config.portal_url.trim_end_matches('/'))
    }
}

/// Extracts the address a user can be notified at.
fn recipient_address(user: &User) -> StepOutcome<String> {
    match user.mail_address() {
        Some(address) => StepOutcome::Proceed(address.to_string()),
        None => StepOutcome::Skip(SkipReason::NoEmailAddress),
    }
}

/// Emits the debug event for a soft skip.
fn log_skip(peer: &PeerIdentifier, reason: &SkipReason) {
    match reason {
        SkipReason::UserLookupFailed(err) => {
            debug!(peer = %peer, reason = reason.as_str(), error = %err, "skipping peer mail");
        }
        SkipReason::NoLinkedUser | SkipReason::NoEmailAddress => {
            debug!(peer = %peer, reason = reason.as_str(), "skipping peer mail");
        }
    }
}
