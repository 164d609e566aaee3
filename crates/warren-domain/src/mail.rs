//! Mail value objects handed to the transport collaborator.

use std::fmt;

/// The rendered text/HTML body pair for a notification mail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailBody {
    /// Plain-text body, sent as the mail's primary payload.
    pub text: String,
    /// HTML body, carried as the multipart alternative.
    pub html: String,
}

/// A single mail attachment.
#[derive(Clone, PartialEq, Eq)]
pub struct MailAttachment {
    /// File name shown to the recipient.
    pub name: String,
    /// MIME content type, e.g. `text/plain` or `image/png`.
    pub content_type: String,
    /// Raw attachment bytes.
    pub data: Vec<u8>,
    /// `true` when the attachment is referenced inline from the HTML body
    /// (e.g. a QR image), `false` for a regular file attachment.
    pub embedded: bool,
}

impl fmt::Debug for MailAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailAttachment")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("data_len", &self.data.len())
            .field("embedded", &self.embedded)
            .finish()
    }
}

/// Options for an outbound mail: the HTML alternative plus an ordered
/// attachment list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MailOptions {
    /// HTML alternative to the plain-text body, if any.
    pub html_body: Option<String>,
    /// Attachments in the order they should appear in the message.
    pub attachments: Vec<MailAttachment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_empty() {
        let options = MailOptions::default();
        assert!(options.html_body.is_none());
        assert!(options.attachments.is_empty());
    }

    #[test]
    fn attachment_debug_omits_payload_bytes() {
        let attachment = MailAttachment {
            name: "wg0.conf".to_string(),
            content_type: "text/plain".to_string(),
            data: b"PrivateKey = abc".to_vec(),
            embedded: false,
        };
        let debug = format!("{attachment:?}");
        assert!(debug.contains("wg0.conf"));
        assert!(debug.contains("data_len"));
        assert!(!debug.contains("PrivateKey"));
    }

    #[test]
    fn attachments_keep_insertion_order() {
        let mut options = MailOptions::default();
        for name in ["first", "second", "third"] {
            options.attachments.push(MailAttachment {
                name: name.to_string(),
                content_type: "text/plain".to_string(),
                data: Vec::new(),
                embedded: false,
            });
        }
        let names: Vec<_> = options.attachments.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }
}
