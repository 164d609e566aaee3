//! Peer configuration QR code rendering for Warren.
//!
//! `warren-qr` turns raw WireGuard configuration text into a compact,
//! scannable QR code image suitable for embedding in a notification mail.
//!
//! Comment lines are stripped before encoding: they are human-readable
//! annotations that add length without semantic value and would otherwise
//! bloat the symbol or force a lower data density. The symbol uses the
//! lowest error-correction level, since the payload is regenerable and
//! scanning conditions are assumed favorable, and is serialized as a PNG
//! (lossless, DEFLATE-compressed) rather than an uncompressed bitmap to
//! keep the attachment small.
//!
//! # Example
//!
//! ```rust
//! let png = warren_qr::encode("[Interface]\n# device: laptop\nPrivateKey = abc\n")
//!     .expect("encode failed");
//! assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod encoder;
pub mod error;

pub use encoder::{encode, strip_comments, MODULE_PIXELS};
pub use error::{QrError, Result};
