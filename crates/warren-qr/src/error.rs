//! Error types for QR code rendering.

use thiserror::Error;

/// Errors that can occur while rendering a configuration QR code.
#[derive(Debug, Error)]
pub enum QrError {
    /// The payload could not be encoded as a QR symbol.
    #[error("failed to encode configuration as QR symbol: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// The rendered symbol could not be serialized as a PNG image.
    #[error("failed to serialize QR image: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for QR rendering operations.
pub type Result<T> = std::result::Result<T, QrError>;
