//! Configuration-to-QR encoding.

use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};

use crate::error::Result;

/// Rendered pixels per QR module.
pub const MODULE_PIXELS: u32 = 4;

/// Renders configuration text as a PNG-encoded QR code.
///
/// Comment lines are stripped first (see [`strip_comments`]); the remaining
/// payload is encoded at the lowest error-correction level and rendered as
/// a grayscale raster with a quiet zone. An all-comment or blank input
/// still yields a valid, nearly empty symbol.
///
/// # Errors
///
/// Returns [`QrError`](crate::QrError) if the payload exceeds QR capacity
/// or the image cannot be serialized. There is no fallback encoding.
pub fn encode(raw_config: &str) -> Result<Vec<u8>> {
    let payload = strip_comments(raw_config);

    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)?;
    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .quiet_zone(true)
        .build();

    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

/// Prepares configuration text for encoding.
///
/// Each line is trimmed of surrounding whitespace; lines whose trimmed
/// form starts with `#` are dropped entirely, every other line is kept
/// followed by a single newline.
#[must_use]
pub fn strip_comments(raw_config: &str) -> String {
    let mut payload = String::with_capacity(raw_config.len());
    for line in raw_config.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        payload.push_str(line);
        payload.push('\n');
    }
    payload
}
