//! Attached-picture (`APIC`) payload decoding.
//!
//! Layout: text encoding (1 byte), MIME type (terminated string), picture
//! type (1 byte), description (terminated string), then the image data up to
//! the end of the payload.

use serde::{Deserialize, Serialize};

use super::cursor::ByteCursor;
use crate::error::ArtworkError;

/// Text encoding byte values that use 16-bit code units.
const ENCODING_UTF16_BOM: u8 = 1;
const ENCODING_UTF16_BE: u8 = 2;

/// How terminated strings inside a picture frame are delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextTerminator {
    /// Every string ends at the first `0x00`, whatever the text encoding.
    /// UTF-16 descriptions are mis-split under this rule.
    #[default]
    SingleByte,
    /// The description ends at an aligned `0x00 0x00` when the text encoding
    /// is UTF-16 (1 or 2). The MIME type is always single-terminated.
    EncodingAware,
}

/// The decoded sub-fields of a picture frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureFrame<'a> {
    pub text_encoding: u8,
    pub mime_type: String,
    pub picture_type: u8,
    /// Raw description bytes in the frame's text encoding.
    pub description: &'a [u8],
    pub image_data: &'a [u8],
}

/// Decode a picture frame payload.
///
/// # Errors
///
/// Returns `ArtworkError::TruncatedFrame` if a fixed byte or terminator is
/// missing before the payload end, or if no image bytes remain.
pub fn parse_picture_frame(
    payload: &[u8],
    terminator: TextTerminator,
) -> Result<PictureFrame<'_>, ArtworkError> {
    let mut cursor = ByteCursor::new(payload);

    let text_encoding = cursor
        .read_u8()
        .ok_or_else(|| truncated("missing text encoding"))?;

    let mime_type = cursor
        .take_nul_terminated()
        .ok_or_else(|| truncated("unterminated MIME type"))?;

    let picture_type = cursor
        .read_u8()
        .ok_or_else(|| truncated("missing picture type"))?;

    let wide = terminator == TextTerminator::EncodingAware
        && matches!(text_encoding, ENCODING_UTF16_BOM | ENCODING_UTF16_BE);
    let description = if wide {
        cursor.take_wide_nul_terminated()
    } else {
        cursor.take_nul_terminated()
    }
    .ok_or_else(|| truncated("unterminated description"))?;

    let image_data = cursor.rest();
    if image_data.is_empty() {
        return Err(truncated("no image data"));
    }

    Ok(PictureFrame {
        text_encoding,
        mime_type: String::from_utf8_lossy(mime_type).trim().to_ascii_lowercase(),
        picture_type,
        description,
        image_data,
    })
}

fn truncated(reason: &str) -> ArtworkError {
    ArtworkError::TruncatedFrame(reason.to_string())
}
