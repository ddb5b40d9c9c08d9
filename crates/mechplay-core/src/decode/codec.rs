//! Artwork codec selection and decoding, with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageFormat, ImageReader};
use tracing::debug;

use super::{resize_to_fit, DecodedImage, NormalizedImage, Orientation};
use crate::config::{ArtworkConfig, DEFAULT_MAX_EDGE};
use crate::error::ArtworkError;

/// Map a picture frame MIME type to the codec that should decode it.
///
/// Returns `None` for unknown or empty MIME types; those are decoded by
/// sniffing the content instead.
pub fn format_for_mime(mime_type: &str) -> Option<ImageFormat> {
    match mime_type {
        "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
        "image/png" => Some(ImageFormat::Png),
        _ => None,
    }
}

/// Decode embedded image bytes to RGB.
///
/// # Errors
///
/// Returns `ArtworkError::ImageDecode` if the bytes do not decode with the
/// codec implied by `mime_type`, or decode to a zero-sized image.
pub fn decode_image(
    bytes: &[u8],
    mime_type: &str,
    apply_orientation: bool,
) -> Result<DecodedImage, ArtworkError> {
    let cursor = Cursor::new(bytes);
    let reader = match format_for_mime(mime_type) {
        Some(format) => ImageReader::with_format(cursor, format),
        None => ImageReader::new(cursor)
            .with_guessed_format()
            .map_err(|e| ArtworkError::ImageDecode(e.to_string()))?,
    };

    let mut img = reader
        .decode()
        .map_err(|e| ArtworkError::ImageDecode(e.to_string()))?;

    if apply_orientation {
        img = orient(img, extract_orientation(bytes));
    }

    let decoded = DecodedImage::from_rgb_image(img.into_rgb8());
    if decoded.is_empty() {
        return Err(ArtworkError::ImageDecode("zero-sized image".to_string()));
    }
    Ok(decoded)
}

/// Decode embedded image bytes and shrink them into the configured box.
///
/// # Errors
///
/// Returns `ArtworkError::ImageDecode` on any decode or resize failure.
pub fn normalize(
    bytes: &[u8],
    mime_type: &str,
    config: &ArtworkConfig,
) -> Result<NormalizedImage, ArtworkError> {
    let decoded = decode_image(bytes, mime_type, config.apply_orientation)?;
    debug!(
        width = decoded.width,
        height = decoded.height,
        mime_type,
        "decoded artwork"
    );

    let max_edge = config.max_edge.clamp(1, DEFAULT_MAX_EDGE);
    let fitted = resize_to_fit(&decoded, max_edge, config.filter)?;
    NormalizedImage::try_from(fitted)
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn orient(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
