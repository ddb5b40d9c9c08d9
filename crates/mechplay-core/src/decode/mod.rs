//! Artwork decoding pipeline.
//!
//! This module provides functionality for:
//! - Decoding embedded JPEG/PNG bytes, selected by MIME type
//! - Applying EXIF orientation
//! - Shrinking artwork into a bounding box without upscaling
//! - Generating the solid-color placeholder
//!
//! # Examples
//!
//! ```ignore
//! use mechplay_core::config::ArtworkConfig;
//! use mechplay_core::decode::normalize;
//!
//! let image = normalize(&jpeg_bytes, "image/jpeg", &ArtworkConfig::default())?;
//! assert!(image.width <= 200 && image.height <= 200);
//! ```

mod codec;
mod placeholder;
mod resize;
mod types;

pub use codec::{decode_image, format_for_mime, normalize};
pub use placeholder::{default_placeholder, generate_placeholder};
pub use resize::{resize, resize_to_fit};
pub use types::{ArtworkSource, DecodedImage, FilterType, NormalizedImage, Orientation};

#[cfg(test)]
pub(crate) use codec::tests::{jpeg_bytes, png_bytes};
