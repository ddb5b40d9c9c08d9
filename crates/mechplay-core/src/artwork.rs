//! Embedded artwork extraction.
//!
//! [`ArtworkExtractor`] chains the pipeline stages:
//!
//! 1. read the ID3v2 tag at the start of the file
//! 2. find the picture frame
//! 3. split the frame into its sub-fields
//! 4. decode and shrink the image
//!
//! Any stage failure is logged and replaced by the placeholder, so callers
//! always receive displayable artwork.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::{ArtworkConfig, DEFAULT_MAX_EDGE};
use crate::decode::{generate_placeholder, normalize, NormalizedImage};
use crate::error::ArtworkError;
use crate::id3::{find_frame, parse_picture_frame, read_tag_from_bytes, read_tag_from_path, Id3Tag};

/// Extracts normalized artwork from media files.
///
/// Holds only immutable settings; every call works on its own buffers, so
/// repeated calls on the same input produce identical output.
#[derive(Debug, Clone, Default)]
pub struct ArtworkExtractor {
    config: ArtworkConfig,
}

impl ArtworkExtractor {
    pub fn new(config: ArtworkConfig) -> Self {
        Self {
            config: config.validated(),
        }
    }

    pub fn config(&self) -> &ArtworkConfig {
        &self.config
    }

    /// Extract artwork from the file at `path`, falling back to the placeholder.
    pub fn extract(&self, path: impl AsRef<Path>) -> NormalizedImage {
        let path = path.as_ref();
        self.try_extract(path).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "using placeholder artwork");
            self.placeholder()
        })
    }

    /// Extract artwork from an in-memory file, falling back to the placeholder.
    pub fn extract_from_bytes(&self, bytes: &[u8]) -> NormalizedImage {
        self.try_extract_from_bytes(bytes).unwrap_or_else(|err| {
            warn!(len = bytes.len(), error = %err, "using placeholder artwork");
            self.placeholder()
        })
    }

    /// Extract artwork from the file at `path`, reporting why it failed.
    ///
    /// # Errors
    ///
    /// Returns the first [`ArtworkError`] raised by any stage.
    pub fn try_extract(&self, path: impl AsRef<Path>) -> Result<NormalizedImage, ArtworkError> {
        let tag = read_tag_from_path(path.as_ref())?;
        self.artwork_from_tag(&tag)
    }

    /// Extract artwork from an in-memory file, reporting why it failed.
    ///
    /// # Errors
    ///
    /// Returns the first [`ArtworkError`] raised by any stage.
    pub fn try_extract_from_bytes(&self, bytes: &[u8]) -> Result<NormalizedImage, ArtworkError> {
        let tag = read_tag_from_bytes(bytes)?;
        self.artwork_from_tag(&tag)
    }

    /// The fallback image for this configuration.
    pub fn placeholder(&self) -> NormalizedImage {
        // validated() keeps max_edge within DEFAULT_MAX_EDGE
        let edge = u16::try_from(self.config.max_edge.min(DEFAULT_MAX_EDGE)).unwrap_or(1);
        generate_placeholder(edge, self.config.placeholder_color)
    }

    fn artwork_from_tag(&self, tag: &Id3Tag) -> Result<NormalizedImage, ArtworkError> {
        let frame = find_frame(&tag.body, tag.header.major_version, self.config.target_frame)
            .ok_or(ArtworkError::FrameNotFound)?;
        debug!(
            offset = frame.offset,
            size = frame.header.size,
            "found picture frame"
        );

        let picture = parse_picture_frame(frame.payload, self.config.terminator)?;
        debug!(
            mime_type = %picture.mime_type,
            picture_type = picture.picture_type,
            image_len = picture.image_data.len(),
            "parsed picture frame"
        );

        normalize(picture.image_data, &picture.mime_type, &self.config)
    }
}

/// Extract artwork from `path` with the default configuration.
pub fn extract(path: impl AsRef<Path>) -> NormalizedImage {
    ArtworkExtractor::default().extract(path)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
