//! Settings for artwork extraction and the song library.

use serde::{Deserialize, Serialize};

use crate::decode::FilterType;
use crate::id3::{TextTerminator, PICTURE_FRAME_ID};

/// Default bounding-box edge for artwork, in pixels.
pub const DEFAULT_MAX_EDGE: u32 = 200;

/// Default placeholder fill (dark grey).
pub const DEFAULT_PLACEHOLDER_COLOR: [u8; 3] = [80, 80, 80];

/// Default maximum number of songs held by a library.
pub const DEFAULT_LIBRARY_CAPACITY: usize = 100;

/// Artwork extraction settings.
///
/// The default reproduces the reference behavior: a 200x200 box, single-byte
/// string terminators and the `APIC` frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtworkConfig {
    /// Maximum width and height of normalized artwork (1 to 200).
    pub max_edge: u32,
    /// Interpolation used when shrinking artwork.
    pub filter: FilterType,
    /// RGB fill of the placeholder image.
    pub placeholder_color: [u8; 3],
    /// String terminator convention inside picture frames.
    pub terminator: TextTerminator,
    /// Rotate/flip JPEG artwork according to its EXIF orientation.
    pub apply_orientation: bool,
    /// Frame id holding the picture.
    pub target_frame: [u8; 4],
}

impl Default for ArtworkConfig {
    fn default() -> Self {
        Self {
            max_edge: DEFAULT_MAX_EDGE,
            filter: FilterType::default(),
            placeholder_color: DEFAULT_PLACEHOLDER_COLOR,
            terminator: TextTerminator::default(),
            apply_orientation: true,
            target_frame: PICTURE_FRAME_ID,
        }
    }
}

impl ArtworkConfig {
    /// Create a new ArtworkConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp `max_edge` into `1..=DEFAULT_MAX_EDGE`. The box may shrink but
    /// never grow past 200 pixels.
    pub fn validated(mut self) -> Self {
        self.max_edge = self.max_edge.clamp(1, DEFAULT_MAX_EDGE);
        self
    }
}

/// Song library settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Maximum number of songs, or `None` for no limit.
    pub capacity: Option<usize>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            capacity: Some(DEFAULT_LIBRARY_CAPACITY),
        }
    }
}
