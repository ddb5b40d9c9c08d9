//! MechPlay Core - embedded artwork extraction
//!
//! This crate turns a media file into display-ready cover art: it reads the
//! ID3v2 tag prepended to the audio, locates the attached-picture frame,
//! decodes the embedded JPEG/PNG and shrinks it into a bounding box. Every
//! failure degrades to a solid placeholder, so extraction never fails at the
//! API level.
//!
//! # Module Structure
//!
//! - `id3` - Bounds-checked tag, frame and picture-frame parsing
//! - `decode` - Image decoding, bounding-box resize and placeholder
//! - `artwork` - The extraction pipeline
//! - `library` - Owned song collection with per-song artwork
//! - `config` - Extraction and library settings
//! - `error` - Error types
//!
//! # Examples
//!
//! ```ignore
//! use mechplay_core::extract;
//!
//! let artwork = extract("Ashes.mp3");
//! println!("{}x{} (placeholder: {})", artwork.width, artwork.height, artwork.is_placeholder());
//! ```

pub mod artwork;
pub mod config;
pub mod decode;
pub mod error;
pub mod id3;
pub mod library;

pub use artwork::{extract, ArtworkExtractor};
pub use config::{ArtworkConfig, LibraryConfig};
pub use decode::{ArtworkSource, FilterType, NormalizedImage};
pub use error::{ArtworkError, LibraryError};
pub use id3::TextTerminator;
pub use library::{Song, SongId, SongLibrary};
