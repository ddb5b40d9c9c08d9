//! Error types for artwork extraction and the song library.

use std::path::PathBuf;

use thiserror::Error;

use crate::library::SongId;

/// Error kinds raised by the artwork pipeline stages.
///
/// None of these reach the end user: [`crate::ArtworkExtractor::extract`]
/// logs them and substitutes the placeholder image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtworkError {
    /// The media file could not be opened.
    #[error("File not found or not readable: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading from an opened file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The file does not start with the `ID3` marker.
    #[error("No ID3 tag present")]
    NoTag,

    /// The header or tag body is shorter than declared.
    #[error("Truncated tag: declared {declared} bytes, {available} available")]
    TruncatedTag { declared: usize, available: usize },

    /// The tag carries no frame with the requested id.
    #[error("No picture frame found")]
    FrameNotFound,

    /// A frame's sub-fields run past the end of its payload.
    #[error("Truncated frame: {0}")]
    TruncatedFrame(String),

    /// The embedded bytes are not a decodable image.
    #[error("Image decode error: {0}")]
    ImageDecode(String),
}

/// Errors raised at the song library boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// The library already holds its configured maximum number of songs.
    #[error("Song library is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// No song with this id is registered.
    #[error("Unknown song id: {0}")]
    UnknownSong(SongId),
}
