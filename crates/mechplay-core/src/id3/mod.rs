//! ID3v2 tag parsing for embedded artwork.
//!
//! This module provides:
//! - Synchsafe integer decoding and encoding
//! - Tag header validation and body reading (from a path or from memory)
//! - Linear frame scanning with version-dependent frame sizes
//! - Attached-picture frame decoding
//!
//! All parsing runs over a bounds-checked cursor; malformed input yields an
//! error or `None`, never an out-of-bounds read.

mod cursor;
mod frame;
mod header;
mod picture;
mod synchsafe;

pub use cursor::ByteCursor;
pub use frame::{
    find_frame, frames, FrameHeader, FrameLocation, Frames, FRAME_HEADER_LEN, PICTURE_FRAME_ID,
};
pub use header::{
    read_tag, read_tag_from_bytes, read_tag_from_path, ContainerHeader, Id3Tag, HEADER_LEN,
    TAG_MARKER,
};
pub use picture::{parse_picture_frame, PictureFrame, TextTerminator};
pub use synchsafe::{decode_synchsafe, encode_synchsafe, SYNCHSAFE_MAX};

#[cfg(test)]
pub(crate) use frame::tests::frame_bytes;
