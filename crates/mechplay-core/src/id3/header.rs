//! ID3v2 container header and tag body reading.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::debug;

use super::synchsafe::decode_synchsafe;
use crate::error::ArtworkError;

/// Marker bytes at offset 0 of every ID3v2 tag.
pub const TAG_MARKER: [u8; 3] = *b"ID3";

/// Fixed length of the container header.
pub const HEADER_LEN: usize = 10;

/// The 10-byte header preceding the tag body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Major version (3 for ID3v2.3, 4 for ID3v2.4). Any value is accepted.
    pub major_version: u8,
    /// Revision byte; informational only.
    pub revision: u8,
    /// Header flag byte; informational only.
    pub flags: u8,
    /// Exact byte length of the tag body. Always synchsafe, for every version.
    pub declared_size: u32,
}

impl ContainerHeader {
    /// Parse a header from its raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `ArtworkError::NoTag` if the bytes do not start with `ID3`.
    pub fn parse(bytes: &[u8; HEADER_LEN]) -> Result<Self, ArtworkError> {
        if bytes[0..3] != TAG_MARKER {
            return Err(ArtworkError::NoTag);
        }

        Ok(Self {
            major_version: bytes[3],
            revision: bytes[4],
            flags: bytes[5],
            declared_size: decode_synchsafe([bytes[6], bytes[7], bytes[8], bytes[9]]),
        })
    }
}

/// A validated tag: its header plus exactly `declared_size` body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id3Tag {
    pub header: ContainerHeader,
    pub body: Vec<u8>,
}

/// Read the tag at the start of `reader`.
///
/// Reads the 10-byte header, then at most `declared_size` body bytes. Nothing
/// beyond the tag is consumed.
///
/// # Errors
///
/// - `ArtworkError::NoTag` - the stream does not start with `ID3`
/// - `ArtworkError::TruncatedTag` - header or body ends early
/// - `ArtworkError::Io` - the underlying read failed
pub fn read_tag<R: Read>(reader: &mut R) -> Result<Id3Tag, ArtworkError> {
    let mut header_bytes = [0u8; HEADER_LEN];
    let read = read_up_to(reader, &mut header_bytes)?;

    // A short file that cannot even hold the marker is not a tag at all
    if read < TAG_MARKER.len() || header_bytes[0..3] != TAG_MARKER {
        return Err(ArtworkError::NoTag);
    }
    if read < HEADER_LEN {
        return Err(ArtworkError::TruncatedTag {
            declared: HEADER_LEN,
            available: read,
        });
    }

    let header = ContainerHeader::parse(&header_bytes)?;
    let declared = header.declared_size as usize;

    // No pre-allocation: the declared size is untrusted
    let mut body = Vec::new();
    reader
        .take(u64::from(header.declared_size))
        .read_to_end(&mut body)
        .map_err(|e| ArtworkError::Io(e.to_string()))?;

    if body.len() < declared {
        return Err(ArtworkError::TruncatedTag {
            declared,
            available: body.len(),
        });
    }

    debug!(
        major_version = header.major_version,
        declared_size = header.declared_size,
        "read ID3 tag"
    );

    Ok(Id3Tag { header, body })
}

/// Open `path` and read its tag. The file is closed before returning.
///
/// # Errors
///
/// Returns `ArtworkError::NotFound` if the file cannot be opened, otherwise
/// the errors of [`read_tag`].
pub fn read_tag_from_path(path: &Path) -> Result<Id3Tag, ArtworkError> {
    let mut file = File::open(path).map_err(|_| ArtworkError::NotFound(path.to_path_buf()))?;
    read_tag(&mut file)
}

/// Read the tag at the start of an in-memory file.
pub fn read_tag_from_bytes(bytes: &[u8]) -> Result<Id3Tag, ArtworkError> {
    let mut reader = bytes;
    read_tag(&mut reader)
}

/// Fill as much of `buf` as the reader can provide, returning the count.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, ArtworkError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ArtworkError::Io(e.to_string())),
        }
    }
    Ok(filled)
}
