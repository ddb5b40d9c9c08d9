//! Frame scanning within an ID3v2 tag body.
//!
//! Frames are laid out back to back: a 10-byte header (4-byte id, 4-byte
//! size, 2-byte flags) followed by `size` payload bytes. The declared size is
//! the only delimiter, so the first frame whose payload would run past the
//! body ends the scan.

use tracing::debug;

use super::cursor::ByteCursor;
use super::synchsafe::decode_synchsafe;

/// Length of a frame header.
pub const FRAME_HEADER_LEN: usize = 10;

/// Frame id of an attached picture.
pub const PICTURE_FRAME_ID: [u8; 4] = *b"APIC";

/// A parsed frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub id: [u8; 4],
    pub size: u32,
    pub flags: u16,
}

impl FrameHeader {
    /// Parse a frame header for the given tag major version.
    ///
    /// Version 4 stores the size synchsafe; versions 3 and below use a plain
    /// big-endian `u32`.
    pub fn parse(bytes: [u8; FRAME_HEADER_LEN], major_version: u8) -> Self {
        let size_bytes = [bytes[4], bytes[5], bytes[6], bytes[7]];
        let size = if major_version >= 4 {
            decode_synchsafe(size_bytes)
        } else {
            u32::from_be_bytes(size_bytes)
        };

        Self {
            id: [bytes[0], bytes[1], bytes[2], bytes[3]],
            size,
            flags: u16::from_be_bytes([bytes[8], bytes[9]]),
        }
    }

    /// The frame id as text, for diagnostics.
    pub fn id_str(&self) -> String {
        String::from_utf8_lossy(&self.id).into_owned()
    }
}

/// A frame found in the tag body, with its in-bounds payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLocation<'a> {
    pub header: FrameHeader,
    /// Offset of the frame header within the tag body.
    pub offset: usize,
    /// The `size` bytes following the header.
    pub payload: &'a [u8],
}

/// Iterator over the well-formed frames of a tag body.
///
/// Iteration ends at the end of the body, at trailing zero padding, or at the
/// first frame whose declared size exceeds the remaining bytes. Frames with
/// unusual ids (including a leading zero byte) are yielded like any other.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    cursor: ByteCursor<'a>,
    major_version: u8,
    done: bool,
}

impl<'a> Iterator for Frames<'a> {
    type Item = FrameLocation<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let offset = self.cursor.position();
        if self.cursor.rest().iter().all(|&b| b == 0) {
            if self.cursor.remaining() > 0 {
                debug!(offset, "reached tag padding");
            }
            self.done = true;
            return None;
        }

        let Some(raw) = self.cursor.read_array::<FRAME_HEADER_LEN>() else {
            self.done = true;
            return None;
        };

        let header = FrameHeader::parse(raw, self.major_version);

        // Every header read advances the cursor by at least FRAME_HEADER_LEN,
        // so a zero size cannot stall the scan
        match self.cursor.take(header.size as usize) {
            Some(payload) => Some(FrameLocation {
                header,
                offset,
                payload,
            }),
            None => {
                debug!(
                    offset,
                    id = %header.id_str(),
                    size = header.size,
                    remaining = self.cursor.remaining(),
                    "frame overruns tag body"
                );
                self.done = true;
                None
            }
        }
    }
}

/// Iterate over the frames of `body`.
pub fn frames(body: &[u8], major_version: u8) -> Frames<'_> {
    Frames {
        cursor: ByteCursor::new(body),
        major_version,
        done: false,
    }
}

/// Find the first frame with id `target` in a single linear pass.
///
/// Returns `None` if the frame is absent, or if a frame before it (or the
/// target itself) declares a size reaching past the end of the body.
pub fn find_frame<'a>(
    body: &'a [u8],
    major_version: u8,
    target: [u8; 4],
) -> Option<FrameLocation<'a>> {
    frames(body, major_version).find(|frame| frame.header.id == target)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Returned payloads always lie inside the body, for any bytes.
        #[test]
        fn prop_payload_within_body(
            body in prop::collection::vec(any::<u8>(), 0..256),
            major_version in 2u8..=5,
        ) {
            let base = body.as_ptr() as usize;
            for frame in frames(&body, major_version) {
                let start = frame.payload.as_ptr() as usize - base;
                prop_assert!(start + frame.payload.len() <= body.len());
                prop_assert_eq!(start, frame.offset + FRAME_HEADER_LEN);
            }
        }

        /// Property: A crafted target size is honoured only when it fits.
        #[test]
        fn prop_crafted_size_never_escapes(
            declared in any::<u32>(),
            payload in prop::collection::vec(any::<u8>(), 0..64),
            major_version in 3u8..=4,
        ) {
            let body = tests::frame_bytes(b"APIC", declared, &payload, major_version);
            let effective = FrameHeader::parse(
                body[..FRAME_HEADER_LEN].try_into().unwrap(),
                major_version,
            ).size as usize;

            match find_frame(&body, major_version, PICTURE_FRAME_ID) {
                Some(frame) => {
                    prop_assert!(effective <= payload.len());
                    prop_assert_eq!(frame.payload, &payload[..effective]);
                }
                None => prop_assert!(effective > payload.len()),
            }
        }
    }
}
