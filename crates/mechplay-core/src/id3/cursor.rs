//! Bounds-checked reading over an untrusted byte span.
//!
//! Every read validates against the span length before producing a value or
//! sub-span, so a corrupt size field can only ever yield `None`, never an
//! out-of-bounds slice.

/// A forward-only cursor over an immutable byte slice.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Offset of the next unread byte.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// The unread tail, without advancing.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    /// Consume exactly `len` bytes.
    ///
    /// Returns `None` and leaves the cursor untouched if fewer remain.
    pub fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(len)?;
        let slice = self.bytes.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }

    pub fn read_u8(&mut self) -> Option<u8> {
        self.take(1).map(|b| b[0])
    }

    /// Consume `N` bytes as a fixed-size array.
    pub fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let slice = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Some(out)
    }

    /// Consume a string terminated by a single `0x00` byte.
    ///
    /// The returned slice excludes the terminator. Returns `None` if no
    /// terminator occurs before the end of the span.
    pub fn take_nul_terminated(&mut self) -> Option<&'a [u8]> {
        let len = self.rest().iter().position(|&b| b == 0)?;
        let text = self.take(len)?;
        self.take(1)?;
        Some(text)
    }

    /// Consume a string of 16-bit code units terminated by `0x00 0x00`.
    ///
    /// The terminator is only recognised on a code-unit boundary, so a zero
    /// high byte followed by a zero low byte of the next unit does not end
    /// the string early.
    pub fn take_wide_nul_terminated(&mut self) -> Option<&'a [u8]> {
        let len = self
            .rest()
            .chunks_exact(2)
            .position(|unit| unit == [0, 0])?
            * 2;
        let text = self.take(len)?;
        self.take(2)?;
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_within_bounds() {
        let mut cursor = ByteCursor::new(&[1, 2, 3, 4, 5]);
        assert_eq!(cursor.take(2), Some(&[1u8, 2][..]));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.rest(), &[3, 4, 5]);
    }

    #[test]
    fn test_take_past_end_leaves_cursor_untouched() {
        let mut cursor = ByteCursor::new(&[1, 2, 3]);
        cursor.take(1);
        assert_eq!(cursor.take(3), None);
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.take(usize::MAX), None);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_read_u8_and_array() {
        let mut cursor = ByteCursor::new(b"APIC\x07");
        assert_eq!(cursor.read_array::<4>(), Some(*b"APIC"));
        assert_eq!(cursor.read_u8(), Some(7));
        assert_eq!(cursor.read_u8(), None);
        assert_eq!(cursor.read_array::<1>(), None);
    }

    #[test]
    fn test_nul_terminated() {
        let mut cursor = ByteCursor::new(b"image/png\0rest");
        assert_eq!(cursor.take_nul_terminated(), Some(&b"image/png"[..]));
        assert_eq!(cursor.rest(), b"rest");
    }

    #[test]
    fn test_nul_terminated_empty_string() {
        let mut cursor = ByteCursor::new(&[0, 9]);
        assert_eq!(cursor.take_nul_terminated(), Some(&[][..]));
        assert_eq!(cursor.rest(), &[9]);
    }

    #[test]
    fn test_nul_terminated_missing_terminator() {
        let mut cursor = ByteCursor::new(b"no terminator");
        assert_eq!(cursor.take_nul_terminated(), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_wide_nul_terminated_respects_alignment() {
        // "A" then "\u{0100}" in UTF-16LE: 41 00 00 01, then terminator
        let bytes = [0x41, 0x00, 0x00, 0x01, 0x00, 0x00, 0xAA];
        let mut cursor = ByteCursor::new(&bytes);
        assert_eq!(
            cursor.take_wide_nul_terminated(),
            Some(&[0x41u8, 0x00, 0x00, 0x01][..])
        );
        assert_eq!(cursor.rest(), &[0xAA]);
    }

    #[test]
    fn test_wide_nul_terminated_missing_terminator() {
        let mut cursor = ByteCursor::new(&[0x41, 0x00, 0x00]);
        assert_eq!(cursor.take_wide_nul_terminated(), None);
    }
}
