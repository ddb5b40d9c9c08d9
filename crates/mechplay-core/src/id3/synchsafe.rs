//! Synchsafe integer codec.
//!
//! ID3v2 stores sizes as four bytes with the high bit of each byte cleared,
//! giving 28 usable bits. This keeps tag bytes from ever forming an MPEG
//! frame sync pattern (`0xFF 0xE0`).

/// Largest value representable as a synchsafe integer (2^28 - 1).
pub const SYNCHSAFE_MAX: u32 = (1 << 28) - 1;

/// Decode a 4-byte synchsafe integer.
///
/// The high bit of each byte is ignored, so any input is accepted and the
/// result is always below 2^28.
#[inline]
pub fn decode_synchsafe(bytes: [u8; 4]) -> u32 {
    (u32::from(bytes[0] & 0x7F) << 21)
        | (u32::from(bytes[1] & 0x7F) << 14)
        | (u32::from(bytes[2] & 0x7F) << 7)
        | u32::from(bytes[3] & 0x7F)
}

/// Encode a value as a 4-byte synchsafe integer.
///
/// Exact inverse of [`decode_synchsafe`] for values up to [`SYNCHSAFE_MAX`];
/// bits above 28 are discarded.
#[inline]
pub fn encode_synchsafe(value: u32) -> [u8; 4] {
    [
        ((value >> 21) & 0x7F) as u8,
        ((value >> 14) & 0x7F) as u8,
        ((value >> 7) & 0x7F) as u8,
        (value & 0x7F) as u8,
    ]
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Decoding never exceeds 28 bits.
        #[test]
        fn prop_decode_is_bounded(bytes in any::<[u8; 4]>()) {
            prop_assert!(decode_synchsafe(bytes) <= SYNCHSAFE_MAX);
        }

        /// Property: Encode then decode returns the original value.
        #[test]
        fn prop_round_trip(value in 0u32..=SYNCHSAFE_MAX) {
            prop_assert_eq!(decode_synchsafe(encode_synchsafe(value)), value);
        }
    }
}
