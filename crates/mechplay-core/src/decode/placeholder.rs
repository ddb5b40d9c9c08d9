//! Solid-color fallback artwork.

use super::{ArtworkSource, NormalizedImage};
use crate::config::{DEFAULT_MAX_EDGE, DEFAULT_PLACEHOLDER_COLOR};

/// Produce a square placeholder of side `edge` filled with `color`.
pub fn generate_placeholder(edge: u16, color: [u8; 3]) -> NormalizedImage {
    let pixel_count = usize::from(edge) * usize::from(edge);
    let pixels = color.iter().copied().cycle().take(pixel_count * 3).collect();

    NormalizedImage {
        width: edge,
        height: edge,
        pixels,
        source: ArtworkSource::Placeholder,
    }
}

/// The default 200x200 placeholder.
pub fn default_placeholder() -> NormalizedImage {
    generate_placeholder(DEFAULT_MAX_EDGE as u16, DEFAULT_PLACEHOLDER_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_placeholder_dimensions() {
        let placeholder = default_placeholder();
        assert_eq!((placeholder.width, placeholder.height), (200, 200));
        assert_eq!(placeholder.byte_size(), 200 * 200 * 3);
        assert!(placeholder.is_placeholder());
    }

    #[test]
    fn test_placeholder_is_solid() {
        let placeholder = generate_placeholder(3, [1, 2, 3]);
        assert!(placeholder.pixels.chunks_exact(3).all(|px| px == [1, 2, 3]));
    }

    #[test]
    fn test_placeholder_deterministic() {
        assert_eq!(default_placeholder(), default_placeholder());
    }
}
