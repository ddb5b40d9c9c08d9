//! WASM-compatible wrapper types for artwork.

use mechplay_core::NormalizedImage;
use wasm_bindgen::prelude::*;

/// Normalized artwork for JavaScript.
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsNormalizedImage {
    width: u16,
    height: u16,
    pixels: Vec<u8>,
    placeholder: bool,
}

#[wasm_bindgen]
impl JsNormalizedImage {
    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// True when extraction failed and this is the fallback fill.
    #[wasm_bindgen(getter)]
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Returns RGB pixel data as Uint8Array.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl From<NormalizedImage> for JsNormalizedImage {
    fn from(image: NormalizedImage) -> Self {
        Self {
            placeholder: image.is_placeholder(),
            width: image.width,
            height: image.height,
            pixels: image.pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechplay_core::decode::default_placeholder;
    use mechplay_core::ArtworkSource;

    #[test]
    fn test_from_placeholder() {
        let js_img = JsNormalizedImage::from(default_placeholder());
        assert_eq!(js_img.width(), 200);
        assert_eq!(js_img.height(), 200);
        assert_eq!(js_img.byte_length(), 120_000);
        assert!(js_img.is_placeholder());
    }

    #[test]
    fn test_from_embedded() {
        let pixels = vec![255u8, 128, 64, 32, 16, 8];
        let js_img = JsNormalizedImage::from(NormalizedImage {
            width: 2,
            height: 1,
            pixels: pixels.clone(),
            source: ArtworkSource::Embedded,
        });
        assert!(!js_img.is_placeholder());
        assert_eq!(js_img.pixels(), pixels);
    }
}
