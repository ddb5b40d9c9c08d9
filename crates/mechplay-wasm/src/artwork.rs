//! Artwork extraction WASM bindings.
//!
//! The host passes the whole media file (or at least its leading tag) as a
//! `Uint8Array`; no file-system access happens on the WASM side.
//!
//! # Example
//!
//! ```typescript
//! import { extract_artwork } from '@mechplay/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const art = extract_artwork(bytes);
//! console.log(`${art.width}x${art.height}, placeholder: ${art.is_placeholder}`);
//! ```

use crate::types::JsNormalizedImage;
use mechplay_core::{id3, ArtworkConfig, ArtworkExtractor};
use wasm_bindgen::prelude::*;

/// Extract artwork with the default settings. Never throws.
#[wasm_bindgen]
pub fn extract_artwork(bytes: &[u8]) -> JsNormalizedImage {
    ArtworkExtractor::default().extract_from_bytes(bytes).into()
}

/// Extract artwork with settings given as a plain object, e.g.
/// `{ max_edge: 128, terminator: "EncodingAware" }`. Missing fields take
/// their defaults.
///
/// # Errors
///
/// Throws only if `config` does not deserialize; artwork failures still
/// return the placeholder.
#[wasm_bindgen]
pub fn extract_artwork_with_config(
    bytes: &[u8],
    config: JsValue,
) -> Result<JsNormalizedImage, JsValue> {
    let config: ArtworkConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid artwork config: {}", e)))?;

    Ok(ArtworkExtractor::new(config).extract_from_bytes(bytes).into())
}

/// The default 200x200 placeholder.
#[wasm_bindgen]
pub fn placeholder_artwork() -> JsNormalizedImage {
    ArtworkExtractor::default().placeholder().into()
}

/// Decode a 4-byte synchsafe integer.
///
/// Returns `undefined` unless exactly 4 bytes are given.
#[wasm_bindgen]
pub fn decode_synchsafe(bytes: &[u8]) -> Option<u32> {
    let raw: [u8; 4] = bytes.try_into().ok()?;
    Some(id3::decode_synchsafe(raw))
}
