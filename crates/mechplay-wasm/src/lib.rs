//! MechPlay WASM - WebAssembly bindings for MechPlay artwork extraction
//!
//! This crate exposes the mechplay-core extraction pipeline to
//! JavaScript/TypeScript hosts, operating on in-memory file bytes.
//!
//! # Module Structure
//!
//! - `artwork` - Extraction entry points
//! - `types` - WASM-compatible wrapper for normalized artwork
//!
//! # Usage
//!
//! ```typescript
//! import init, { extract_artwork } from '@mechplay/wasm';
//!
//! await init();
//! const art = extract_artwork(new Uint8Array(await file.arrayBuffer()));
//! ```

use wasm_bindgen::prelude::*;

mod artwork;
mod types;

pub use artwork::{
    decode_synchsafe, extract_artwork, extract_artwork_with_config, placeholder_artwork,
};
pub use types::JsNormalizedImage;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
