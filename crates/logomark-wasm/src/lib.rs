//! Logomark WASM - WebAssembly bindings for Logomark
//!
//! This crate exposes the logomark-core editor to JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `editor` - The `Editor` class: uploads, logo controls, zoom, crop, export
//! - `fit` - Stateless fit and zoom helpers
//! - `types` - WASM-compatible wrapper types (load tickets, dimensions)
//!
//! # Usage
//!
//! ```typescript
//! import init, { Editor, export_file_name } from '@logomark/wasm';
//!
//! await init();
//! const editor = new Editor({ fitRatio: 0.95, zoomStep: 1.2 });
//! editor.resize_stage(container.clientWidth, container.clientHeight);
//!
//! const png = editor.export_png();
//! download(new Blob([png], { type: 'image/png' }), export_file_name());
//! ```

use wasm_bindgen::prelude::*;

mod editor;
mod error;
mod fit;
mod log;
mod types;

pub use editor::JsEditor;
pub use fit::{fit_image, zoom_label, zoomed_dimensions};
pub use types::JsLoadTicket;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// File name to offer for the exported PNG.
#[wasm_bindgen]
pub fn export_file_name() -> String {
    logomark_core::EXPORT_FILE_NAME.to_string()
}
