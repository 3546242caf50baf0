//! The `Editor` class exposed to JavaScript.
//!
//! Thin wrapper over [`logomark_core::Editor`]. Gesture and slider methods
//! never throw; uploads, colour changes and export throw a JS `Error` on
//! failure.
//!
//! # Example
//!
//! ```typescript
//! import init, { Editor } from '@logomark/wasm';
//!
//! await init();
//! const editor = new Editor();
//!
//! const ticket = editor.begin_background_load();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! editor.finish_background_load(ticket, bytes);
//!
//! draw(editor.scene());
//! ```

use logomark_core::config::EditorConfig;
use logomark_core::crop::CropAspect;
use logomark_core::decode::decode_image;
use logomark_core::geometry::{Point, Size};
use logomark_core::logo::LogoConfig;
use logomark_core::Editor;
use wasm_bindgen::prelude::*;

use crate::error::to_js_error;
use crate::log;
use crate::types::{JsDimensions, JsLoadTicket};

/// One editing session.
#[wasm_bindgen(js_name = Editor)]
pub struct JsEditor {
    inner: Editor,
}

#[wasm_bindgen(js_class = Editor)]
impl JsEditor {
    /// Create an editor. `config` is an optional partial `EditorConfig`
    /// object; missing fields take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsEditor, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| to_js_error("Invalid editor config", e))?
        };
        Self::with_config(config)
    }

    // ---- stage and zoom ------------------------------------------------

    /// Report the measured container size. Returns true if the stage
    /// changed.
    pub fn resize_stage(&mut self, width: f64, height: f64) -> bool {
        self.inner.resize_stage(Size::new(width, height))
    }

    #[wasm_bindgen(getter)]
    pub fn stage_width(&self) -> f64 {
        self.inner.stage_size().width
    }

    #[wasm_bindgen(getter)]
    pub fn stage_height(&self) -> f64 {
        self.inner.stage_size().height
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.inner.zoom()
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.inner.zoom_in()
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.inner.zoom_out()
    }

    pub fn reset_zoom(&mut self) -> f64 {
        self.inner.reset_zoom()
    }

    // ---- uploads -------------------------------------------------------

    pub fn begin_background_load(&mut self) -> JsLoadTicket {
        JsLoadTicket::from_core(self.inner.begin_background_load())
    }

    /// Decode `bytes` and install them as the background unless a newer
    /// upload has started since `ticket` was issued. Returns whether the
    /// image was installed; superseded bytes are dropped without decoding.
    pub fn finish_background_load(
        &mut self,
        ticket: &JsLoadTicket,
        bytes: &[u8],
    ) -> Result<bool, JsValue> {
        if !self.inner.is_current_background_load(ticket.to_core()) {
            log::info("Ignoring a background upload superseded by a newer one");
            return Ok(false);
        }
        let image = decode_image(bytes).map_err(|e| to_js_error("Background upload failed", e))?;
        Ok(self.inner.finish_background_load(ticket.to_core(), image))
    }

    pub fn begin_logo_load(&mut self) -> JsLoadTicket {
        JsLoadTicket::from_core(self.inner.begin_logo_load())
    }

    /// Logo counterpart of [`JsEditor::finish_background_load`].
    pub fn finish_logo_load(&mut self, ticket: &JsLoadTicket, bytes: &[u8]) -> Result<bool, JsValue> {
        if !self.inner.is_current_logo_load(ticket.to_core()) {
            log::info("Ignoring a logo upload superseded by a newer one");
            return Ok(false);
        }
        let image = decode_image(bytes).map_err(|e| to_js_error("Logo upload failed", e))?;
        Ok(self.inner.finish_logo_load(ticket.to_core(), image))
    }

    /// Natural `{ width, height }` of the background, or `undefined`.
    pub fn image_dimensions(&self) -> Result<JsValue, JsValue> {
        let dims = self.inner.image_dimensions().map(JsDimensions::from);
        serde_wasm_bindgen::to_value(&dims).map_err(|e| to_js_error("image_dimensions", e))
    }

    /// Zoomed `{ width, height }` of the background, or `undefined`.
    pub fn displayed_dimensions(&self) -> Result<JsValue, JsValue> {
        let dims = self
            .inner
            .displayed_dimensions()
            .map(|(width, height)| JsDimensions { width, height });
        serde_wasm_bindgen::to_value(&dims).map_err(|e| to_js_error("displayed_dimensions", e))
    }

    // ---- logo -----------------------------------------------------------

    pub fn set_logo_scale(&mut self, scale: f64) {
        self.inner.set_logo_scale(scale);
    }

    pub fn set_logo_rotation(&mut self, rotation: f64) {
        self.inner.set_logo_rotation(rotation);
    }

    pub fn set_logo_opacity(&mut self, opacity: f64) {
        self.inner.set_logo_opacity(opacity);
    }

    /// Replace scale, rotation and opacity at once from a
    /// `{ scale, rotation, opacity }` object.
    pub fn set_logo_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: LogoConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| to_js_error("Invalid logo config", e))?;
        self.inner.set_logo_config(config);
        Ok(())
    }

    pub fn logo_config(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.logo_config())
            .map_err(|e| to_js_error("logo_config", e))
    }

    /// Commit the logo's position at the end of a drag.
    pub fn end_logo_drag(&mut self, x: f64, y: f64) {
        self.inner.end_logo_drag(Point::new(x, y));
    }

    // ---- canvas ---------------------------------------------------------

    /// Set the stage fill from a `#rgb` or `#rrggbb` string.
    pub fn set_canvas_background(&mut self, hex: &str) -> Result<(), JsValue> {
        self.inner
            .set_canvas_background(hex)
            .map(|_| ())
            .map_err(|e| to_js_error("Invalid background colour", e))
    }

    #[wasm_bindgen(getter)]
    pub fn canvas_background(&self) -> String {
        self.inner.canvas_background().to_hex()
    }

    // ---- crop -----------------------------------------------------------

    #[wasm_bindgen(getter)]
    pub fn is_cropping(&self) -> bool {
        self.inner.crop().is_active()
    }

    pub fn start_crop(&mut self) {
        self.inner.start_crop();
    }

    /// Pick a crop shape by label: `freeform`, `1:1`, `16:9` or `4:3`.
    /// Unknown labels fall back to freeform.
    pub fn set_crop_aspect(&mut self, label: &str) {
        let aspect = CropAspect::from_label(label).unwrap_or_default();
        self.inner.set_crop_aspect(aspect);
    }

    #[wasm_bindgen(getter)]
    pub fn crop_aspect(&self) -> String {
        self.inner.crop().aspect().label().to_string()
    }

    pub fn crop_pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.inner.crop_pointer_down(Point::new(x, y))
    }

    pub fn crop_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.inner.crop_pointer_move(Point::new(x, y))
    }

    pub fn crop_pointer_up(&mut self) -> bool {
        self.inner.crop_pointer_up()
    }

    /// Apply the current region. Returns false if there was none.
    pub fn apply_crop(&mut self) -> bool {
        self.inner.apply_crop().is_some()
    }

    pub fn cancel_crop(&mut self) {
        self.inner.cancel_crop();
    }

    pub fn reset_crop(&mut self) {
        self.inner.reset_crop();
    }

    // ---- output ---------------------------------------------------------

    /// Everything the renderer needs, as a plain object.
    pub fn scene(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.scene()).map_err(|e| to_js_error("scene", e))
    }

    /// Render the stage (cut to the applied crop) and encode it as PNG.
    pub fn export_png(&self) -> Result<Vec<u8>, JsValue> {
        let png = self
            .inner
            .export_png()
            .map_err(|e| to_js_error("Export failed", e))?;
        log::info(&format!("Exported {} bytes", png.len()));
        Ok(png)
    }
}

impl JsEditor {
    pub(crate) fn with_config(config: EditorConfig) -> Result<JsEditor, JsValue> {
        Editor::new(config)
            .map(|inner| JsEditor { inner })
            .map_err(|e| to_js_error("Invalid editor config", e))
    }
}

impl Default for JsEditor {
    fn default() -> Self {
        Self {
            inner: Editor::default(),
        }
    }
}
