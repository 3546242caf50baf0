//! Stateless geometry helpers for hosts that lay out their own previews.

use logomark_core::fit::{displayed_dimensions, fit_with_ratio, zoom_percent, FIT_RATIO};
use logomark_core::geometry::Size;
use wasm_bindgen::prelude::*;

/// Fit an image into a stage, never upscaling.
///
/// Returns `[width, height]`. A zero-sized image yields the stage size.
#[wasm_bindgen]
pub fn fit_image(image_width: f64, image_height: f64, stage_width: f64, stage_height: f64) -> Vec<f64> {
    let fitted = fit_with_ratio(
        Size::new(image_width, image_height),
        Size::new(stage_width, stage_height),
        FIT_RATIO,
    );
    vec![fitted.width, fitted.height]
}

/// Natural size times zoom, rounded: `[width, height]`.
#[wasm_bindgen]
pub fn zoomed_dimensions(width: f64, height: f64, zoom: f64) -> Vec<u32> {
    let (w, h) = displayed_dimensions(Size::new(width, height), zoom);
    vec![w, h]
}

/// Zoom as a whole percentage for the toolbar readout.
#[wasm_bindgen]
pub fn zoom_label(zoom: f64) -> String {
    format!("{}%", zoom_percent(zoom))
}
