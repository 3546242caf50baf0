//! WASM-compatible wrapper types.
//!
//! Small values cross the boundary as plain objects through
//! `serde-wasm-bindgen`; load tickets stay opaque so JavaScript can only hand
//! back what it was given.

use logomark_core::geometry::Size;
use logomark_core::LoadTicket;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Handle for one pending upload.
///
/// Obtain it with `beginBackgroundLoad` / `beginLogoLoad` before reading the
/// file and pass it back with the bytes once they arrive.
#[wasm_bindgen(js_name = LoadTicket)]
#[derive(Debug, Clone, Copy)]
pub struct JsLoadTicket {
    inner: LoadTicket,
}

#[wasm_bindgen(js_class = LoadTicket)]
impl JsLoadTicket {
    /// Generation number, for logging only.
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> f64 {
        self.inner.generation() as f64
    }
}

impl JsLoadTicket {
    pub(crate) fn from_core(inner: LoadTicket) -> Self {
        Self { inner }
    }

    pub(crate) fn to_core(self) -> LoadTicket {
        self.inner
    }
}

/// `{ width, height }` in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct JsDimensions {
    pub width: u32,
    pub height: u32,
}

impl From<Size> for JsDimensions {
    fn from(size: Size) -> Self {
        Self {
            width: size.width.round().max(0.0) as u32,
            height: size.height.round().max(0.0) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_from_size() {
        let dims = JsDimensions::from(Size::new(759.6, 380.2));
        assert_eq!(dims, JsDimensions { width: 760, height: 380 });
    }

    #[test]
    fn test_ticket_round_trip() {
        let ticket = LoadTicket::from_generation(7);
        let js = JsLoadTicket::from_core(ticket);
        assert_eq!(js.generation(), 7.0);
        assert_eq!(js.to_core(), ticket);
    }
}
