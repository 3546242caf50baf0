//! Turning core errors into JavaScript exceptions.

use std::fmt::Display;

use wasm_bindgen::JsValue;

use crate::log;

/// Convert `error` into a thrown `Error`, prefixed with the failing
/// operation, and echo it to the console.
pub(crate) fn to_js_error(operation: &str, error: impl Display) -> JsValue {
    let message = format!("{}: {}", operation, error);
    log::warn(&message);
    js_sys::Error::new(&message).into()
}
