//! Browser console reporting.
//!
//! Native builds (unit tests) have no console to write to, so these are
//! no-ops there.

#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn info(message: &str) {
    web_sys::console::info_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn warn(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn info(_message: &str) {}
