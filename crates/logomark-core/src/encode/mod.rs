//! Export encoding.
//!
//! The editor exports a single PNG named [`EXPORT_FILE_NAME`]. PNG keeps the
//! alpha channel and is lossless, so the export matches the on-screen
//! composition pixel for pixel.

mod png;

pub use png::{encode_png, encode_raster, EncodeError};

/// File name offered for the exported image.
pub const EXPORT_FILE_NAME: &str = "edited-image.png";
