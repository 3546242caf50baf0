//! Decoding uploads into RGBA rasters.
//!
//! This module provides:
//! - Decoding background and logo uploads (format sniffed from the bytes)
//! - EXIF orientation correction, matching browser behaviour
//! - Resizing for drawing the fitted background
//!
//! All operations are synchronous; the host decides when a decode result is
//! still wanted (see [`crate::editor::LoadTicket`]).

mod resize;
mod types;
mod upload;

pub use resize::resize;
pub use types::{DecodeError, Orientation, RasterImage};
pub use upload::decode_image;
