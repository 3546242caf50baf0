//! Software rendering of the editor stage for export.

mod compose;
mod crop;

pub use compose::{rasterize, Composition};
pub use crop::crop_raster;
