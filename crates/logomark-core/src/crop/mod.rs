//! Crop region tracking.
//!
//! - [`CropTracker`]: turns pointer gestures into a normalized rectangle
//! - [`CropAspect`]: optional fixed-ratio presets for the rectangle
//! - [`CropOverlay`]: the shading and outline drawn while cropping
//!
//! All rectangles are in stage coordinates and never have negative size.

mod aspect;
mod overlay;
mod tracker;

pub use aspect::CropAspect;
pub use overlay::{mask_strips, CropBorder, CropOverlay};
pub use tracker::{CropArea, CropPhase, CropTracker};
