//! Logomark Core - Logo overlay editor library
//!
//! This crate holds everything the editor computes: fitting the background
//! into the stage, composing the logo on top of it, tracking the crop
//! rectangle, and rendering the result to a PNG for export. It has no
//! browser dependencies; `logomark-wasm` wraps it for JavaScript.
//!
//! The main entry point is [`Editor`], which owns the session state and
//! produces a [`Scene`] for the host to draw.

pub mod color;
pub mod compositor;
pub mod config;
pub mod crop;
pub mod decode;
pub mod editor;
pub mod encode;
pub mod fit;
pub mod geometry;
pub mod logo;
pub mod render;
pub mod scene;
pub mod view;

pub use color::{ColorError, Rgba};
pub use compositor::{place_background, BackgroundPlacement, LogoTransform};
pub use config::{ConfigError, EditorConfig};
pub use crop::{CropArea, CropAspect, CropOverlay, CropPhase, CropTracker};
pub use decode::{decode_image, DecodeError, RasterImage};
pub use editor::{Editor, ExportError, LoadTicket};
pub use encode::{encode_png, EncodeError, EXPORT_FILE_NAME};
pub use fit::{fit, fit_with_ratio, FIT_RATIO};
pub use geometry::{ImageDimensions, Point, Rect, Size, StageSize};
pub use logo::LogoConfig;
pub use scene::Scene;
pub use view::{StageTracker, ZoomLevel};
