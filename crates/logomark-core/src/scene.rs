//! What the rendering layer has to draw, as one serialisable snapshot.

use serde::{Deserialize, Serialize};

use crate::compositor::{BackgroundPlacement, LogoTransform};
use crate::crop::{CropArea, CropOverlay};
use crate::geometry::{ImageDimensions, StageSize};

/// Whole-pixel size shown to the user next to the natural size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySize {
    pub width: u32,
    pub height: u32,
}

/// Background layer: where to draw it and the sizes reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundLayer {
    pub placement: BackgroundPlacement,
    pub natural: ImageDimensions,
    pub displayed: DisplaySize,
}

/// Snapshot of the stage for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub stage: StageSize,
    /// Uniform scale applied to the whole stage.
    pub zoom: f64,
    pub zoom_percent: u32,
    pub canvas_background: String,
    pub background: Option<BackgroundLayer>,
    /// Absent with no logo loaded, and hidden while cropping.
    pub logo: Option<LogoTransform>,
    pub cropping: bool,
    /// Present while cropping once a region exists.
    pub crop_overlay: Option<CropOverlay>,
    /// Toolbar readout of the current region and its anchor.
    pub crop_area: Option<CropArea>,
}
