//! Shading drawn around the crop box while cropping.

use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::geometry::{Rect, StageSize};

/// Dashed outline of the crop box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropBorder {
    pub rect: Rect,
    /// CSS colour string
    pub color: String,
    pub width: f64,
    pub dash: [f64; 2],
}

/// Four mask strips plus the border, in stage coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropOverlay {
    /// Top, left, right, bottom.
    pub masks: [Rect; 4],
    pub mask_opacity: f64,
    pub border: CropBorder,
}

impl CropOverlay {
    /// Build the overlay for `region`, styled by an already validated
    /// `config`.
    pub fn new(region: Rect, stage: StageSize, config: &EditorConfig) -> Self {
        Self {
            masks: mask_strips(region, stage),
            mask_opacity: config.overlay_opacity,
            border: CropBorder {
                rect: region,
                color: config.crop_border_color.clone(),
                width: config.crop_border_width,
                dash: config.crop_border_dash,
            },
        }
    }
}

/// The stage minus `region`, as four strips: top, left, right, bottom.
///
/// Top and bottom span the full stage width; left and right only span the
/// region's height. Sizes are clamped at zero where the region sticks out of
/// the stage.
pub fn mask_strips(region: Rect, stage: StageSize) -> [Rect; 4] {
    let top = Rect::new(0.0, 0.0, stage.width, region.y.max(0.0));
    let left = Rect::new(0.0, region.y, region.x.max(0.0), region.height);
    let right = Rect::new(
        region.right(),
        region.y,
        (stage.width - region.right()).max(0.0),
        region.height,
    );
    let bottom = Rect::new(
        0.0,
        region.bottom(),
        stage.width,
        (stage.height - region.bottom()).max(0.0),
    );
    [top, left, right, bottom]
}
