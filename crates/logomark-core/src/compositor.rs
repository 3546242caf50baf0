//! Combining fit, zoom and centering into draw coordinates.
//!
//! # Coordinate System
//!
//! The whole stage is uniformly scaled by the zoom level `z`. Anything placed
//! at stage coordinate `p` with size `s` therefore shows up on screen at
//! `p * z` with size `s * z`. The background origin is computed so that
//! `(stage - fitted * z) / 2` is the draw position inside that scaled space.
//!
//! The logo lives in the same scaled space but is independent of the
//! background's fit: its position is a free stage coordinate.

use serde::{Deserialize, Serialize};

use crate::fit::fit_with_ratio;
use crate::geometry::{ImageDimensions, Point, Rect, Size, StageSize};
use crate::logo::LogoConfig;

/// Where and how large the background is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundPlacement {
    /// Draw origin inside the zoomed coordinate space.
    pub origin: Point,
    /// Fitted size inside the zoomed coordinate space.
    pub size: Size,
    pub zoom: f64,
}

impl BackgroundPlacement {
    /// Draw rectangle inside the zoomed coordinate space.
    pub fn rect(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, self.size.width, self.size.height)
    }

    /// Rectangle actually covered on screen, i.e. after the zoom scale.
    pub fn screen_rect(&self) -> Rect {
        Rect::new(
            self.origin.x * self.zoom,
            self.origin.y * self.zoom,
            self.size.width * self.zoom,
            self.size.height * self.zoom,
        )
    }
}

/// Draw origin of a fitted image for the given stage and zoom.
pub fn background_origin(fitted: Size, stage: StageSize, zoom: f64) -> Point {
    Point::new(
        (stage.width - fitted.width * zoom) / 2.0,
        (stage.height - fitted.height * zoom) / 2.0,
    )
}

/// Fit `natural` into `stage` and center it for `zoom`.
pub fn place_background(
    natural: ImageDimensions,
    stage: StageSize,
    zoom: f64,
    fit_ratio: f64,
) -> BackgroundPlacement {
    let size = fit_with_ratio(natural, stage, fit_ratio);
    BackgroundPlacement {
        origin: background_origin(size, stage, zoom),
        size,
        zoom,
    }
}

/// Everything a renderer needs to draw the logo.
///
/// The logo group sits at `position`, shifted back by `offset`. Inside it the
/// bitmap is scaled by `scale` and rotated clockwise by `rotation` degrees
/// about its own top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoTransform {
    pub position: Point,
    pub offset: Point,
    pub scale: f64,
    pub rotation: f64,
    pub opacity: f64,
}

impl LogoTransform {
    /// Build the transform for a logo bitmap of `logo_size` natural pixels.
    pub fn new(position: Point, config: LogoConfig, logo_size: Size) -> Self {
        Self {
            position,
            offset: Point::new(
                logo_size.width * config.scale / 2.0,
                logo_size.height * config.scale / 2.0,
            ),
            scale: config.scale,
            rotation: config.rotation,
            opacity: config.opacity,
        }
    }

    /// Stage position of the bitmap's top-left corner (the rotation pivot).
    pub fn pivot(&self) -> Point {
        Point::new(
            self.position.x - self.offset.x,
            self.position.y - self.offset.y,
        )
    }

    /// Map a bitmap pixel coordinate to stage space.
    pub fn to_stage(&self, u: f64, v: f64) -> Point {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let x = u * self.scale;
        let y = v * self.scale;
        let pivot = self.pivot();
        Point::new(pivot.x + x * cos - y * sin, pivot.y + x * sin + y * cos)
    }

    /// Map a stage point back to bitmap pixel coordinates.
    ///
    /// Returns `None` for a degenerate (zero) scale.
    pub fn to_bitmap(&self, point: Point) -> Option<(f64, f64)> {
        if self.scale <= 0.0 {
            return None;
        }
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let pivot = self.pivot();
        let dx = point.x - pivot.x;
        let dy = point.y - pivot.y;
        let x = dx * cos + dy * sin;
        let y = -dx * sin + dy * cos;
        Some((x / self.scale, y / self.scale))
    }

    /// Axis-aligned stage bounds of the transformed bitmap.
    pub fn bounds(&self, logo_size: Size) -> Rect {
        let corners = [
            self.to_stage(0.0, 0.0),
            self.to_stage(logo_size.width, 0.0),
            self.to_stage(0.0, logo_size.height),
            self.to_stage(logo_size.width, logo_size.height),
        ];
        let min_x = corners.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = corners.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = corners.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = corners.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}
