//! Editor tunables.
//!
//! Every constant the editor's geometry depends on lives in [`EditorConfig`].
//! The defaults reproduce the stock editor; a host may override any subset
//! (missing fields fall back to the defaults through `#[serde(default)]`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{ColorError, Rgba};
use crate::geometry::{Point, Size};

/// Errors reported by [`EditorConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("fit_ratio must be in (0, 1], got {0}")]
    FitRatio(f64),

    #[error("zoom range is invalid: min {min}, max {max}")]
    ZoomRange { min: f64, max: f64 },

    #[error("zoom_step must be greater than 1, got {0}")]
    ZoomStep(f64),

    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("overlay_opacity must be in [0, 1], got {0}")]
    OverlayOpacity(f64),

    #[error("invalid colour for {field}: {source}")]
    Color {
        field: &'static str,
        #[source]
        source: ColorError,
    },
}

/// Configuration for an editor session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Share of the stage a fitted background may occupy on each axis.
    pub fit_ratio: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Multiplicative step of one zoom-in/zoom-out action.
    pub zoom_step: f64,
    /// Stage resizes smaller than this (on both axes) are ignored.
    pub resize_threshold: f64,
    /// Floor applied to each axis of a measured container.
    pub min_stage_extent: f64,
    pub initial_stage: Size,
    pub default_logo_position: Point,
    /// Opacity of the four mask strips drawn outside the crop box.
    pub overlay_opacity: f64,
    pub crop_border_color: String,
    pub crop_border_width: f64,
    /// Dash pattern (on, off) of the crop border.
    pub crop_border_dash: [f64; 2],
    pub canvas_background: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            fit_ratio: 0.95,
            min_zoom: 0.5,
            max_zoom: 3.0,
            zoom_step: 1.2,
            resize_threshold: 5.0,
            min_stage_extent: 300.0,
            initial_stage: Size::new(800.0, 600.0),
            default_logo_position: Point::new(50.0, 50.0),
            overlay_opacity: 0.5,
            crop_border_color: "#00ff00".to_string(),
            crop_border_width: 2.0,
            crop_border_dash: [5.0, 5.0],
            canvas_background: "#ffffff".to_string(),
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the values are mutually consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fit_ratio > 0.0 && self.fit_ratio <= 1.0) {
            return Err(ConfigError::FitRatio(self.fit_ratio));
        }
        if !(self.min_zoom > 0.0 && self.min_zoom <= 1.0 && self.max_zoom >= 1.0) {
            return Err(ConfigError::ZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !(self.zoom_step > 1.0) {
            return Err(ConfigError::ZoomStep(self.zoom_step));
        }

        let non_negative = [
            ("resize_threshold", self.resize_threshold),
            ("min_stage_extent", self.min_stage_extent),
            ("initial_stage.width", self.initial_stage.width),
            ("initial_stage.height", self.initial_stage.height),
            ("crop_border_width", self.crop_border_width),
            ("crop_border_dash[0]", self.crop_border_dash[0]),
            ("crop_border_dash[1]", self.crop_border_dash[1]),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if !(0.0..=1.0).contains(&self.overlay_opacity) {
            return Err(ConfigError::OverlayOpacity(self.overlay_opacity));
        }

        self.border_color()?;
        self.background_color()?;
        Ok(())
    }

    pub fn border_color(&self) -> Result<Rgba, ConfigError> {
        Rgba::parse_hex(&self.crop_border_color).map_err(|source| ConfigError::Color {
            field: "crop_border_color",
            source,
        })
    }

    pub fn background_color(&self) -> Result<Rgba, ConfigError> {
        Rgba::parse_hex(&self.canvas_background).map_err(|source| ConfigError::Color {
            field: "canvas_background",
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(EditorConfig::new().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_fit_ratio() {
        let mut config = EditorConfig::default();
        config.fit_ratio = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::FitRatio(1.5)));

        config.fit_ratio = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::FitRatio(_))));
    }

    #[test]
    fn test_rejects_inverted_zoom_range() {
        let mut config = EditorConfig::default();
        config.min_zoom = 2.0;
        config.max_zoom = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZoomRange { .. })
        ));
    }

    #[test]
    fn test_rejects_non_growing_step() {
        let mut config = EditorConfig::default();
        config.zoom_step = 1.0;
        assert_eq!(config.validate(), Err(ConfigError::ZoomStep(1.0)));
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let mut config = EditorConfig::default();
        config.resize_threshold = -1.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "resize_threshold",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_rejects_bad_colour() {
        let mut config = EditorConfig::default();
        config.canvas_background = "white".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("canvas_background"));
    }

    #[test]
    fn test_colours_parse() {
        let config = EditorConfig::default();
        assert_eq!(config.border_color(), Ok(Rgba::opaque(0, 255, 0)));
        assert_eq!(config.background_color(), Ok(Rgba::WHITE));
    }
}
