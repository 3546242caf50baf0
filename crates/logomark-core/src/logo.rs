//! Logo overlay settings.
//!
//! [`LogoConfig`] is a value type: each slider produces a complete new config
//! through one of the `with_*` methods, each clamping only its own field.

use serde::{Deserialize, Serialize};

pub const MIN_SCALE: f64 = 0.1;
pub const MAX_SCALE: f64 = 2.0;

/// Scale, rotation and opacity of the logo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoConfig {
    /// Uniform scale (0.1 to 2.0)
    pub scale: f64,
    /// Clockwise rotation in degrees (0 to <360)
    pub rotation: f64,
    /// Opacity (0.0 to 1.0)
    pub opacity: f64,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation: 0.0,
            opacity: 1.0,
        }
    }
}

impl LogoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(self, scale: f64) -> Self {
        if scale.is_nan() {
            return self;
        }
        Self {
            scale: scale.clamp(MIN_SCALE, MAX_SCALE),
            ..self
        }
    }

    /// Wrap `rotation` into `[0, 360)`. Negative angles wrap from the top.
    pub fn with_rotation(self, rotation: f64) -> Self {
        if !rotation.is_finite() {
            return self;
        }
        let mut wrapped = rotation.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if wrapped >= 360.0 {
            wrapped = 0.0;
        }
        Self {
            rotation: wrapped,
            ..self
        }
    }

    pub fn with_opacity(self, opacity: f64) -> Self {
        if opacity.is_nan() {
            return self;
        }
        Self {
            opacity: opacity.clamp(0.0, 1.0),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogoConfig::new();
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.rotation, 0.0);
        assert_eq!(config.opacity, 1.0);
    }

    #[test]
    fn test_opacity_clamps() {
        assert_eq!(LogoConfig::new().with_opacity(1.5).opacity, 1.0);
        assert_eq!(LogoConfig::new().with_opacity(-0.2).opacity, 0.0);
    }

    #[test]
    fn test_scale_clamps() {
        assert_eq!(LogoConfig::new().with_scale(5.0).scale, MAX_SCALE);
        assert_eq!(LogoConfig::new().with_scale(0.0).scale, MIN_SCALE);
        assert_eq!(LogoConfig::new().with_scale(1.3).scale, 1.3);
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(LogoConfig::new().with_rotation(360.0).rotation, 0.0);
        assert_eq!(LogoConfig::new().with_rotation(450.0).rotation, 90.0);
        assert_eq!(LogoConfig::new().with_rotation(-90.0).rotation, 270.0);
    }

    #[test]
    fn test_updates_touch_only_their_field() {
        let config = LogoConfig::new()
            .with_scale(1.5)
            .with_rotation(45.0)
            .with_opacity(0.25);
        assert_eq!(config.with_opacity(2.0).scale, 1.5);
        assert_eq!(config.with_scale(0.5).rotation, 45.0);
        assert_eq!(config.with_rotation(10.0).opacity, 0.25);
    }

    #[test]
    fn test_nan_inputs_are_ignored() {
        let config = LogoConfig::new();
        assert_eq!(config.with_scale(f64::NAN), config);
        assert_eq!(config.with_rotation(f64::INFINITY), config);
        assert_eq!(config.with_opacity(f64::NAN), config);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_rotation_in_range(angle in -1.0e6f64..1.0e6) {
            let rotation = LogoConfig::new().with_rotation(angle).rotation;
            prop_assert!((0.0..360.0).contains(&rotation));
        }

        #[test]
        fn prop_scale_and_opacity_in_range(scale in -10.0f64..10.0, opacity in -10.0f64..10.0) {
            let config = LogoConfig::new().with_scale(scale).with_opacity(opacity);
            prop_assert!((MIN_SCALE..=MAX_SCALE).contains(&config.scale));
            prop_assert!((0.0..=1.0).contains(&config.opacity));
        }
    }
}
