//! Viewport state: zoom level and stage size.

use serde::Serialize;

use crate::config::EditorConfig;
use crate::geometry::{Size, StageSize};

/// Uniform stage zoom, always within the configured `[min, max]` range.
///
/// Values are immutable; every action returns a new level. Only
/// [`ZoomLevel::new`] builds one, so the bounds always come from a validated
/// config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoomLevel {
    value: f64,
    min: f64,
    max: f64,
    step: f64,
}

impl ZoomLevel {
    /// A 1.0 zoom using the bounds and step from `config`.
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            value: 1.0,
            min: config.min_zoom,
            max: config.max_zoom,
            step: config.zoom_step,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn zoom_in(self) -> Self {
        self.with_value(self.value * self.step)
    }

    pub fn zoom_out(self) -> Self {
        self.with_value(self.value / self.step)
    }

    pub fn reset(self) -> Self {
        self.with_value(1.0)
    }

    /// Set an explicit zoom, clamped to the bounds. NaN is ignored.
    pub fn with_value(self, value: f64) -> Self {
        if value.is_nan() {
            return self;
        }
        Self {
            value: value.clamp(self.min, self.max),
            ..self
        }
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

/// Tracks the stage size from container measurements.
///
/// Measurements are floored at `min_extent` per axis and only replace the
/// current size when one axis moved by more than `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageTracker {
    size: StageSize,
    min_extent: f64,
    threshold: f64,
}

impl StageTracker {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            size: config.initial_stage,
            min_extent: config.min_stage_extent,
            threshold: config.resize_threshold,
        }
    }

    pub fn size(&self) -> StageSize {
        self.size
    }

    /// Feed a new container measurement. Returns true if the stage changed.
    /// Non-finite measurements are ignored.
    pub fn observe(&mut self, measured: Size) -> bool {
        if !(measured.width.is_finite() && measured.height.is_finite()) {
            return false;
        }
        let next = Size::new(
            measured.width.max(self.min_extent),
            measured.height.max(self.min_extent),
        );

        let changed = (self.size.width - next.width).abs() > self.threshold
            || (self.size.height - next.height).abs() > self.threshold;
        if changed {
            tracing::debug!(
                width = next.width,
                height = next.height,
                "stage resized"
            );
            self.size = next;
        }
        changed
    }
}

impl Default for StageTracker {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy)]
    enum Action {
        In,
        Out,
        Reset,
    }

    fn action_strategy() -> impl Strategy<Value = Action> {
        prop_oneof![Just(Action::In), Just(Action::Out), Just(Action::Reset)]
    }

    proptest! {
        /// Property: no sequence of actions leaves the zoom range.
        #[test]
        fn prop_zoom_always_in_range(actions in proptest::collection::vec(action_strategy(), 0..100)) {
            let mut zoom = ZoomLevel::default();
            for action in actions {
                zoom = match action {
                    Action::In => zoom.zoom_in(),
                    Action::Out => zoom.zoom_out(),
                    Action::Reset => zoom.reset(),
                };
                prop_assert!((0.5..=3.0).contains(&zoom.value()));
            }
        }

        /// Property: sub-threshold jitter never changes the stage.
        #[test]
        fn prop_stage_jitter_ignored(dw in -5.0f64..=5.0, dh in -5.0f64..=5.0) {
            let mut tracker = StageTracker::default();
            prop_assert!(!tracker.observe(Size::new(800.0 + dw, 600.0 + dh)));
            prop_assert_eq!(tracker.size(), Size::new(800.0, 600.0));
        }
    }
}
