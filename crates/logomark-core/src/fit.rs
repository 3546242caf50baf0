//! Fitting a background image into the stage.
//!
//! The fit is applied axis by axis: first the width constraint, then the
//! height constraint against the already-scaled height. When both bind, the
//! result can come out smaller than a simultaneous min-ratio fit would give.
//! That two-step order is deliberate and must be preserved.

use crate::geometry::{ImageDimensions, Size, StageSize};

/// Default share of the stage the background may occupy on each axis.
pub const FIT_RATIO: f64 = 0.95;

/// Scale `image` down (never up) to fit 95% of `stage`.
///
/// # Example
///
/// ```ignore
/// let fitted = fit(Size::new(1000.0, 500.0), Size::new(800.0, 600.0));
/// assert_eq!(fitted, Size::new(760.0, 380.0));
/// ```
pub fn fit(image: ImageDimensions, stage: StageSize) -> Size {
    fit_with_ratio(image, stage, FIT_RATIO)
}

/// Scale `image` down to fit `ratio * stage`.
///
/// An image with a zero axis (nothing decoded yet) yields the stage size
/// unchanged, which keeps the later divisions safe.
pub fn fit_with_ratio(image: ImageDimensions, stage: StageSize, ratio: f64) -> Size {
    if image.width == 0.0 || image.height == 0.0 {
        return stage;
    }

    let max_width = stage.width * ratio;
    let max_height = stage.height * ratio;

    let mut width = image.width;
    let mut height = image.height;

    if width > max_width {
        height *= max_width / width;
        width = max_width;
    }

    if height > max_height {
        width *= max_height / height;
        height = max_height;
    }

    Size::new(width, height)
}

/// Size reported to the user for the natural image at `zoom`, in whole pixels.
pub fn displayed_dimensions(natural: ImageDimensions, zoom: f64) -> (u32, u32) {
    (
        (natural.width * zoom).round().max(0.0) as u32,
        (natural.height * zoom).round().max(0.0) as u32,
    )
}

/// Zoom as a whole percentage (1.2 -> 120).
pub fn zoom_percent(zoom: f64) -> u32 {
    (zoom * 100.0).round().max(0.0) as u32
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the fitted size never exceeds 95% of the stage.
        #[test]
        fn prop_fit_within_bounds(
            w in 1.0f64..20000.0, h in 1.0f64..20000.0,
            sw in 1.0f64..5000.0, sh in 1.0f64..5000.0,
        ) {
            let fitted = fit(Size::new(w, h), Size::new(sw, sh));
            prop_assert!(fitted.width <= sw * FIT_RATIO + 1e-6);
            prop_assert!(fitted.height <= sh * FIT_RATIO + 1e-6);
        }

        /// Property: fitting never enlarges the image.
        #[test]
        fn prop_fit_never_upscales(
            w in 1.0f64..20000.0, h in 1.0f64..20000.0,
            sw in 1.0f64..5000.0, sh in 1.0f64..5000.0,
        ) {
            let fitted = fit(Size::new(w, h), Size::new(sw, sh));
            prop_assert!(fitted.width <= w + 1e-9);
            prop_assert!(fitted.height <= h + 1e-9);
        }

        /// Property: aspect ratio is preserved.
        #[test]
        fn prop_fit_preserves_aspect(
            w in 1.0f64..20000.0, h in 1.0f64..20000.0,
            sw in 50.0f64..5000.0, sh in 50.0f64..5000.0,
        ) {
            let fitted = fit(Size::new(w, h), Size::new(sw, sh));
            let before = w / h;
            let after = fitted.width / fitted.height;
            prop_assert!((before - after).abs() / before < 1e-9);
        }
    }
}
