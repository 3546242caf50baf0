//! Aspect-ratio presets for the crop box.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

/// Crop box shape constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropAspect {
    /// Any shape (the default).
    #[default]
    Freeform,
    /// 1:1
    Square,
    /// 16:9
    Landscape,
    /// 4:3
    Standard,
}

impl CropAspect {
    /// Width / height ratio, or `None` for freeform.
    pub fn ratio(self) -> Option<f64> {
        match self {
            CropAspect::Freeform => None,
            CropAspect::Square => Some(1.0),
            CropAspect::Landscape => Some(16.0 / 9.0),
            CropAspect::Standard => Some(4.0 / 3.0),
        }
    }

    /// Parse the preset labels used by the toolbar ("freeform", "1:1", ...).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "freeform" => Some(CropAspect::Freeform),
            "1:1" => Some(CropAspect::Square),
            "16:9" => Some(CropAspect::Landscape),
            "4:3" => Some(CropAspect::Standard),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CropAspect::Freeform => "freeform",
            CropAspect::Square => "1:1",
            CropAspect::Landscape => "16:9",
            CropAspect::Standard => "4:3",
        }
    }

    /// Region for a drag from `anchor` to `pointer`.
    ///
    /// Freeform returns the bounding box of the two points. A fixed ratio
    /// returns the largest box of that ratio inside the bounding box, pinned
    /// to the anchor and growing toward the pointer.
    pub fn region(self, anchor: Point, pointer: Point) -> Rect {
        let Some(ratio) = self.ratio() else {
            return Rect::spanning(anchor, pointer);
        };

        let dx = (pointer.x - anchor.x).abs();
        let dy = (pointer.y - anchor.y).abs();

        let (width, height) = if dy == 0.0 || dx / dy > ratio {
            // Too wide for the ratio: height limits
            (dy * ratio, dy)
        } else {
            (dx, dx / ratio)
        };

        let sign_x = if pointer.x < anchor.x { -1.0 } else { 1.0 };
        let sign_y = if pointer.y < anchor.y { -1.0 } else { 1.0 };
        let corner = Point::new(anchor.x + sign_x * width, anchor.y + sign_y * height);

        Rect::spanning(anchor, corner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for aspect in [
            CropAspect::Freeform,
            CropAspect::Square,
            CropAspect::Landscape,
            CropAspect::Standard,
        ] {
            assert_eq!(CropAspect::from_label(aspect.label()), Some(aspect));
        }
        assert_eq!(CropAspect::from_label("3:2"), None);
    }

    #[test]
    fn test_freeform_is_bounding_box() {
        let r = CropAspect::Freeform.region(Point::new(100.0, 100.0), Point::new(40.0, 180.0));
        assert_eq!(r, Rect::new(40.0, 100.0, 60.0, 80.0));
    }

    #[test]
    fn test_square_limited_by_short_axis() {
        let r = CropAspect::Square.region(Point::new(100.0, 100.0), Point::new(40.0, 180.0));
        // dx = 60 is the short side; box grows left and down from the anchor
        assert_eq!(r, Rect::new(40.0, 100.0, 60.0, 60.0));
    }

    #[test]
    fn test_landscape_limited_by_height() {
        let r = CropAspect::Landscape.region(Point::new(0.0, 0.0), Point::new(400.0, 90.0));
        assert!((r.width - 160.0).abs() < 1e-9);
        assert!((r.height - 90.0).abs() < 1e-9);
        assert_eq!((r.x, r.y), (0.0, 0.0));
    }

    #[test]
    fn test_standard_limited_by_width() {
        let r = CropAspect::Standard.region(Point::new(200.0, 200.0), Point::new(80.0, 0.0));
        // dx = 120 -> height 90, growing up-left
        assert!((r.width - 120.0).abs() < 1e-9);
        assert!((r.height - 90.0).abs() < 1e-9);
        assert!((r.x - 80.0).abs() < 1e-9);
        assert!((r.y - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_ratio_flat_drag_is_empty() {
        let r = CropAspect::Square.region(Point::new(10.0, 10.0), Point::new(50.0, 10.0));
        assert!(r.is_empty());
    }
}
