//! Cutting an applied crop region out of a rendered raster.
//!
//! The region is in stage coordinates, which are the pixel coordinates of the
//! rendered stage. Edges are rounded to whole pixels and clamped to the
//! raster; the result is never smaller than 1x1.

use crate::decode::RasterImage;
use crate::geometry::Rect;

/// Copy the pixels of `region` out of `image`.
pub fn crop_raster(image: &RasterImage, region: Rect) -> RasterImage {
    if image.is_empty() {
        return image.clone();
    }

    let left = clamp_edge(region.x, image.width.saturating_sub(1));
    let top = clamp_edge(region.y, image.height.saturating_sub(1));
    let right = clamp_edge(region.right(), image.width);
    let bottom = clamp_edge(region.bottom(), image.height);

    // Fast path: full crop returns a clone
    if left == 0 && top == 0 && right == image.width && bottom == image.height {
        return image.clone();
    }

    let out_width = right.saturating_sub(left).max(1);
    let out_height = bottom.saturating_sub(top).max(1);
    let row_bytes = out_width as usize * 4;

    let mut output = Vec::with_capacity(row_bytes * out_height as usize);

    // Copy pixel data row by row
    for y in top..top + out_height {
        let start = (y as usize * image.width as usize + left as usize) * 4;
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    RasterImage::new(out_width, out_height, output)
}

fn clamp_edge(value: f64, max: u32) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, max as f64) as u32
}
