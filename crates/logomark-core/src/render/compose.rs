//! Rasterising the composed stage.
//!
//! Draw order matches the editor: canvas fill, background image, logo. The
//! output has the stage's pixel size and everything is drawn under the
//! zoom scale, so the export shows exactly what the stage shows.
//!
//! The logo uses inverse mapping: for each output pixel inside the logo's
//! bounds we find the bitmap coordinate it came from and sample it
//! bilinearly. Sampling happens in premultiplied alpha so transparent logo
//! edges do not bleed dark fringes.

use image::RgbaImage;

use crate::color::Rgba;
use crate::compositor::{BackgroundPlacement, LogoTransform};
use crate::decode::{resize, DecodeError, RasterImage};
use crate::geometry::{Point, StageSize};

/// Inputs for one rasterisation.
#[derive(Debug, Clone, Copy)]
pub struct Composition<'a> {
    pub stage: StageSize,
    pub zoom: f64,
    pub canvas: Rgba,
    pub background: Option<(&'a RasterImage, BackgroundPlacement)>,
    pub logo: Option<(&'a RasterImage, LogoTransform)>,
}

/// Render the composition into an RGBA raster of stage size.
///
/// Pixels the zoomed canvas fill does not reach (zoom below 1) stay
/// transparent.
///
/// # Errors
///
/// Fails only if resizing the background fails.
pub fn rasterize(composition: &Composition<'_>) -> Result<RasterImage, DecodeError> {
    let width = pixel_extent(composition.stage.width);
    let height = pixel_extent(composition.stage.height);
    let zoom = composition.zoom;

    let mut canvas = RgbaImage::new(width, height);

    fill_rect(
        &mut canvas,
        0.0,
        0.0,
        composition.stage.width * zoom,
        composition.stage.height * zoom,
        composition.canvas.to_array(),
    );

    if let Some((image, placement)) = composition.background {
        draw_background(&mut canvas, image, &placement)?;
    }

    if let Some((image, transform)) = composition.logo {
        draw_logo(&mut canvas, image, &transform, zoom);
    }

    Ok(RasterImage::from_rgba_image(canvas))
}

fn pixel_extent(value: f64) -> u32 {
    if value.is_finite() {
        value.round().max(1.0) as u32
    } else {
        1
    }
}

fn fill_rect(canvas: &mut RgbaImage, x: f64, y: f64, w: f64, h: f64, rgba: [u8; 4]) {
    let x0 = x.round().clamp(0.0, canvas.width() as f64) as u32;
    let y0 = y.round().clamp(0.0, canvas.height() as f64) as u32;
    let x1 = (x + w).round().clamp(0.0, canvas.width() as f64) as u32;
    let y1 = (y + h).round().clamp(0.0, canvas.height() as f64) as u32;

    for py in y0..y1 {
        for px in x0..x1 {
            canvas.put_pixel(px, py, image::Rgba(rgba));
        }
    }
}

fn draw_background(
    canvas: &mut RgbaImage,
    image: &RasterImage,
    placement: &BackgroundPlacement,
) -> Result<(), DecodeError> {
    let rect = placement.screen_rect();
    let target_w = rect.width.round();
    let target_h = rect.height.round();
    if image.is_empty() || target_w < 1.0 || target_h < 1.0 {
        return Ok(());
    }

    let scaled = resize(image, target_w as u32, target_h as u32)?;
    let Some(scaled) = scaled.to_rgba_image() else {
        return Err(DecodeError::CorruptedFile(
            "resized background has a mismatched buffer".to_string(),
        ));
    };

    image::imageops::overlay(
        canvas,
        &scaled,
        rect.x.round() as i64,
        rect.y.round() as i64,
    );
    Ok(())
}

fn draw_logo(canvas: &mut RgbaImage, image: &RasterImage, transform: &LogoTransform, zoom: f64) {
    if image.is_empty() || transform.opacity <= 0.0 || zoom <= 0.0 {
        return;
    }

    let bounds = transform.bounds(image.dimensions());
    let x0 = (bounds.x * zoom).floor().clamp(0.0, canvas.width() as f64) as u32;
    let y0 = (bounds.y * zoom).floor().clamp(0.0, canvas.height() as f64) as u32;
    let x1 = (bounds.right() * zoom).ceil().clamp(0.0, canvas.width() as f64) as u32;
    let y1 = (bounds.bottom() * zoom).ceil().clamp(0.0, canvas.height() as f64) as u32;

    let opacity = transform.opacity.clamp(0.0, 1.0);

    for py in y0..y1 {
        for px in x0..x1 {
            // Pixel centre, back in unzoomed stage units
            let stage_point = Point::new((px as f64 + 0.5) / zoom, (py as f64 + 0.5) / zoom);
            let Some((u, v)) = transform.to_bitmap(stage_point) else {
                return;
            };

            let src = sample_bilinear_premultiplied(image, u, v);
            if src[3] <= 0.0 {
                continue;
            }

            let dst = canvas.get_pixel_mut(px, py);
            dst.0 = blend_over(src, opacity, dst.0);
        }
    }
}

/// Premultiplied texel, transparent outside the image.
#[inline]
fn texel(image: &RasterImage, x: i64, y: i64) -> [f64; 4] {
    if x < 0 || y < 0 || x >= image.width as i64 || y >= image.height as i64 {
        return [0.0; 4];
    }
    let [r, g, b, a] = image.pixel(x as u32, y as u32);
    let alpha = a as f64 / 255.0;
    [
        r as f64 * alpha,
        g as f64 * alpha,
        b as f64 * alpha,
        a as f64,
    ]
}

/// Bilinear sample at bitmap coordinate `(u, v)` (pixel edges at integers).
fn sample_bilinear_premultiplied(image: &RasterImage, u: f64, v: f64) -> [f64; 4] {
    let x = u - 0.5;
    let y = v - 0.5;
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let p00 = texel(image, x0, y0);
    let p10 = texel(image, x0 + 1, y0);
    let p01 = texel(image, x0, y0 + 1);
    let p11 = texel(image, x0 + 1, y0 + 1);

    let mut result = [0.0; 4];
    for i in 0..4 {
        result[i] = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
    }
    result
}

/// Source-over of a premultiplied sample (scaled by `opacity`) onto a
/// straight-alpha destination pixel.
fn blend_over(src: [f64; 4], opacity: f64, dst: [u8; 4]) -> [u8; 4] {
    let src_a = src[3] / 255.0 * opacity;
    let dst_a = dst[3] as f64 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let premultiplied = src[i] * opacity + dst[i] as f64 * dst_a * (1.0 - src_a);
        out[i] = (premultiplied / out_a).clamp(0.0, 255.0).round() as u8;
    }
    out[3] = (out_a * 255.0).clamp(0.0, 255.0).round() as u8;
    out
}
