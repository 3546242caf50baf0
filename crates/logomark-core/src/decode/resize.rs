//! Resizing decoded rasters.
//!
//! Uses the `image` crate's triangle (bilinear) filter. All functions return
//! new rasters without modifying the input.

use image::imageops::FilterType;

use super::{DecodeError, RasterImage};

/// Resize an image to exact dimensions with bilinear filtering.
///
/// # Errors
///
/// Returns `DecodeError::ZeroSized` for a zero target dimension and
/// `DecodeError::CorruptedFile` if the source buffer does not match its
/// dimensions.
pub fn resize(image: &RasterImage, width: u32, height: u32) -> Result<RasterImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroSized);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgba = image
        .to_rgba_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbaImage".to_string()))?;

    let resized = image::imageops::resize(&rgba, width, height, FilterType::Triangle);

    Ok(RasterImage::from_rgba_image(resized))
}
