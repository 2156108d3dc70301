//! Image enhancement for small, noisy identifier photographs.
//!
//! Recognition engines perform poorly on the source material as captured:
//! the identifier region is typically only a few dozen pixels tall with
//! uneven lighting. Upscaling and binarizing the image first makes the
//! glyph shapes unambiguous enough for the engines to have a chance.

use crate::core::{EnhanceConfig, OcrError, OcrResult};
use crate::utils::load_image;
use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, ImageFormat};
use imageproc::contrast::threshold;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Enhances an image for recognition: grayscale, upscale, binarize.
///
/// Both dimensions are scaled by `config.scale_factor` with Lanczos
/// resampling, then every pixel above `config.threshold` becomes white and
/// the rest black.
pub fn enhance_image(img: &DynamicImage, config: &EnhanceConfig) -> GrayImage {
    let gray = img.to_luma8();
    let (width, height) = gray.dimensions();
    let new_width = ((width as f32) * config.scale_factor).round().max(1.0) as u32;
    let new_height = ((height as f32) * config.scale_factor).round().max(1.0) as u32;
    let resized = image::imageops::resize(&gray, new_width, new_height, FilterType::Lanczos3);
    debug!(
        width,
        height, new_width, new_height, "enhanced image for recognition"
    );
    threshold(&resized, config.threshold)
}

/// Loads, enhances, and writes an image to a temporary PNG.
///
/// The returned handle owns the file: recognition engines read it by path,
/// and dropping the handle removes it.
///
/// # Errors
///
/// Returns an `OcrError::ImageLoad` if the source image cannot be decoded,
/// or an enhancement-stage error if the temporary PNG cannot be written.
pub fn enhance_to_temp_png(path: &Path, config: &EnhanceConfig) -> OcrResult<NamedTempFile> {
    let img = load_image(path)?;
    let enhanced = enhance_image(&img, config);
    let file = tempfile::Builder::new()
        .prefix("cusip-ocr-")
        .suffix(".png")
        .tempfile()?;
    enhanced
        .save_with_format(file.path(), ImageFormat::Png)
        .map_err(|e| OcrError::enhancement("write enhanced image", e))?;
    Ok(file)
}
