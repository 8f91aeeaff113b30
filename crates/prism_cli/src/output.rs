//! Image file output.
//!
//! Rendered colors are linear and unbounded; they are clamped to [0, 1] and
//! scaled to 8 bits without gamma correction. The file format follows the
//! output path's extension.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use image::RgbImage;
use log::info;
use prism_renderer::ImageBuffer;

/// Save a rendered image, choosing the format from the file extension.
pub fn save_image(image: &ImageBuffer, output_path: &Path) -> Result<()> {
    let rgb = RgbImage::from_raw(image.width, image.height, image.to_rgb8())
        .ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", image.width, image.height))?;

    rgb.save(output_path)
        .with_context(|| format!("Failed to save image to {}", output_path.display()))?;

    info!("Image saved as {}", output_path.display());
    Ok(())
}
