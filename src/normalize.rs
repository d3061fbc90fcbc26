//! Per-image normalization before packing.

use crate::Error;
use image::{imageops::FilterType, DynamicImage, RgbaImage};
use std::path::Path;

/// Largest edge after the optional icon downsample.
pub const ICON_SIZE: u32 = 32;

/// Forces the image to RGBA and re-encodes it in place, which also drops any
/// ancillary PNG metadata. With `resize_icons`, images larger than
/// [`ICON_SIZE`] are downscaled to fit within it (Lanczos3, aspect
/// preserved); smaller images are never upscaled.
///
/// Returns the image as written to disk, so the caller records the same
/// dimensions the sheet will be built from.
pub fn optimize(
    img: &DynamicImage,
    png_path: &Path,
    resize_icons: bool,
) -> Result<RgbaImage, Error> {
    let mut rgba = img.to_rgba8();

    if resize_icons && (rgba.width() > ICON_SIZE || rgba.height() > ICON_SIZE) {
        rgba = DynamicImage::ImageRgba8(rgba)
            .resize(ICON_SIZE, ICON_SIZE, FilterType::Lanczos3)
            .to_rgba8();
    }

    rgba.save(png_path)?;
    Ok(rgba)
}
