//! SVG → PNG rasterization and post-write verification.

use crate::Error;
use image::{DynamicImage, Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};
use std::fs;
use std::path::Path;

/// Rasterizes `svg_path` at its intrinsic size and writes the result as a
/// PNG to `png_path`.
pub fn svg_to_png(svg_path: &Path, png_path: &Path) -> Result<(), Error> {
    let data = fs::read(svg_path)?;
    let tree = usvg::Tree::from_data(&data, &usvg::Options::default())?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| Error::Canvas(svg_path.display().to_string()))?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    // tiny-skia pixels are premultiplied; undo that before encoding.
    let mut img = RgbaImage::new(size.width(), size.height());
    for (px, out) in pixmap.pixels().iter().zip(img.pixels_mut()) {
        let c = px.demultiply();
        *out = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    img.save(png_path)?;
    Ok(())
}

/// Re-opens the written PNG to prove the conversion produced a decodable
/// image. Guards against silent corruption from the rasterization step.
pub fn verify(png_path: &Path) -> Result<DynamicImage, Error> {
    Ok(image::open(png_path)?)
}
