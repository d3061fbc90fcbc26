//! Sheet compositing.

use crate::{Error, SheetLayout, Sprite};
use image::{imageops, RgbaImage};

/// Paints each sprite onto a transparent canvas at its planned offset.
///
/// `sprites` and `images` run in lockstep; pixels are copied straight (no
/// alpha blending), so each sprite lands in its cell exactly as rasterized.
pub fn composite(
    sprites: &[Sprite],
    images: &[RgbaImage],
    layout: &SheetLayout,
) -> Result<RgbaImage, Error> {
    if layout.width() == 0 || layout.height() == 0 {
        return Err(Error::Canvas(format!(
            "{}x{} sheet",
            layout.width(),
            layout.height()
        )));
    }

    let mut canvas = RgbaImage::new(layout.width(), layout.height());
    for (sprite, img) in sprites.iter().zip(images) {
        imageops::replace(&mut canvas, img, i64::from(sprite.x), i64::from(sprite.y));
    }
    Ok(canvas)
}
