//! Grid layout planning for the sprite sheet.

use crate::{Error, Sprite};

/// Computed grid for one sheet. Every sprite gets a uniform cell sized to
/// the largest sprite in the collection, so cells never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    /// Number of grid columns, `floor(sqrt(count))`.
    pub columns: u32,
    /// Number of grid rows, `ceil(count / columns)`.
    pub rows: u32,
    /// Cell width, the max sprite width.
    pub cell_width: u32,
    /// Cell height, the max sprite height.
    pub cell_height: u32,
}

impl SheetLayout {
    /// Sheet width in pixels.
    pub fn width(&self) -> u32 {
        self.columns * self.cell_width
    }

    /// Sheet height in pixels.
    pub fn height(&self) -> u32 {
        self.rows * self.cell_height
    }
}

/// Computes the grid and writes each sprite's `(x, y)` offset back into the
/// collection, in collection order.
///
/// Errors with [`Error::NoSprites`] on an empty collection.
pub fn plan(sprites: &mut [Sprite]) -> Result<SheetLayout, Error> {
    if sprites.is_empty() {
        return Err(Error::NoSprites);
    }

    let cell_width = sprites.iter().map(|s| s.width).max().unwrap_or(0);
    let cell_height = sprites.iter().map(|s| s.height).max().unwrap_or(0);

    let count = sprites.len() as u32;
    let columns = (count as f64).sqrt() as u32;
    let rows = count.div_ceil(columns);

    for (i, sprite) in sprites.iter_mut().enumerate() {
        let i = i as u32;
        sprite.x = (i % columns) * cell_width;
        sprite.y = (i / columns) * cell_height;
    }

    Ok(SheetLayout {
        columns,
        rows,
        cell_width,
        cell_height,
    })
}
