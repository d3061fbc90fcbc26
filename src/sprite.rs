//! Sprite records and the JSON metadata they serialize to.

use crate::Error;
use serde::{Serialize, Serializer};
use std::fs;
use std::path::Path;

/// One packed sprite: its raster size and its slot within the sheet.
///
/// Offsets start at zero and are filled in by the layout planner once the
/// whole collection is known. Serializes to
/// `{width, height, mask, x, y}`; the name becomes the JSON key.
#[derive(Debug, Clone, Serialize)]
pub struct Sprite {
    /// Sprite name, the source file's stem.
    #[serde(skip)]
    pub name: String,
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Collision-mask marker. Always written as the literal string `"true"`;
    /// it is not derived from the alpha channel.
    #[serde(serialize_with = "mask_literal")]
    pub mask: bool,
    /// Horizontal offset within the sheet.
    pub x: u32,
    /// Vertical offset within the sheet.
    pub y: u32,
}

impl Sprite {
    /// A sprite fresh out of rasterization, before layout.
    pub fn new(name: String, width: u32, height: u32) -> Self {
        Sprite {
            name,
            width,
            height,
            mask: true,
            x: 0,
            y: 0,
        }
    }
}

fn mask_literal<S: Serializer>(mask: &bool, ser: S) -> Result<S::Ok, S::Error> {
    ser.serialize_str(if *mask { "true" } else { "false" })
}

/// Writes the metadata document: an object keyed by sprite name, entries in
/// collection order, pretty-printed with 4-space indentation.
pub fn write_metadata(sprites: &[Sprite], path: &Path) -> Result<(), Error> {
    use serde::ser::SerializeMap;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);

    let mut doc = (&mut ser).serialize_map(Some(sprites.len()))?;
    for sprite in sprites {
        doc.serialize_entry(&sprite.name, sprite)?;
    }
    doc.end()?;

    fs::write(path, buf)?;
    Ok(())
}
