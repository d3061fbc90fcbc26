#![warn(missing_docs)]

//! Batch SVG rasterizer and sprite-sheet packer.
//!
//! Converts a directory of `.svg` files to PNG, packs them into a single
//! sheet on a uniform grid, and writes a JSON file describing each sprite's
//! size and offset within the sheet.

pub mod config;
pub mod discover;
mod error;
pub mod layout;
pub mod normalize;
pub mod outdir;
pub mod pipeline;
pub mod rasterize;
pub mod sheet;
pub mod sprite;

pub use config::SheetConfig;
pub use error::Error;
pub use layout::SheetLayout;
pub use outdir::{OutputDirs, GENERATED_DIR, PNG_SUBDIR};
pub use pipeline::{run, run_at, Outcome, Report};
pub use sprite::Sprite;
