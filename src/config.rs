//! Run parameters.

use std::path::PathBuf;

/// Parameters for one sprite-sheet run.
pub struct SheetConfig {
    /// Directory holding the source `.svg` files.
    pub svg_dir: PathBuf,
    /// Base name of the output directory under `generated/`.
    pub output_name: String,
    /// Sheet file name without extension; `.png` is appended.
    pub sheet_name: String,
    /// Metadata file name without extension; `.json` is appended.
    pub metadata_name: String,
    /// Downsample sprites to icon size. Off by default.
    pub resize_icons: bool,
}
