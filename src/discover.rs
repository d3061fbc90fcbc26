//! Input discovery: list the SVG files directly inside a source directory.

use crate::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the `.svg` files directly inside `dir`, non-recursive, sorted by
/// file name so the sheet layout is stable across filesystems.
///
/// An empty result is not an error; the caller decides whether to stop.
pub fn svg_files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    if !dir.exists() {
        return Err(Error::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("svg"))
        .collect();

    files.sort();
    Ok(files)
}
