//! Collision-free output directory naming.

use crate::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Root directory for all generated output.
pub const GENERATED_DIR: &str = "generated";
/// Subdirectory holding the per-sprite PNGs inside an output directory.
pub const PNG_SUBDIR: &str = "pngs";

/// Output locations for one run.
pub struct OutputDirs {
    /// The run's output directory, `<base>/<name>` or `<base>/<name>_N`.
    pub root: PathBuf,
    /// Working directory for rasterized PNGs, `root/pngs`.
    pub pngs: PathBuf,
}

/// Creates `<base>/<name>`, probing `<name>_1`, `<name>_2`, ... when the
/// desired name is already taken. Prior runs are never overwritten.
pub fn create(base: &Path, name: &str) -> Result<OutputDirs, Error> {
    fs::create_dir_all(base)?;

    let mut root = base.join(name);
    if root.exists() {
        let mut counter = 1u32;
        loop {
            let probe = base.join(format!("{}_{}", name, counter));
            if !probe.exists() {
                root = probe;
                break;
            }
            counter += 1;
        }
    }
    fs::create_dir(&root)?;

    let pngs = root.join(PNG_SUBDIR);
    fs::create_dir_all(&pngs)?;

    Ok(OutputDirs { root, pngs })
}
