//! The linear run: discover, rasterize, normalize, lay out, composite, write.

use crate::{discover, layout, normalize, outdir, rasterize, sheet, sprite};
use crate::{Error, SheetConfig, Sprite};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// How a run ended.
pub enum Outcome {
    /// The source directory had no `.svg` files; nothing was written.
    NoInputs,
    /// The sheet and metadata were written.
    Finished(Report),
}

/// Where a finished run put its output, and how the batch went.
pub struct Report {
    /// The run's output directory.
    pub out_dir: PathBuf,
    /// Path of the written sprite sheet.
    pub sheet_path: PathBuf,
    /// Path of the written metadata file.
    pub metadata_path: PathBuf,
    /// Sprites packed into the sheet.
    pub packed: usize,
    /// Inputs skipped after a per-file failure.
    pub skipped: usize,
}

/// Runs the pipeline with output under the fixed [`outdir::GENERATED_DIR`]
/// root.
pub fn run(cfg: &SheetConfig) -> Result<Outcome, Error> {
    run_at(cfg, Path::new(outdir::GENERATED_DIR))
}

/// Runs the pipeline with output under `generated_root`.
///
/// Per-file failures (rasterization, decode verification, normalization) are
/// logged and skipped. A missing source directory, an all-skipped batch, or
/// any failure while compositing or writing the sheet aborts the run.
pub fn run_at(cfg: &SheetConfig, generated_root: &Path) -> Result<Outcome, Error> {
    let files = discover::svg_files(&cfg.svg_dir)?;
    if files.is_empty() {
        warn!("No SVG files found in {}", cfg.svg_dir.display());
        return Ok(Outcome::NoInputs);
    }

    let dirs = outdir::create(generated_root, &cfg.output_name)?;

    let total = files.len();
    let mut sprites: Vec<Sprite> = Vec::with_capacity(total);
    let mut images = Vec::with_capacity(total);
    let mut skipped = 0usize;

    for (i, svg_path) in files.iter().enumerate() {
        let name = match svg_path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => {
                warn!("Skipping {}: unreadable file name", svg_path.display());
                skipped += 1;
                continue;
            }
        };
        info!("[{}/{}] Converting {}", i + 1, total, svg_path.display());

        let png_path = dirs.pngs.join(format!("{}.png", name));
        if let Err(e) = rasterize::svg_to_png(svg_path, &png_path) {
            warn!("Error converting {} to PNG: {}", svg_path.display(), e);
            skipped += 1;
            continue;
        }

        let decoded = match rasterize::verify(&png_path) {
            Ok(img) => img,
            Err(e) => {
                warn!("Error verifying PNG {}: {}", png_path.display(), e);
                skipped += 1;
                continue;
            }
        };

        // A sprite whose normalized PNG failed to re-save would leave the
        // metadata pointing at a stale file, so it is dropped entirely.
        let rgba = match normalize::optimize(&decoded, &png_path, cfg.resize_icons) {
            Ok(rgba) => rgba,
            Err(e) => {
                warn!("Error optimizing PNG {}: {}", png_path.display(), e);
                skipped += 1;
                continue;
            }
        };

        sprites.push(Sprite::new(name, rgba.width(), rgba.height()));
        images.push(rgba);
    }

    let plan = layout::plan(&mut sprites)?;
    info!(
        "Packing {} sprites into a {}x{} grid ({}x{} px)",
        sprites.len(),
        plan.columns,
        plan.rows,
        plan.width(),
        plan.height()
    );

    let canvas = sheet::composite(&sprites, &images, &plan)?;

    let sheet_path = dirs.root.join(format!("{}.png", cfg.sheet_name));
    canvas.save(&sheet_path)?;
    info!("Sprite sheet saved to {}", sheet_path.display());

    let metadata_path = dirs.root.join(format!("{}.json", cfg.metadata_name));
    sprite::write_metadata(&sprites, &metadata_path)?;
    info!("Metadata saved to {}", metadata_path.display());

    Ok(Outcome::Finished(Report {
        out_dir: dirs.root,
        sheet_path,
        metadata_path,
        packed: sprites.len(),
        skipped,
    }))
}
