use anyhow::Context;
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;
use svg_spritesheet::{run, Outcome, SheetConfig};

fn prompt(msg: &str) -> anyhow::Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Reading from stdin")?;
    Ok(line.trim().to_string())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let svg_dir = prompt("Enter the directory containing SVG files (ABS PATH): ")?;
    let output_name = prompt("Enter the directory name for the generated files: ")?;
    let sheet_name = prompt("Enter the filename for the generated sprite sheet (Only name): ")?;
    let metadata_name = prompt("Enter the filename for the metadata JSON file (Only name): ")?;

    let cfg = SheetConfig {
        svg_dir: PathBuf::from(svg_dir),
        output_name,
        sheet_name,
        metadata_name,
        resize_icons: false,
    };

    match run(&cfg).context("Sprite sheet generation failed")? {
        Outcome::NoInputs => {}
        Outcome::Finished(report) => {
            info!(
                "Packed {} sprites ({} skipped) into {}",
                report.packed,
                report.skipped,
                report.out_dir.display()
            );
        }
    }
    Ok(())
}
