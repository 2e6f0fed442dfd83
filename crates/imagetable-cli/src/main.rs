//! imagetable - Render images as HTML/CSS markup
//!
//! A command-line tool that converts a raster image into a self-contained
//! HTML document rebuilt from styled elements.

use clap::Parser;
use imagetable::{html_encode, EncodeOptions, FrequencySource};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imagetable")]
#[command(version)]
#[command(about = "Render images as HTML/CSS markup", long_about = None)]
struct Cli {
    /// Input image file (PNG, JPEG, GIF, WebP)
    input: PathBuf,

    /// Output HTML file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Container class name scoping the generated rules
    #[arg(short, long, default_value = "image")]
    container: String,

    /// Minimum occurrence count for a color to get a shared class
    #[arg(short, long, default_value = "2")]
    threshold: usize,

    /// Count each horizontal run once instead of every raw pixel
    #[arg(long)]
    count_runs: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let img = image::open(&cli.input)
        .map_err(|e| format!("Failed to open '{}': {}", cli.input.display(), e))?;
    let rgb_img = img.to_rgb8();
    let (width, height) = rgb_img.dimensions();
    let pixels = rgb_img.into_raw();

    eprintln!(
        "Encoding '{}' ({}x{}) with container '{}', threshold={}",
        cli.input.display(),
        width,
        height,
        cli.container,
        cli.threshold
    );

    let opts = EncodeOptions {
        container: cli.container,
        threshold: cli.threshold,
        frequency: if cli.count_runs {
            FrequencySource::Runs
        } else {
            FrequencySource::Pixels
        },
    };

    let html = html_encode(&pixels, width as usize, height as usize, &opts)?;

    match cli.output {
        Some(path) => {
            fs::write(&path, &html)?;
            eprintln!("Written {} bytes to '{}'", html.len(), path.display());
        }
        None => {
            io::stdout().write_all(html.as_bytes())?;
        }
    }

    Ok(())
}
