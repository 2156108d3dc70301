//! CUSIP identifier scanner.
//!
//! Reads 9-character CUSIP identifiers from images by running external OCR
//! engines over an enhanced rendition of each image and reconciling their
//! output against the identifier check digit.
//!
//! # Usage
//!
//! ```bash
//! cusip-ocr [OPTIONS] <IMAGES>...
//! ```
//!
//! # Arguments
//!
//! * `<IMAGES>...` - Paths to input images to process
//! * `--scale-factor` - Upscale ratio applied before thresholding
//! * `--threshold` - Binarization cutoff (0-255)
//! * `--engine` - Recognition engine, repeatable; order sets priority
//! * `--config` - JSON pipeline configuration file
//! * `--sequential` - Disable parallel batch processing
//!
//! # Example
//!
//! ```bash
//! cusip-ocr --engine gocr --engine tesseract certificates/*.png
//! ```

use clap::{Parser, ValueEnum};
use cusip_ocr::core::{EngineKind, PipelineConfig};
use cusip_ocr::pipeline::{CusipScanner, StatsManager};
use cusip_ocr::utils::init_tracing;
use std::path::{Path, PathBuf};
use tracing::error;

/// Command-line arguments for the scanner.
#[derive(Parser)]
#[command(name = "cusip-ocr")]
#[command(about = "Read CUSIP identifiers from images with checksum-driven reconciliation")]
struct Args {
    /// Paths to input images to process
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Upscale ratio applied before thresholding
    #[arg(long)]
    scale_factor: Option<f32>,

    /// Binarization cutoff (0-255)
    #[arg(long)]
    threshold: Option<u8>,

    /// Recognition engine, repeatable; order sets priority
    #[arg(long = "engine", value_enum)]
    engines: Vec<EngineArg>,

    /// JSON pipeline configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable parallel batch processing
    #[arg(long)]
    sequential: bool,
}

/// Engines selectable from the command line.
#[derive(Clone, Copy, ValueEnum)]
enum EngineArg {
    Gocr,
    Tesseract,
}

impl From<EngineArg> for EngineKind {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Gocr => EngineKind::Gocr,
            EngineArg::Tesseract => EngineKind::Tesseract,
        }
    }
}

/// Merges the configuration file with explicit command-line overrides.
fn resolve_config(args: &Args) -> Result<PipelineConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(scale_factor) = args.scale_factor {
        config.enhance.scale_factor = scale_factor;
    }
    if let Some(threshold) = args.threshold {
        config.enhance.threshold = threshold;
    }
    if !args.engines.is_empty() {
        config.engines = args.engines.iter().map(|&e| e.into()).collect();
    }
    if args.sequential {
        config.parallel_threshold = usize::MAX;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args = Args::parse();
    let config = resolve_config(&args)?;

    // Filter out non-existent image files and log errors for missing files.
    let existing_images: Vec<PathBuf> = args
        .images
        .iter()
        .filter(|path| {
            let exists = Path::new(path).exists();
            if !exists {
                error!("Image file not found: {}", path.display());
            }
            exists
        })
        .cloned()
        .collect();

    if existing_images.is_empty() {
        error!("No valid image files found");
        return Err("No valid image files found".into());
    }

    let scanner = CusipScanner::new(config)?;
    let stats = StatsManager::new();

    for (path, outcome) in scanner.scan_batch(&existing_images) {
        match outcome {
            Ok(result) => {
                let status = if result.is_valid { "Valid" } else { "Invalid!" };
                println!(
                    "File: {} - CUSIP: {} - Status: {} - OCR: {}",
                    path.display(),
                    result.code,
                    status,
                    result.source_label
                );
                stats.record(result.is_valid);
            }
            Err(err) => {
                error!("Failed to scan {}: {}", path.display(), err);
                stats.record(false);
            }
        }
    }

    println!("{}", stats.get_stats());
    Ok(())
}
