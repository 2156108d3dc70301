//! # cusip-ocr
//!
//! A Rust library that reads CUSIP security identifiers from images by
//! reconciling the output of multiple external OCR engines against the
//! identifier's check digit.
//!
//! No single recognition engine reads a small, noisy identifier crop
//! reliably. Each identifier carries a checksum, though, which turns
//! "is this reading correct?" into a decidable question. The crate runs
//! every configured engine over an enhanced rendition of the image and
//! escalates through a deterministic correction search until a candidate
//! validates:
//!
//! 1. **Direct validation** of every engine's output, in priority order
//! 2. **Single-position correction**: substitute one commonly-confused
//!    character at a time
//! 3. **Global correction**: substitute every occurrence of a confused
//!    character at once
//!
//! A lower-priority engine's exact match always beats a corrected reading
//! from a higher-priority engine. When nothing validates, the result keeps
//! every raw reading for human inspection.
//!
//! ## Modules
//!
//! * [`core`] - Error handling, configuration, and validation utilities
//! * [`engines`] - External recognition engine adapters (GOCR, Tesseract)
//! * [`pipeline`] - Per-image scanning driver and batch statistics
//! * [`processors`] - Image enhancement ahead of recognition
//! * [`recon`] - The checksum-driven correction and reconciliation core
//! * [`utils`] - Image loading and logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cusip_ocr::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scanner = CusipScanner::new(PipelineConfig::default())?;
//! let result = scanner.scan_image(Path::new("certificate.jpg"))?;
//! if result.is_valid {
//!     println!("{} (from {})", result.code, result.source_label);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The reconciliation core is usable on its own, without images or
//! engines, for any source of candidate strings:
//!
//! ```rust
//! use cusip_ocr::recon::{ConfusionTable, SourceCandidate, reconcile};
//!
//! let table = ConfusionTable::new();
//! let sources = [
//!     SourceCandidate::new("primary", "O37833100"),
//!     SourceCandidate::new("secondary", "037833I00"),
//! ];
//! let result = reconcile(&sources, &table);
//! assert!(result.is_valid);
//! assert_eq!(result.code, "037833100");
//! ```

pub mod core;
pub mod engines;
pub mod pipeline;
pub mod processors;
pub mod recon;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use cusip_ocr::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{EngineKind, EnhanceConfig, OcrError, OcrResult, PipelineConfig};
    pub use crate::pipeline::{CusipScanner, CusipScannerBuilder, ScanStats, StatsManager};
    pub use crate::recon::{
        ConfusionTable, ReconciliationResult, SourceCandidate, is_valid_code, reconcile,
    };
    pub use crate::utils::{init_tracing, load_image};
}
