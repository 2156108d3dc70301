//! External recognition engines.
//!
//! Engines are black boxes: each one is a command-line program that reads
//! an image file and prints whatever text it recognized. The pipeline never
//! interprets engine output beyond capturing stdout; normalization and
//! validation belong to the reconciliation core.

mod gocr;
mod tesseract;

pub use gocr::GocrEngine;
pub use tesseract::TesseractEngine;

use crate::core::{EngineKind, OcrResult};
use std::path::Path;

/// A recognition engine that produces one raw candidate per image.
pub trait RecognitionEngine: Send + Sync {
    /// The engine's name, used as the source label during reconciliation.
    fn name(&self) -> &str;

    /// Runs recognition over the image at `path` and returns raw output.
    ///
    /// The returned string is engine output as captured, without any
    /// normalization.
    ///
    /// # Errors
    ///
    /// Returns an `OcrError::Engine` if the process cannot be spawned or
    /// exits unsuccessfully.
    fn recognize(&self, path: &Path) -> OcrResult<String>;
}

/// Constructs the engine for a configured kind.
pub fn build_engine(kind: EngineKind) -> Box<dyn RecognitionEngine> {
    match kind {
        EngineKind::Gocr => Box::new(GocrEngine::new()),
        EngineKind::Tesseract => Box::new(TesseractEngine::new()),
    }
}
