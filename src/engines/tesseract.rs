//! Tesseract engine adapter.

use super::RecognitionEngine;
use crate::core::{OcrError, OcrResult};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Page segmentation mode for a single word, which is what an identifier
/// crop amounts to.
const SINGLE_WORD_PSM: u8 = 8;

/// Drives the `tesseract` command-line recognizer.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    program: PathBuf,
    psm: u8,
}

impl TesseractEngine {
    /// Creates an engine that resolves `tesseract` from the search path.
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("tesseract"),
            psm: SINGLE_WORD_PSM,
        }
    }

    /// Overrides the executable location, for installs outside the path.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            psm: SINGLE_WORD_PSM,
        }
    }

    /// Overrides the page segmentation mode.
    pub fn psm(mut self, psm: u8) -> Self {
        self.psm = psm;
        self
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecognitionEngine for TesseractEngine {
    fn name(&self) -> &str {
        "tesseract"
    }

    fn recognize(&self, path: &Path) -> OcrResult<String> {
        debug!(image = %path.display(), psm = self.psm, "invoking tesseract");
        let output = Command::new(&self.program)
            .arg(path)
            .arg("stdout")
            .arg("--psm")
            .arg(self.psm.to_string())
            .output()
            .map_err(|e| OcrError::engine_spawn("tesseract", e))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::engine_failure(
                "tesseract",
                format!("exited with {}: {}", output.status, stderr.trim()),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_failure_maps_to_engine_error() {
        let engine = TesseractEngine::with_program("definitely-not-a-real-recognizer");
        let err = engine.recognize(Path::new("image.png")).unwrap_err();
        assert!(matches!(err, OcrError::Engine { .. }));
        assert!(err.to_string().contains("tesseract"));
    }

    #[test]
    fn passes_single_word_segmentation() {
        // `echo` stands in for the recognizer and prints the arguments back.
        let engine = TesseractEngine::with_program("echo");
        let raw = engine.recognize(Path::new("image.png")).unwrap();
        assert!(raw.contains("image.png"));
        assert!(raw.contains("--psm 8"));
    }

    #[test]
    fn psm_override() {
        let engine = TesseractEngine::with_program("echo").psm(7);
        let raw = engine.recognize(Path::new("image.png")).unwrap();
        assert!(raw.contains("--psm 7"));
    }
}
