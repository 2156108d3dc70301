//! GOCR engine adapter.

use super::RecognitionEngine;
use crate::core::{OcrError, OcrResult};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Drives the `gocr` command-line recognizer.
#[derive(Debug, Clone)]
pub struct GocrEngine {
    program: PathBuf,
}

impl GocrEngine {
    /// Creates an engine that resolves `gocr` from the search path.
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("gocr"),
        }
    }

    /// Overrides the executable location, for installs outside the path.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GocrEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecognitionEngine for GocrEngine {
    fn name(&self) -> &str {
        "gocr"
    }

    fn recognize(&self, path: &Path) -> OcrResult<String> {
        debug!(image = %path.display(), "invoking gocr");
        let output = Command::new(&self.program)
            .arg(path)
            .output()
            .map_err(|e| OcrError::engine_spawn("gocr", e))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::engine_failure(
                "gocr",
                format!("exited with {}: {}", output.status, stderr.trim()),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
