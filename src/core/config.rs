//! Configuration management for the scanning pipeline.
//!
//! All configuration types are plain serde values so a pipeline can be
//! described in a JSON file and loaded at startup. Each type carries a
//! `validate` method that rejects out-of-range parameters before the
//! pipeline is built.

use crate::core::validation::{
    validate_finite, validate_non_empty, validate_positive, validate_range,
};
use crate::core::{OcrError, OcrResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default upscale ratio applied before thresholding.
pub const DEFAULT_SCALE_FACTOR: f32 = 3.0;

/// Default binarization cutoff (luma values above become white).
pub const DEFAULT_THRESHOLD: u8 = 170;

/// Batches larger than this are processed in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4;

fn default_scale_factor() -> f32 {
    DEFAULT_SCALE_FACTOR
}

fn default_threshold() -> u8 {
    DEFAULT_THRESHOLD
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

fn default_engines() -> Vec<EngineKind> {
    vec![EngineKind::Gocr, EngineKind::Tesseract]
}

/// Configuration for image enhancement ahead of recognition.
///
/// Identifier photographs tend to be small and noisy; recognition engines do
/// much better on an upscaled, binarized rendition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnhanceConfig {
    /// Factor applied to both image dimensions before thresholding.
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f32,
    /// Luma cutoff for binarization; pixels above become white.
    #[serde(default = "default_threshold")]
    pub threshold: u8,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl EnhanceConfig {
    /// Validates the enhancement parameters.
    pub fn validate(&self) -> OcrResult<()> {
        validate_finite(self.scale_factor, "scale_factor")?;
        validate_positive(self.scale_factor, "scale_factor")?;
        validate_range(self.scale_factor, 0.1, 16.0, "scale_factor")?;
        Ok(())
    }
}

/// The external recognition engines the pipeline knows how to drive.
///
/// Order matters wherever a list of engines appears: the first entry is the
/// authoritative source during reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// The GOCR command-line recognizer.
    Gocr,
    /// The Tesseract command-line recognizer.
    Tesseract,
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineKind::Gocr => write!(f, "gocr"),
            EngineKind::Tesseract => write!(f, "tesseract"),
        }
    }
}

/// Top-level configuration for a scanning pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Image enhancement parameters.
    #[serde(default)]
    pub enhance: EnhanceConfig,
    /// Recognition engines in priority order.
    #[serde(default = "default_engines")]
    pub engines: Vec<EngineKind>,
    /// Batches larger than this are scanned in parallel.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            enhance: EnhanceConfig::default(),
            engines: default_engines(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl PipelineConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an `OcrError::InvalidInput` naming the offending parameter.
    pub fn validate(&self) -> OcrResult<()> {
        self.enhance.validate()?;
        validate_non_empty(&self.engines, "engines")?;
        Ok(())
    }

    /// Loads and validates a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an `OcrError::InvalidInput` if the file cannot be read, or an
    /// `OcrError::ConfigError` if it does not parse or fails validation.
    pub fn from_json_file(path: &Path) -> OcrResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| OcrError::InvalidInput {
            message: format!(
                "Failed to read pipeline config from '{}': {}",
                path.display(),
                e
            ),
        })?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| OcrError::config_error(format!("invalid pipeline config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}
