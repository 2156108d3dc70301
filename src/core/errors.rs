//! Error types for the scanning pipeline.
//!
//! This module defines the error types that can occur while reading a
//! security identifier from an image, including image loading errors,
//! enhancement errors, external engine invocation errors, and configuration
//! errors. It also provides utility functions for creating these errors
//! with appropriate context.

use thiserror::Error;

/// Convenient result alias used throughout the crate.
pub type OcrResult<T> = Result<T, OcrError>;

/// Enum representing different stages of processing in the scanning pipeline.
///
/// This enum is used to identify which stage of the pipeline an error occurred in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProcessingStage {
    /// Error occurred during image enhancement.
    Enhancement,
    /// Generic processing error.
    Generic,
}

impl std::fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingStage::Enhancement => write!(f, "enhancement"),
            ProcessingStage::Generic => write!(f, "processing"),
        }
    }
}

/// Enum representing the errors that can occur in the scanning pipeline.
///
/// Malformed candidate text is never an error: it flows through validation
/// and correction as an ordinary invalid candidate. The variants here cover
/// the collaborator boundary only (filesystem, image decoding, external
/// engine processes, configuration).
#[derive(Error, Debug)]
pub enum OcrError {
    /// Error occurred while loading an image.
    #[error("image load")]
    ImageLoad(#[source] image::ImageError),

    /// Error occurred during processing.
    #[error("{kind} failed: {context}")]
    Processing {
        /// The stage of the pipeline where the error occurred.
        kind: ProcessingStage,
        /// Additional context about the error.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An external recognition engine could not be invoked or reported failure.
    #[error("engine '{engine}' failed: {context}")]
    Engine {
        /// Name of the engine that failed.
        engine: String,
        /// Additional context about the failure.
        context: String,
        /// The underlying IO error, if the failure came from process invocation.
        #[source]
        source: Option<std::io::Error>,
    },

    /// Error indicating invalid input.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

/// Implementation of OcrError with utility functions for creating errors.
impl OcrError {
    /// Creates an OcrError for image enhancement operations.
    ///
    /// # Arguments
    ///
    /// * `context` - Additional context about the error.
    /// * `error` - The underlying error that caused this error.
    pub fn enhancement(
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::processing_error(ProcessingStage::Enhancement, context, error)
    }

    /// Creates an OcrError for processing operations.
    ///
    /// # Arguments
    ///
    /// * `kind` - The stage of the pipeline where the error occurred.
    /// * `context` - Additional context about the error.
    /// * `error` - The underlying error that caused this error.
    pub fn processing_error(
        kind: ProcessingStage,
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Processing {
            kind,
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates an OcrError for a recognition engine that could not be spawned.
    ///
    /// # Arguments
    ///
    /// * `engine` - The name of the engine.
    /// * `error` - The IO error returned by process invocation.
    pub fn engine_spawn(engine: &str, error: std::io::Error) -> Self {
        Self::Engine {
            engine: engine.to_string(),
            context: "failed to spawn process".to_string(),
            source: Some(error),
        }
    }

    /// Creates an OcrError for a recognition engine that ran but failed.
    ///
    /// # Arguments
    ///
    /// * `engine` - The name of the engine.
    /// * `context` - Additional context (exit status, stderr excerpt).
    pub fn engine_failure(engine: &str, context: impl Into<String>) -> Self {
        Self::Engine {
            engine: engine.to_string(),
            context: context.into(),
            source: None,
        }
    }

    /// Creates an OcrError for invalid input.
    ///
    /// # Arguments
    ///
    /// * `message` - A message describing the invalid input.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an OcrError for configuration errors.
    ///
    /// # Arguments
    ///
    /// * `message` - A message describing the configuration error.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Creates an OcrError for configuration errors with field context.
    ///
    /// # Arguments
    ///
    /// * `field` - The field where the error occurred.
    /// * `value` - The value of the field.
    /// * `reason` - The reason for the error.
    pub fn config_error_with_context(field: &str, value: &str, reason: &str) -> Self {
        Self::ConfigError {
            message: format!(
                "Configuration error in field '{}' with value '{}': {}",
                field, value, reason
            ),
        }
    }
}

impl From<image::ImageError> for OcrError {
    fn from(error: image::ImageError) -> Self {
        Self::ImageLoad(error)
    }
}
