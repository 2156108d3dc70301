//! Utility functions shared across the pipeline.
//!
//! This module provides image loading and logging setup.

use crate::core::OcrError;
use image::DynamicImage;
use std::path::Path;

/// Loads an image from a file path.
///
/// Any format supported by the image crate is accepted.
///
/// # Errors
///
/// Returns an `OcrError::ImageLoad` error if the image cannot be decoded
/// from the specified path.
pub fn load_image(path: &Path) -> Result<DynamicImage, OcrError> {
    image::open(path).map_err(OcrError::ImageLoad)
}

/// Initializes the tracing subscriber for logging.
///
/// This function sets up the tracing subscriber with environment filter and
/// formatting layer. It's typically called at the start of an application to
/// enable logging.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_image_missing_path() {
        let result = load_image(Path::new("/nonexistent/identifier.png"));
        assert!(matches!(result, Err(OcrError::ImageLoad(_))));
    }
}
