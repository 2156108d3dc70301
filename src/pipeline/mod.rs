//! The per-image driver and batch orchestration.
//!
//! A [`CusipScanner`] owns the recognition engines in priority order, the
//! confusion table, and the enhancement parameters. Scanning one image
//! enhances it to a temporary PNG, collects one raw candidate per engine,
//! and hands the candidates to the reconciliation core. Batches above a
//! configurable size are scanned in parallel; images are independent, so
//! no ordering is imposed across them.

pub mod stats;

pub use stats::{ScanStats, StatsManager};

use crate::core::{OcrError, OcrResult, PipelineConfig};
use crate::engines::{RecognitionEngine, build_engine};
use crate::processors::enhance_to_temp_png;
use crate::recon::{ConfusionTable, ReconciliationResult, SourceCandidate, reconcile};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Scans images for checksummed identifiers.
pub struct CusipScanner {
    engines: Vec<Box<dyn RecognitionEngine>>,
    table: ConfusionTable,
    config: PipelineConfig,
}

impl CusipScanner {
    /// Starts building a scanner.
    pub fn builder() -> CusipScannerBuilder {
        CusipScannerBuilder::new()
    }

    /// Builds a scanner from a configuration with the built-in confusion
    /// table.
    pub fn new(config: PipelineConfig) -> OcrResult<Self> {
        Self::builder().config(config).build()
    }

    /// The active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Engine names in priority order.
    pub fn engine_names(&self) -> Vec<&str> {
        self.engines.iter().map(|e| e.name()).collect()
    }

    /// Scans a single image and reconciles the engines' candidates.
    ///
    /// A failing engine degrades to an empty candidate rather than aborting
    /// the scan, so source priority stays stable across images. The
    /// enhanced temporary file is removed when the scan completes.
    ///
    /// # Errors
    ///
    /// Returns an error only for collaborator failures ahead of
    /// recognition: an unreadable image or an unwritable temporary file.
    pub fn scan_image(&self, path: &Path) -> OcrResult<ReconciliationResult> {
        let enhanced = enhance_to_temp_png(path, &self.config.enhance)?;
        let sources: Vec<SourceCandidate> = self
            .engines
            .iter()
            .map(|engine| match engine.recognize(enhanced.path()) {
                Ok(raw) => SourceCandidate::new(engine.name(), raw),
                Err(err) => {
                    warn!(
                        engine = engine.name(),
                        error = %err,
                        "engine failed; substituting empty candidate"
                    );
                    SourceCandidate::new(engine.name(), "")
                }
            })
            .collect();
        let result = reconcile(&sources, &self.table);
        info!(
            image = %path.display(),
            code = %result.code,
            source = %result.source_label,
            valid = result.is_valid,
            "scanned image"
        );
        Ok(result)
    }

    /// Scans a batch of images, in parallel above the configured threshold.
    ///
    /// Results keep the input order. Per-image failures are returned as
    /// `Err` entries rather than aborting the batch.
    pub fn scan_batch(&self, paths: &[PathBuf]) -> Vec<(PathBuf, OcrResult<ReconciliationResult>)> {
        if paths.len() > self.config.parallel_threshold {
            paths
                .par_iter()
                .map(|path| (path.clone(), self.scan_image(path)))
                .collect()
        } else {
            paths
                .iter()
                .map(|path| (path.clone(), self.scan_image(path)))
                .collect()
        }
    }
}

/// Builder for [`CusipScanner`].
///
/// Engines are normally constructed from the configured [`EngineKind`]
/// list; custom engine implementations can be injected instead, which
/// replaces the configured list entirely.
///
/// [`EngineKind`]: crate::core::EngineKind
pub struct CusipScannerBuilder {
    config: PipelineConfig,
    table: ConfusionTable,
    custom_engines: Vec<Box<dyn RecognitionEngine>>,
}

impl CusipScannerBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
            table: ConfusionTable::new(),
            custom_engines: Vec::new(),
        }
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the confusion table.
    pub fn confusion_table(mut self, table: ConfusionTable) -> Self {
        self.table = table;
        self
    }

    /// Adds a custom engine, overriding the configured engine kinds.
    pub fn engine(mut self, engine: Box<dyn RecognitionEngine>) -> Self {
        self.custom_engines.push(engine);
        self
    }

    /// Validates the configuration and builds the scanner.
    ///
    /// # Errors
    ///
    /// Returns an error when the enhancement parameters are out of range
    /// or no engine is available.
    pub fn build(self) -> OcrResult<CusipScanner> {
        self.config.enhance.validate()?;
        let engines: Vec<Box<dyn RecognitionEngine>> = if self.custom_engines.is_empty() {
            self.config.engines.iter().map(|k| build_engine(*k)).collect()
        } else {
            self.custom_engines
        };
        if engines.is_empty() {
            return Err(OcrError::invalid_input("at least one engine is required"));
        }
        Ok(CusipScanner {
            engines,
            table: self.table,
            config: self.config,
        })
    }
}

impl Default for CusipScannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EnhanceConfig;
    use image::{DynamicImage, ImageBuffer, ImageFormat, Luma};
    use tempfile::NamedTempFile;

    struct StubEngine {
        name: &'static str,
        output: Result<&'static str, &'static str>,
    }

    impl RecognitionEngine for StubEngine {
        fn name(&self) -> &str {
            self.name
        }

        fn recognize(&self, _path: &Path) -> OcrResult<String> {
            match self.output {
                Ok(raw) => Ok(raw.to_string()),
                Err(context) => Err(OcrError::engine_failure(self.name, context)),
            }
        }
    }

    fn test_image() -> NamedTempFile {
        let file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .unwrap();
        let buf = ImageBuffer::from_fn(8, 8, |x, _| {
            if x % 2 == 0 { Luma([255u8]) } else { Luma([0u8]) }
        });
        DynamicImage::ImageLuma8(buf)
            .save_with_format(file.path(), ImageFormat::Png)
            .unwrap();
        file
    }

    fn stub_scanner(engines: Vec<StubEngine>) -> CusipScanner {
        let mut builder = CusipScanner::builder();
        for engine in engines {
            builder = builder.engine(Box::new(engine));
        }
        builder.build().unwrap()
    }

    #[test]
    fn default_build_uses_configured_kinds() {
        let scanner = CusipScanner::new(PipelineConfig::default()).unwrap();
        assert_eq!(scanner.engine_names(), vec!["gocr", "tesseract"]);
    }

    #[test]
    fn build_rejects_bad_enhance_config() {
        let config = PipelineConfig {
            enhance: EnhanceConfig {
                scale_factor: f32::NAN,
                threshold: 170,
            },
            ..PipelineConfig::default()
        };
        assert!(CusipScanner::new(config).is_err());
    }

    #[test]
    fn build_rejects_empty_engine_list() {
        let config = PipelineConfig {
            engines: vec![],
            ..PipelineConfig::default()
        };
        assert!(CusipScanner::new(config).is_err());
    }

    #[test]
    fn scan_image_reconciles_engine_output() {
        let image = test_image();
        let scanner = stub_scanner(vec![StubEngine {
            name: "stub",
            output: Ok("O37833100"),
        }]);
        let result = scanner.scan_image(image.path()).unwrap();
        assert_eq!(result.code, "037833100");
        assert_eq!(result.source_label, "stub+corrected(single)");
        assert!(result.is_valid);
    }

    #[test]
    fn failing_engine_degrades_to_empty_candidate() {
        let image = test_image();
        let scanner = stub_scanner(vec![
            StubEngine {
                name: "first",
                output: Err("broken"),
            },
            StubEngine {
                name: "second",
                output: Ok("037833100"),
            },
        ]);
        let result = scanner.scan_image(image.path()).unwrap();
        assert_eq!(result.source_label, "second");
        assert!(result.is_valid);
    }

    #[test]
    fn all_engines_failing_still_yields_a_result() {
        let image = test_image();
        let scanner = stub_scanner(vec![
            StubEngine {
                name: "first",
                output: Err("broken"),
            },
            StubEngine {
                name: "second",
                output: Err("also broken"),
            },
        ]);
        let result = scanner.scan_image(image.path()).unwrap();
        assert!(!result.is_valid);
        assert_eq!(result.code, " | ");
        assert_eq!(result.source_label, "first | second");
    }

    #[test]
    fn scan_image_unreadable_source_is_an_error() {
        let scanner = stub_scanner(vec![StubEngine {
            name: "stub",
            output: Ok("037833100"),
        }]);
        assert!(scanner.scan_image(Path::new("/nonexistent/id.png")).is_err());
    }

    #[test]
    fn scan_batch_preserves_input_order() {
        let image = test_image();
        let config = PipelineConfig {
            parallel_threshold: 2,
            ..PipelineConfig::default()
        };
        let scanner = CusipScanner::builder()
            .config(config)
            .engine(Box::new(StubEngine {
                name: "stub",
                output: Ok("037833100"),
            }))
            .build()
            .unwrap();

        let paths: Vec<PathBuf> = (0..6).map(|_| image.path().to_path_buf()).collect();
        let results = scanner.scan_batch(&paths);
        assert_eq!(results.len(), 6);
        for (i, (path, result)) in results.iter().enumerate() {
            assert_eq!(path, &paths[i]);
            assert_eq!(result.as_ref().unwrap().code, "037833100");
        }
    }
}
