//! Batch-wide statistics helpers.
//!
//! This module defines the `ScanStats` structure used to track outcomes
//! across a batch of scanned images and the `StatsManager` helper that
//! coordinates thread-safe updates to these metrics.

use std::fmt;
use std::sync::Mutex;

/// Statistics for a batch of scanned images.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// The total number of images processed.
    pub total_processed: usize,
    /// The number of images that produced a valid code.
    pub valid_codes: usize,
    /// The number of images left without a valid code.
    pub invalid_codes: usize,
}

impl ScanStats {
    /// Creates a new ScanStats instance with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the success rate as a percentage (0.0 to 100.0).
    pub fn success_rate(&self) -> f64 {
        if self.total_processed == 0 {
            0.0
        } else {
            (self.valid_codes as f64 / self.total_processed as f64) * 100.0
        }
    }
}

impl fmt::Display for ScanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} valid - {:.1}% success rate",
            self.valid_codes,
            self.total_processed,
            self.success_rate()
        )
    }
}

/// Thread-safe manager for updating scan statistics during batch runs.
#[derive(Debug, Default)]
pub struct StatsManager {
    /// Shared statistics state guarded by a mutex.
    stats: Mutex<ScanStats>,
}

impl StatsManager {
    /// Creates a new `StatsManager` instance with zeroed metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current statistics snapshot.
    pub fn get_stats(&self) -> ScanStats {
        self.stats.lock().unwrap().clone()
    }

    /// Records one scanned image and whether it yielded a valid code.
    pub fn record(&self, is_valid: bool) {
        let mut stats = self.stats.lock().unwrap();
        stats.total_processed += 1;
        if is_valid {
            stats.valid_codes += 1;
        } else {
            stats.invalid_codes += 1;
        }
    }

    /// Resets the tracked statistics to their default state.
    pub fn reset(&self) {
        let mut stats = self.stats.lock().unwrap();
        *stats = ScanStats::default();
    }
}
