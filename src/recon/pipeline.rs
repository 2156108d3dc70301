//! Reconciliation of candidates from multiple recognition sources.
//!
//! Each source contributes one raw candidate for the same image. The
//! pipeline escalates through three tiers: direct validation of every
//! source, then single-position correction per source, then global
//! correction per source. Tiers are exhausted across all sources before
//! escalating, so an exact match from a lower-priority source always beats
//! a corrected reading from a higher-priority one. Within a tier, sources
//! are tried in their listed priority order.
//!
//! Every call yields a result. When no tier produces a valid code the
//! result carries all candidates joined with [`SOURCE_SEPARATOR`] so the
//! raw readings stay available for human inspection.

use tracing::debug;

use super::confusion::ConfusionTable;
use super::correct::{correct_global, correct_single_position};
use super::validator::is_valid_code;

/// Separator used when joining candidates and labels in a failure report.
pub const SOURCE_SEPARATOR: &str = " | ";

/// Expected identifier length; recognition output is truncated to this.
pub const CODE_LENGTH: usize = 9;

/// One recognition source's raw output, tagged with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCandidate {
    /// Identifies the source, e.g. an engine name.
    pub label: String,
    /// The raw recognized text, not yet normalized.
    pub raw: String,
}

impl SourceCandidate {
    /// Creates a candidate.
    pub fn new(label: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            raw: raw.into(),
        }
    }
}

/// The outcome of reconciling one image's candidates.
///
/// When `is_valid` is false, `code` holds every normalized candidate joined
/// with [`SOURCE_SEPARATOR`] rather than a single identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationResult {
    /// The final code, or the joined candidates on failure.
    pub code: String,
    /// Which source and correction tier produced the result.
    pub source_label: String,
    /// Whether `code` passed checksum validation.
    pub is_valid: bool,
}

/// Normalizes raw recognition output into a working candidate.
///
/// Trims, uppercases, strips all remaining whitespace, and keeps at most
/// the first [`CODE_LENGTH`] characters. Short output stays short; the
/// validator rejects it downstream like any other malformed candidate.
pub fn normalize_candidate(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .take(CODE_LENGTH)
        .collect()
}

/// Reconciles prioritized source candidates into a single result.
///
/// Candidates are normalized once on entry; the normalized strings are the
/// working form for every tier, including the failure report. The search
/// is fully deterministic: identical inputs yield identical results.
pub fn reconcile(sources: &[SourceCandidate], table: &ConfusionTable) -> ReconciliationResult {
    let normalized: Vec<SourceCandidate> = sources
        .iter()
        .map(|s| SourceCandidate::new(s.label.clone(), normalize_candidate(&s.raw)))
        .collect();

    // Tier 1: a direct hit from any source beats every correction.
    for source in &normalized {
        if is_valid_code(&source.raw) {
            debug!(source = %source.label, "candidate valid without correction");
            return ReconciliationResult {
                code: source.raw.clone(),
                source_label: source.label.clone(),
                is_valid: true,
            };
        }
    }

    // Tier 2: single-position correction, most targeted fix first.
    for source in &normalized {
        if let Some(code) = correct_single_position(&source.raw, table.expanded_pairs()) {
            debug!(source = %source.label, "recovered by single-position correction");
            return ReconciliationResult {
                code,
                source_label: format!("{}+corrected(single)", source.label),
                is_valid: true,
            };
        }
    }

    // Tier 3: whole-string correction for consistently misread glyphs.
    for source in &normalized {
        if let Some(code) = correct_global(&source.raw, table.expanded_pairs()) {
            debug!(source = %source.label, "recovered by global correction");
            return ReconciliationResult {
                code,
                source_label: format!("{}+corrected(global)", source.label),
                is_valid: true,
            };
        }
    }

    // All tiers exhausted: keep the raw readings for inspection.
    let codes: Vec<&str> = normalized.iter().map(|s| s.raw.as_str()).collect();
    let labels: Vec<&str> = normalized.iter().map(|s| s.label.as_str()).collect();
    ReconciliationResult {
        code: codes.join(SOURCE_SEPARATOR),
        source_label: labels.join(SOURCE_SEPARATOR),
        is_valid: false,
    }
}
