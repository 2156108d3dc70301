//! Candidate reconciliation: checksum validation, the confusion model,
//! substitution search, and the escalation pipeline across sources.
//!
//! Everything in this module is a pure function over immutable inputs.
//! Ordering (source priority, pair priority, position order) is the only
//! state the search carries, and it is fixed by the inputs.

pub mod confusion;
pub mod correct;
pub mod pipeline;
pub mod validator;

pub use confusion::{ConfusionPair, ConfusionTable};
pub use correct::{correct_global, correct_single_position};
pub use pipeline::{
    CODE_LENGTH, ReconciliationResult, SOURCE_SEPARATOR, SourceCandidate, normalize_candidate,
    reconcile,
};
pub use validator::is_valid_code;
