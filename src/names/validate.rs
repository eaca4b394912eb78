use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::names::similarity;

/// Minimum similarity ratio for a roster name to count as a match
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Outcome of validating one candidate name against the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Candidate as extracted, whitespace-normalized
    pub original: String,
    /// Best-matching roster name, or `original` when nothing matched
    pub corrected: String,
    /// True iff `corrected` differs from `original` case-insensitively
    pub was_corrected: bool,
    /// Match confidence in [0, 1]; 1.0 when no correction was applied
    pub similarity: f64,
}

/// Validate candidate names against the roster via fuzzy matching
///
/// Produces exactly one result per candidate, in input order; the roster is
/// never mutated and an empty roster simply keeps every candidate as heard.
/// Candidates without an acceptable match are reported with similarity 1.0
/// and `was_corrected = false` — callers that need to distinguish verified
/// members must additionally check membership of `corrected` in the roster.
pub fn validate_names(
    candidates: &[String],
    roster: &[String],
    threshold: f64,
) -> Vec<ValidationResult> {
    candidates
        .iter()
        .map(|candidate| validate_one(candidate, roster, threshold))
        .collect()
}

fn validate_one(candidate: &str, roster: &[String], threshold: f64) -> ValidationResult {
    let original = normalize_whitespace(candidate);

    if let Some((idx, score)) = similarity::closest_match(&original, roster, threshold) {
        let corrected = roster[idx].clone();
        let was_corrected = original.to_lowercase() != corrected.to_lowercase();
        debug!(
            original = %original,
            corrected = %corrected,
            similarity = %score,
            "roster match"
        );
        return ValidationResult {
            original,
            corrected,
            was_corrected,
            similarity: score,
        };
    }

    debug!(candidate = %original, "no roster match, keeping as heard");
    ValidationResult {
        corrected: original.clone(),
        original,
        was_corrected: false,
        similarity: 1.0,
    }
}

/// Collapse internal whitespace runs to single spaces and trim
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
