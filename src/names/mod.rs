/// Candidate name extraction from transcripts
pub mod extract;
/// Approximate string matching
pub mod similarity;
/// Roster validation of candidates
pub mod validate;

pub use extract::extract_names;
pub use validate::{validate_names, ValidationResult, DEFAULT_THRESHOLD};

use tracing::info;

/// Run the full identification pipeline over a transcript
///
/// Extracts candidate names and validates each against the roster. Returns one
/// record per unique candidate, in transcript order; empty when the transcript
/// yields no candidates.
pub fn identify_participants(
    transcript: &str,
    roster: &[String],
    threshold: f64,
) -> Vec<ValidationResult> {
    let candidates = extract::extract_names(transcript);
    if candidates.is_empty() {
        info!("no participant candidates in transcript");
        return Vec::new();
    }

    let results = validate::validate_names(&candidates, roster, threshold);
    info!(
        candidates = candidates.len(),
        corrected = results.iter().filter(|r| r.was_corrected).count(),
        "participants identified"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_extracts_and_corrects() {
        let roster = vec!["Mateus Estival".to_owned(), "João Silva".to_owned()];
        let results = identify_participants(
            "Os participantes são Mateus Estivau e João Silva",
            &roster,
            DEFAULT_THRESHOLD,
        );

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].corrected, "Mateus Estival");
        assert!(results[0].was_corrected);
        assert_eq!(results[1].corrected, "João Silva");
        assert!(!results[1].was_corrected);
    }

    #[test]
    fn test_pipeline_empty_transcript() {
        let roster = vec!["Mateus Estival".to_owned()];
        assert!(identify_participants("", &roster, DEFAULT_THRESHOLD).is_empty());
    }
}
