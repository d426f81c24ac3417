// Confidence scoring and ranking for analysis candidates.

use std::cmp::Ordering;

use crate::types::{AnalysisCandidate, Reliability};

// Bounds every score is clamped to.
pub const MIN_CONFIDENCE: f64 = 0.1;
pub const MAX_CONFIDENCE: f64 = 1.0;

// Form found verbatim in the attested-forms list.
const ATTESTED_FORM_BOOST: f64 = 0.25;
// Readings that needed a sandhi reconstruction are slightly less likely.
const SANDHI_FACTOR: f64 = 0.9;
// Stem begins with a known root; longer coverage of the stem adds a little more.
const ROOT_MATCH_BOOST: f64 = 0.15;
const ROOT_COVERAGE_WEIGHT: f64 = 0.05;
const UNATTESTED_ROOT_PENALTY: f64 = -0.2;

const HIGH_THRESHOLD: f64 = 0.9;
const MEDIUM_THRESHOLD: f64 = 0.7;

pub fn clamp(score: f64) -> f64 {
    score.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

/// Score of a reading of an attested form.
pub fn attested_form(base: f64) -> f64 {
    clamp(base + ATTESTED_FORM_BOOST)
}

/// Starting score of a guessed reading, before the root adjustment.
pub fn initial(base: f64, sandhi_applied: bool) -> f64 {
    if sandhi_applied {
        clamp(base * SANDHI_FACTOR)
    } else {
        clamp(base)
    }
}

/// Adjust a guessed reading by whether its stem begins with a known root.
///
/// Returns the new score and the note explaining the adjustment. Lengths
/// are counted in characters.
pub fn root_adjusted(score: f64, matched_root: Option<&str>, stem: &str) -> (f64, String) {
    match matched_root {
        Some(root) => {
            let root_len = root.chars().count() as f64;
            let stem_len = stem.chars().count().max(1) as f64;
            let boost = ROOT_MATCH_BOOST + ROOT_COVERAGE_WEIGHT * (root_len / stem_len);
            (
                clamp(score + boost),
                format!("Root '{root}' attested in Prakrit verb list."),
            )
        }
        None => (
            clamp(score + UNATTESTED_ROOT_PENALTY),
            "Root not attested in Prakrit verb list.".to_string(),
        ),
    }
}

/// Bucket a score for display.
pub fn reliability(confidence: f64) -> Reliability {
    if confidence >= HIGH_THRESHOLD {
        Reliability::High
    } else if confidence >= MEDIUM_THRESHOLD {
        Reliability::Medium
    } else {
        Reliability::Low
    }
}

/// Compare two candidates for sorting (best first). Equal scores compare
/// equal so that a stable sort keeps generation order.
pub fn compare(a: &AnalysisCandidate, b: &AnalysisCandidate) -> Ordering {
    b.confidence
        .partial_cmp(&a.confidence)
        .unwrap_or(Ordering::Equal)
}

/// Sort candidates best first, keeping generation order among ties.
pub fn rank(candidates: &mut [AnalysisCandidate]) {
    candidates.sort_by(compare);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_attested_form_caps_at_one() {
        assert!(approx(attested_form(0.9), 1.0));
        assert!(approx(attested_form(0.7), 0.95));
    }

    #[test]
    fn test_initial_sandhi_factor() {
        assert!(approx(initial(1.0, false), 1.0));
        assert!(approx(initial(1.0, true), 0.9));
        assert!(approx(initial(0.8, true), 0.72));
    }

    #[test]
    fn test_root_match_boost() {
        // Root covers the whole stem: +0.2.
        let (score, note) = root_adjusted(0.7, Some("muṇ"), "muṇ");
        assert!(approx(score, 0.9));
        assert_eq!(note, "Root 'muṇ' attested in Prakrit verb list.");
        // Root covers half the stem: +0.175.
        let (score, _) = root_adjusted(0.5, Some("ho"), "hoej");
        assert!(approx(score, 0.675));
        let (score, _) = root_adjusted(0.95, Some("ho"), "ho");
        assert!(approx(score, 1.0));
    }

    #[test]
    fn test_unattested_penalty_floors() {
        let (score, note) = root_adjusted(0.9, None, "xyz");
        assert!(approx(score, 0.7));
        assert_eq!(note, "Root not attested in Prakrit verb list.");
        let (score, _) = root_adjusted(0.2, None, "xyz");
        assert!(approx(score, MIN_CONFIDENCE));
    }

    #[test]
    fn test_empty_stem_counts_as_one() {
        let (score, _) = root_adjusted(0.5, Some("a"), "");
        assert!(approx(score, 0.7));
    }

    #[test]
    fn test_reliability_buckets() {
        assert_eq!(reliability(1.0), Reliability::High);
        assert_eq!(reliability(0.9), Reliability::High);
        assert_eq!(reliability(0.75), Reliability::Medium);
        assert_eq!(reliability(0.5), Reliability::Low);
    }
}
