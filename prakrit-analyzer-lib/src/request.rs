// Request boundary: raw user input in, report or typed failure out.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::confidence;
use crate::dictionary::Dictionary;
use crate::error::AnalysisError;
use crate::morphology;
use crate::script;
use crate::types::*;

/// Guidance returned when no analysis survives.
pub const NO_ANALYSIS_SUGGESTIONS: &[&str] = &[
    "Check if the input follows Prakrit phonological rules",
    "Ensure the ending is a valid Prakrit verb ending",
    "Verify the transliteration if using Harvard-Kyoto",
];

/// Analyse one user-entered verb form.
///
/// Devanagari input is transliterated to Harvard-Kyoto and every input is
/// hiatus-normalized before analysis. A panic inside the engine is reported
/// as [`AnalysisError::Unexpected`] instead of unwinding into the caller.
pub fn analyze_input(raw: &str, dict: &Dictionary) -> Result<Report, AnalysisError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let detected = script::detect_script(input);
    let romanized = script::transliterate(input, detected, Script::Romanized);
    let working = script::normalize_hiatus(&romanized);
    tracing::debug!(input, working = working.as_str(), script = %detected, "analyzing input");

    let candidates = panic::catch_unwind(AssertUnwindSafe(|| morphology::analyze(&working, dict)))
        .map_err(|payload| {
            let message = panic_message(payload.as_ref());
            tracing::error!(input, message = message.as_str(), "analysis failed");
            AnalysisError::Unexpected(message)
        })?;

    if candidates.is_empty() {
        tracing::debug!(input, "no analysis");
        return Err(AnalysisError::NoAnalysis {
            form: input.to_string(),
            suggestions: NO_ANALYSIS_SUGGESTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        });
    }

    Ok(Report {
        original_form: input.to_string(),
        script: detected,
        hk_form: (detected == Script::Devanagari).then_some(working),
        results: candidates.into_iter().map(report_entry).collect(),
    })
}

fn report_entry(candidate: AnalysisCandidate) -> ReportEntry {
    let mut explanations = Vec::new();
    if let (Some(prefix), Some(cognate)) = (&candidate.prefix, &candidate.prefix_cognate) {
        explanations.push(format!(
            "Found verbal prefix '{prefix}' (Sanskrit: '{cognate}')"
        ));
    }
    if candidate.sandhi_applied {
        explanations.push("Sandhi rules were applied in this analysis".to_string());
    }
    if candidate.tense == Tense::Past && candidate.person == Person::All {
        explanations.push(
            "Note: Past tense forms in Prakrit are the same for all persons and numbers"
                .to_string(),
        );
    }

    ReportEntry {
        reliability: confidence::reliability(candidate.confidence),
        candidate,
        explanations,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown error".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::from_parts(
            ["muṇ", "ho", "bhaṇ"],
            [("ho", vec!["homi"]), ("bhaṇ", vec!["bhaṇa_i"])],
        )
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(analyze_input("", &dict()).unwrap_err(), AnalysisError::EmptyInput);
        assert_eq!(analyze_input("  \t", &dict()).unwrap_err(), AnalysisError::EmptyInput);
    }

    #[test]
    fn test_no_analysis_has_suggestions() {
        let err = analyze_input("vattmi", &dict()).unwrap_err();
        assert!(matches!(err, AnalysisError::NoAnalysis { ref form, .. } if form == "vattmi"));
        assert_eq!(err.suggestions().len(), 3);
    }

    #[test]
    fn test_hiatus_normalized_before_analysis() {
        let report = analyze_input("muṇissai", &dict()).unwrap();
        assert_eq!(report.script, Script::Romanized);
        assert!(report.hk_form.is_none());
        let top = &report.results[0].candidate;
        assert_eq!(top.ending_matched, "issa_i");
        assert_eq!(top.tense, Tense::Future);
        assert!(top.potential_root.starts_with("muṇ"));
    }

    #[test]
    fn test_attested_after_normalization() {
        let report = analyze_input("bhaṇai", &dict()).unwrap();
        assert!(report
            .results
            .iter()
            .all(|e| e.candidate.root.as_deref() == Some("bhaṇ")));
    }

    #[test]
    fn test_devanagari_input() {
        let report = analyze_input("होमि", &dict()).unwrap();
        assert_eq!(report.script, Script::Devanagari);
        assert_eq!(report.hk_form.as_deref(), Some("homi"));
        assert_eq!(report.results[0].candidate.root.as_deref(), Some("ho"));
        assert_eq!(report.results[0].reliability, Reliability::High);
    }

    #[test]
    fn test_devanagari_reaches_dotted_data() {
        let d = Dictionary::from_parts(["jāṇ", "muṇ"], [("jāṇ", vec!["jāṇāmi"])]);
        let report = analyze_input("जाणामि", &d).unwrap();
        assert_eq!(report.hk_form.as_deref(), Some("jAṇAmi"));
        assert!(report
            .results
            .iter()
            .all(|e| e.candidate.root.as_deref() == Some("jāṇ")));

        let report = analyze_input("मुणिस्सइ", &d).unwrap();
        assert_eq!(report.hk_form.as_deref(), Some("muṇissa_i"));
        let top = &report.results[0].candidate;
        assert_eq!(top.ending_matched, "issa_i");
        assert_eq!(top.root.as_deref(), Some("muṇ"));
    }

    #[test]
    fn test_explanations() {
        let report = analyze_input("vihomi", &dict()).unwrap();
        assert!(report.results[0]
            .explanations
            .contains(&"Found verbal prefix 'vi' (Sanskrit: 'vi')".to_string()));

        let report = analyze_input("hohI", &dict()).unwrap();
        let past = report
            .results
            .iter()
            .find(|e| e.candidate.tense == Tense::Past)
            .expect("should have a past reading");
        assert!(past
            .explanations
            .iter()
            .any(|x| x.contains("same for all persons")));
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
    }
}
