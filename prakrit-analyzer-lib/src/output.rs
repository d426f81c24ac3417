// Plain-text formatting for analysis reports.

use crate::error::AnalysisError;
use crate::types::*;

/// Render a report as a numbered list of possibilities.
///
/// Format:
///   Analysis for: muṇissai (script: hk)
///
///   Possibility 1:
///     Tense: future
///     Person: third
///     ...
pub fn to_text(report: &Report) -> String {
    let mut lines = vec![format!(
        "Analysis for: {} (script: {})",
        report.original_form, report.script
    )];
    if let Some(hk) = &report.hk_form {
        lines.push(format!("Harvard-Kyoto: {hk}"));
    }

    for (i, entry) in report.results.iter().enumerate() {
        lines.push(String::new());
        lines.extend(entry_lines(i + 1, entry));
    }
    lines.join("\n") + "\n"
}

fn entry_lines(n: usize, entry: &ReportEntry) -> Vec<String> {
    let c = &entry.candidate;
    let mut lines = vec![
        format!("Possibility {n}:"),
        format!("  Tense: {}", c.tense),
        format!("  Person: {}", c.person),
        format!("  Number: {}", c.number),
        format!("  Root: {}", c.potential_root),
    ];
    if let Some(root) = c.root.as_ref().filter(|r| **r != c.potential_root) {
        lines.push(format!("  Known root: {root}"));
    }
    lines.push(format!("  Ending: {}", c.ending_matched));
    lines.push(format!(
        "  Confidence: {:.1}% ({})",
        c.confidence * 100.0,
        entry.reliability
    ));
    if let (Some(prefix), Some(cognate)) = (&c.prefix, &c.prefix_cognate) {
        lines.push(format!("  Prefix: {prefix} (Sanskrit: {cognate})"));
    }
    if c.sandhi_applied {
        lines.push("  Sandhi rules applied".to_string());
    }
    if let Some(note) = &c.special_note {
        lines.push(format!("  {note}"));
    }
    lines.extend(
        c.notes
            .iter()
            .chain(&entry.explanations)
            .map(|note| format!("  - {note}")),
    );
    lines
}

/// Render a failed request with its suggestions.
pub fn error_to_text(err: &AnalysisError) -> String {
    std::iter::once(err.to_string())
        .chain(err.suggestions().iter().map(|s| format!("  - {s}")))
        .collect::<Vec<_>>()
        .join("\n")
}
