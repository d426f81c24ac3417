// Multi-hypothesis Prakrit verb analyser.
//
// For each form we:
//   1. strip a verbal prefix (first match in table order),
//   2. look the remainder up among attested forms; a hit yields one
//      candidate per matching ending and nothing else,
//   3. otherwise guess, in two passes over the whole ending table:
//      A. direct: the ending is a literal suffix of the form,
//      B. sandhi: a stem rejoined with the ending reproduces the form.
//
// Every ending is tried, not just the longest one, so overlapping endings
// ("i", "hii", "issa_i") each produce their own candidate for scoring.

use crate::confidence;
use crate::dictionary::Dictionary;
use crate::endings;
use crate::phonology;
use crate::prefix;
use crate::sandhi;
use crate::types::*;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U'];

// Number of trailing characters the sandhi pass tries to peel off.
const MAX_SANDHI_TRIAL: usize = 3;

const ANUSVARA_SPELLED_NOTE: &str =
    "Anusvāra (M) used before nti/nte (written as Mti/Mte) in Prakrit.";
const ANUSVARA_STEM_NOTE: &str = "Anusvāra (M) used before nti/nte in Prakrit.";

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Analyse a normalized, romanized verb form. Returns all candidates sorted
/// by confidence, best first; an empty result means no analysis.
pub fn analyze(form: &str, dict: &Dictionary) -> AnalysisResult {
    let (prefix, stripped) = prefix::strip(form);
    if let Some(rule) = prefix {
        tracing::debug!(prefix = rule.surface, remainder = stripped, "verbal prefix found");
    }

    // A. Attested forms pre-empt guessing entirely.
    let mut candidates = attested_candidates(stripped, prefix, dict);

    if candidates.is_empty() {
        // B. Direct suffix matches.
        candidates.extend(direct_candidates(stripped, prefix, dict));
        // C. Sandhi reconstructions.
        candidates.extend(sandhi_candidates(stripped, prefix, dict));
    }

    confidence::rank(&mut candidates);
    tracing::debug!(form, candidates = candidates.len(), "analysis finished");
    candidates
}

// ---------------------------------------------------------------------------
// Attested forms
// ---------------------------------------------------------------------------

fn attested_candidates(
    form: &str,
    prefix: Option<&PrefixRule>,
    dict: &Dictionary,
) -> Vec<AnalysisCandidate> {
    let Some(root) = dict.lookup_attested(form) else {
        return vec![];
    };
    tracing::debug!(form, root, "form is attested");

    endings::all()
        .iter()
        .filter(|ending| form.ends_with(ending.pattern))
        .map(|ending| {
            let mut c = new_candidate(ending, prefix, root, ending.pattern);
            c.root = Some(root.to_string());
            c.confidence = confidence::attested_form(ending.base_confidence);
            c.notes
                .push(format!("Form '{form}' attested for root '{root}'."));
            c
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Guessing passes
// ---------------------------------------------------------------------------

fn direct_candidates(
    form: &str,
    prefix: Option<&PrefixRule>,
    dict: &Dictionary,
) -> Vec<AnalysisCandidate> {
    let mut out = Vec::new();

    for ending in endings::all() {
        for spelling in endings::spellings(ending) {
            let Some(stem) = form.strip_suffix(spelling) else {
                continue;
            };
            if !stem_allowed(stem, ending) {
                continue;
            }
            out.push(guessed_candidate(ending, spelling, stem, prefix, false, dict));
        }
    }

    out
}

fn sandhi_candidates(
    form: &str,
    prefix: Option<&PrefixRule>,
    dict: &Dictionary,
) -> Vec<AnalysisCandidate> {
    let mut out = Vec::new();

    // Byte offset of every character, so trials never split one.
    let starts: Vec<usize> = form.char_indices().map(|(i, _)| i).collect();
    let max_trial = MAX_SANDHI_TRIAL.min(starts.len().saturating_sub(1));

    for ending in endings::all() {
        for trial in 1..=max_trial {
            let stem = &form[..starts[starts.len() - trial]];
            if !stem_allowed(stem, ending) {
                continue;
            }
            let rejoined = endings::spellings(ending)
                .into_iter()
                .find(|spelling| sandhi::join(stem, spelling) == form);
            if let Some(spelling) = rejoined {
                out.push(guessed_candidate(ending, spelling, stem, prefix, true, dict));
            }
        }
    }

    out
}

/// Check whether `stem` can carry `ending`: no thematic `a` left on the
/// stem, `-i` only after a vowel, and a valid consonant cluster.
fn stem_allowed(stem: &str, ending: &Ending) -> bool {
    if stem.ends_with('a') {
        return false;
    }
    if ending.pattern == "i" && !stem.chars().last().map_or(false, |c| VOWELS.contains(&c)) {
        return false;
    }
    phonology::is_valid(stem)
}

fn guessed_candidate(
    ending: &Ending,
    spelling: &str,
    stem: &str,
    prefix: Option<&PrefixRule>,
    sandhi_applied: bool,
    dict: &Dictionary,
) -> AnalysisCandidate {
    let matched_root = dict.longest_known_root(stem);

    let mut c = new_candidate(ending, prefix, stem, spelling);
    c.sandhi_applied = sandhi_applied;
    c.special_note = anusvara_note(ending, spelling, stem).map(str::to_string);

    let start = confidence::initial(ending.base_confidence, sandhi_applied);
    let (score, note) = confidence::root_adjusted(start, matched_root, stem);
    c.confidence = score;
    c.notes.push(note);

    c.matched_root = matched_root.map(str::to_string);
    c.root = c.matched_root.clone();
    c
}

fn anusvara_note(ending: &Ending, spelling: &str, stem: &str) -> Option<&'static str> {
    if spelling != ending.pattern {
        Some(ANUSVARA_SPELLED_NOTE)
    } else if endings::anusvara_variant(ending.pattern).is_some() && stem.ends_with('M') {
        Some(ANUSVARA_STEM_NOTE)
    } else {
        None
    }
}

fn new_candidate(
    ending: &Ending,
    prefix: Option<&PrefixRule>,
    potential_root: &str,
    ending_matched: &str,
) -> AnalysisCandidate {
    AnalysisCandidate {
        person: ending.person,
        number: ending.number,
        tense: ending.tense,
        base_confidence: ending.base_confidence,
        potential_root: potential_root.to_string(),
        root: None,
        matched_root: None,
        prefix: prefix.map(|p| p.surface.to_string()),
        prefix_cognate: prefix.map(|p| p.cognate.to_string()),
        ending_matched: ending_matched.to_string(),
        sandhi_applied: false,
        confidence: ending.base_confidence,
        notes: vec![],
        special_note: None,
    }
}
