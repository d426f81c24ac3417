// Verbal prefixes (upasarga) and their Sanskrit cognates.

use crate::script::fold_char;
use crate::types::PrefixRule;

const fn p(surface: &'static str, cognate: &'static str) -> PrefixRule {
    PrefixRule { surface, cognate }
}

// Scanned in order and the first hit wins, so "pa" shadows "paḍi" and
// "pari". Trying longest-first would change which forms are analyzed with a
// prefix; the order is kept as declared.
static PREFIXES: &[PrefixRule] = &[
    p("pa", "pra"),
    p("paḍi", "prati"),
    p("pari", "pari"),
    p("saṃ", "sam"),
    p("vi", "vi"),
    p("ā", "ā"),
    p("ni", "ni"),
    p("u", "ud"),
    p("aṇu", "anu"),
];

/// Return the first prefix rule whose surface form starts `form`.
pub fn identify(form: &str) -> Option<&'static PrefixRule> {
    strip(form).0
}

/// Split a form into its prefix rule (if any) and the remainder.
///
/// Surfaces match with vowel length and anusvāra folded, so `saM` and `A`
/// are read as `saṃ` and `ā`.
pub fn strip(form: &str) -> (Option<&'static PrefixRule>, &str) {
    PREFIXES
        .iter()
        .find_map(|rule| strip_surface(form, rule.surface).map(|rest| (Some(rule), rest)))
        .unwrap_or((None, form))
}

fn strip_surface<'a>(form: &'a str, surface: &str) -> Option<&'a str> {
    let mut chars = form.char_indices();
    for expected in surface.chars() {
        let (_, c) = chars.next()?;
        if fold_char(c) != fold_char(expected) {
            return None;
        }
    }
    Some(chars.as_str())
}
