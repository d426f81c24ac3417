// Prakrit finite verb endings, in Harvard-Kyoto spelling.
//
// The combined table lists present, then future, then past endings. Ranking
// ties are broken by this order, so do not sort it.

use crate::types::{Ending, Number, Person, Tense};

use Number::{Plural, Singular};
use Person::{First, Second, Third};

const fn e(
    pattern: &'static str,
    person: Person,
    number: Number,
    tense: Tense,
    base_confidence: f64,
) -> Ending {
    Ending {
        pattern,
        person,
        number,
        tense,
        base_confidence,
    }
}

const PRESENT: Tense = Tense::Present;
const FUTURE: Tense = Tense::Future;
const PAST: Tense = Tense::Past;

static ENDINGS: &[Ending] = &[
    // Present.
    e("mi", First, Singular, PRESENT, 1.0),
    e("si", Second, Singular, PRESENT, 1.0),
    e("se", Second, Singular, PRESENT, 0.9),
    e("di", Third, Singular, PRESENT, 1.0),
    e("i", Third, Singular, PRESENT, 0.9),
    e("e", Third, Singular, PRESENT, 0.9),
    e("ae", Third, Singular, PRESENT, 0.85),
    e("mo", First, Plural, PRESENT, 1.0),
    e("mu", First, Plural, PRESENT, 0.9),
    e("ma", First, Plural, PRESENT, 0.9),
    e("ha", Second, Plural, PRESENT, 1.0),
    e("tha", Second, Plural, PRESENT, 0.9),
    e("nti", Third, Plural, PRESENT, 1.0),
    e("nte", Third, Plural, PRESENT, 0.9),
    e("mhi", First, Singular, PRESENT, 0.8),
    // Future.
    e("himi", First, Singular, FUTURE, 1.0),
    e("ssaM", First, Singular, FUTURE, 1.0),
    e("ssAmi", First, Singular, FUTURE, 0.9),
    e("issaM", First, Singular, FUTURE, 0.9),
    e("issAmi", First, Singular, FUTURE, 0.9),
    e("hisi", Second, Singular, FUTURE, 1.0),
    e("hise", Second, Singular, FUTURE, 0.9),
    e("issasi", Second, Singular, FUTURE, 0.9),
    e("hi", Third, Singular, FUTURE, 1.0),
    e("hii", Third, Singular, FUTURE, 0.9),
    e("issa_e", Third, Singular, FUTURE, 0.9),
    e("hie", Third, Singular, FUTURE, 0.9),
    e("issa_i", Third, Singular, FUTURE, 0.9),
    e("himo", First, Plural, FUTURE, 1.0),
    e("himu", First, Plural, FUTURE, 0.9),
    e("hima", First, Plural, FUTURE, 0.9),
    e("issAmo", First, Plural, FUTURE, 0.9),
    e("hitthA", Second, Plural, FUTURE, 1.0),
    e("hiha", Second, Plural, FUTURE, 0.9),
    e("issatha", Second, Plural, FUTURE, 0.9),
    e("hinti", Third, Plural, FUTURE, 1.0),
    e("hinte", Third, Plural, FUTURE, 0.9),
    e("issanti", Third, Plural, FUTURE, 0.9),
    e("issante", Third, Plural, FUTURE, 0.9),
    // Past: one form serves every person and number.
    e("sI", Person::All, Number::All, PAST, 1.0),
    e("hI", Person::All, Number::All, PAST, 1.0),
    e("hIa", Person::All, Number::All, PAST, 0.9),
    e("Ia", Person::All, Number::All, PAST, 0.9),
    e("itta", Person::All, Number::All, PAST, 0.8),
    e("iya", Person::All, Number::All, PAST, 0.8),
];

/// The combined ending table: present, future, past.
pub fn all() -> &'static [Ending] {
    ENDINGS
}

/// The anusvāra spelling of a third-plural present ending (`nti` → `Mti`).
pub fn anusvara_variant(pattern: &str) -> Option<&'static str> {
    match pattern {
        "nti" => Some("Mti"),
        "nte" => Some("Mte"),
        _ => None,
    }
}

/// Every spelling under which an ending may appear on the surface, canonical first.
pub fn spellings(ending: &Ending) -> Vec<&'static str> {
    let mut out = vec![ending.pattern];
    out.extend(anusvara_variant(ending.pattern));
    out
}
