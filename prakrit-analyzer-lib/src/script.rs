// Script detection, Devanagari <-> Harvard-Kyoto transliteration, spelling
// folding and hiatus normalization of user input.

use crate::types::Script;

const VIRAMA: char = '\u{094d}';
const NUKTA: char = '\u{093c}';
const DEVANAGARI_BLOCK: std::ops::RangeInclusive<char> = '\u{0900}'..='\u{097f}';

// The reverse lookup (Devanagari -> romanized) takes the first spelling
// listed. Retroflexes, palatal nasal and sibilants come out in the dotted
// letters the reference data and prefix table use; the HK capitals after
// them are accepted on input only.
const CONSONANTS: &[(&str, char)] = &[
    ("k", 'क'), ("kh", 'ख'), ("g", 'ग'), ("gh", 'घ'), ("ṅ", 'ङ'),
    ("c", 'च'), ("ch", 'छ'), ("j", 'ज'), ("jh", 'झ'), ("ñ", 'ञ'),
    ("ṭ", 'ट'), ("ṭh", 'ठ'), ("ḍ", 'ड'), ("ḍh", 'ढ'), ("ṇ", 'ण'),
    ("t", 'त'), ("th", 'थ'), ("d", 'द'), ("dh", 'ध'), ("n", 'न'),
    ("p", 'प'), ("ph", 'फ'), ("b", 'ब'), ("bh", 'भ'), ("m", 'म'),
    ("y", 'य'), ("r", 'र'), ("l", 'ल'), ("v", 'व'),
    ("ś", 'श'), ("ṣ", 'ष'), ("s", 'स'), ("h", 'ह'),
    ("G", 'ङ'), ("J", 'ञ'), ("T", 'ट'), ("Th", 'ठ'), ("D", 'ड'), ("Dh", 'ढ'),
    ("N", 'ण'), ("z", 'श'), ("S", 'ष'),
];

// (romanized, independent letter, dependent sign). Inherent "a" has no sign.
const VOWELS: &[(&str, char, Option<char>)] = &[
    ("a", 'अ', None),
    ("A", 'आ', Some('ा')),
    ("i", 'इ', Some('ि')),
    ("I", 'ई', Some('ी')),
    ("u", 'उ', Some('ु')),
    ("U", 'ऊ', Some('ू')),
    ("R", 'ऋ', Some('ृ')),
    ("e", 'ए', Some('े')),
    ("ai", 'ऐ', Some('ै')),
    ("o", 'ओ', Some('ो')),
    ("au", 'औ', Some('ौ')),
    ("ā", 'आ', Some('ा')),
    ("ī", 'ई', Some('ी')),
    ("ū", 'ऊ', Some('ू')),
    ("ṛ", 'ऋ', Some('ृ')),
];

const MARKS: &[(&str, char)] = &[
    ("M", 'ं'),
    ("H", 'ः'),
    ("ṃ", 'ं'),
    ("ḥ", 'ः'),
    ("M", 'ँ'),
    ("'", 'ऽ'),
];

// IAST long vowels and anusvāra, and the HK capitals the ending table
// spells them with.
const FOLDED: &[(char, char)] = &[
    ('ā', 'A'),
    ('ī', 'I'),
    ('ū', 'U'),
    ('ṛ', 'R'),
    ('ṃ', 'M'),
];

// Written between two vowels to mark hiatus rather than a diphthong.
const HIATUS_MARK: char = '_';

/// Detect the script of a piece of text: Devanagari if any character falls
/// in the Devanagari block, romanized otherwise.
pub fn detect_script(text: &str) -> Script {
    if text.chars().any(|c| DEVANAGARI_BLOCK.contains(&c)) {
        Script::Devanagari
    } else {
        Script::Romanized
    }
}

/// Transliterate between Devanagari and Harvard-Kyoto. Any other pair
/// returns the text unchanged.
///
/// Devanagari comes out with HK capitals for long vowels and anusvāra
/// (`A I U M`) and dotted letters for retroflexes and sibilants
/// (`ṭ ḍ ṇ ś ṣ`), the mix the ending table and reference data are written in.
pub fn transliterate(text: &str, from: Script, to: Script) -> String {
    match (from, to) {
        (Script::Devanagari, Script::Romanized) => devanagari_to_hk(text),
        (Script::Romanized, Script::Devanagari) => hk_to_devanagari(text),
        _ => text.to_string(),
    }
}

/// Fold one letter onto the spelling used for comparisons: IAST long vowels
/// and anusvāra become their HK capitals.
pub fn fold_char(c: char) -> char {
    FOLDED
        .iter()
        .find(|(iast, _)| *iast == c)
        .map_or(c, |(_, hk)| *hk)
}

/// Fold a whole string with [`fold_char`]. `jāṇāmi` and `jAṇAmi` fold to
/// the same key.
pub fn fold(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Mark every `ai` as hiatus (`a_i`) unless it is already marked.
///
/// Prakrit endings such as `-a_i` are two syllables; the same two letters
/// also spell the diphthong in HK, so the analyzer works on the marked form.
pub fn normalize_hiatus(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut prev: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        out.push(c);
        if c == 'a' && chars.peek() == Some(&'i') && prev != Some(HIATUS_MARK) {
            out.push(HIATUS_MARK);
        }
        prev = Some(c);
    }

    out
}

// ---------------------------------------------------------------------------
// Devanagari -> HK
// ---------------------------------------------------------------------------

fn devanagari_to_hk(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // A consonant was written and still carries its inherent "a".
    let mut inherent_a = false;

    for c in text.chars() {
        if c == NUKTA {
            continue;
        }
        if let Some(hk) = consonant_to_hk(c) {
            if inherent_a {
                out.push('a');
            }
            out.push_str(hk);
            inherent_a = true;
            continue;
        }
        if c == VIRAMA {
            inherent_a = false;
            continue;
        }
        if let Some(hk) = vowel_sign_to_hk(c) {
            out.push_str(hk);
            inherent_a = false;
            continue;
        }

        if inherent_a {
            out.push('a');
            inherent_a = false;
        }
        match independent_vowel_to_hk(c).or_else(|| mark_to_hk(c)) {
            Some(hk) => out.push_str(hk),
            None => out.push(c),
        }
    }

    if inherent_a {
        out.push('a');
    }
    out
}

fn consonant_to_hk(c: char) -> Option<&'static str> {
    CONSONANTS.iter().find(|(_, d)| *d == c).map(|(hk, _)| *hk)
}

fn vowel_sign_to_hk(c: char) -> Option<&'static str> {
    VOWELS
        .iter()
        .find(|(_, _, sign)| *sign == Some(c))
        .map(|(hk, _, _)| *hk)
}

fn independent_vowel_to_hk(c: char) -> Option<&'static str> {
    VOWELS.iter().find(|(_, d, _)| *d == c).map(|(hk, _, _)| *hk)
}

fn mark_to_hk(c: char) -> Option<&'static str> {
    MARKS.iter().find(|(_, d)| *d == c).map(|(hk, _)| *hk)
}

// ---------------------------------------------------------------------------
// HK -> Devanagari
// ---------------------------------------------------------------------------

enum Token {
    Consonant(char),
    Vowel { letter: char, sign: Option<char> },
    Mark(char),
    Hiatus,
    Other(char),
}

/// Read the longest romanized token at the start of `chars`.
fn next_token(chars: &[char]) -> (Token, usize) {
    for len in [2, 1] {
        if chars.len() < len {
            continue;
        }
        let piece: String = chars[..len].iter().collect();
        if let Some((_, d)) = CONSONANTS.iter().find(|(hk, _)| *hk == piece) {
            return (Token::Consonant(*d), len);
        }
        if let Some((_, letter, sign)) = VOWELS.iter().find(|(hk, _, _)| *hk == piece) {
            return (
                Token::Vowel {
                    letter: *letter,
                    sign: *sign,
                },
                len,
            );
        }
        if let Some((_, d)) = MARKS.iter().find(|(hk, _)| *hk == piece) {
            return (Token::Mark(*d), len);
        }
    }
    match chars[0] {
        HIATUS_MARK => (Token::Hiatus, 1),
        c => (Token::Other(c), 1),
    }
}

fn hk_to_devanagari(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() * 2);
    // The last letter written was a consonant with no vowel yet.
    let mut bare_consonant = false;
    let mut i = 0;

    while i < chars.len() {
        let (token, len) = next_token(&chars[i..]);
        i += len;
        match token {
            Token::Consonant(d) => {
                if bare_consonant {
                    out.push(VIRAMA);
                }
                out.push(d);
                bare_consonant = true;
            }
            Token::Vowel { letter, sign } => {
                if bare_consonant {
                    out.extend(sign);
                } else {
                    out.push(letter);
                }
                bare_consonant = false;
            }
            Token::Mark(d) => {
                if bare_consonant {
                    out.push(VIRAMA);
                }
                out.push(d);
                bare_consonant = false;
            }
            Token::Hiatus => {}
            Token::Other(c) => {
                if bare_consonant {
                    out.push(VIRAMA);
                }
                out.push(c);
                bare_consonant = false;
            }
        }
    }

    if bare_consonant {
        out.push(VIRAMA);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_script() {
        assert_eq!(detect_script("मुणिस्सइ"), Script::Devanagari);
        assert_eq!(detect_script("muṇissai"), Script::Romanized);
        assert_eq!(detect_script("homi ही"), Script::Devanagari);
        assert_eq!(detect_script(""), Script::Romanized);
    }

    #[test]
    fn test_devanagari_to_hk() {
        assert_eq!(
            transliterate("मुणिस्सइ", Script::Devanagari, Script::Romanized),
            "muṇissai"
        );
        assert_eq!(
            transliterate("जाणामि", Script::Devanagari, Script::Romanized),
            "jAṇAmi"
        );
        assert_eq!(
            transliterate("पडिभणइ", Script::Devanagari, Script::Romanized),
            "paḍibhaṇai"
        );
        assert_eq!(
            transliterate("चिट्ठइ", Script::Devanagari, Script::Romanized),
            "ciṭṭhai"
        );
        assert_eq!(
            transliterate("होमि", Script::Devanagari, Script::Romanized),
            "homi"
        );
        assert_eq!(
            transliterate("होंति", Script::Devanagari, Script::Romanized),
            "hoMti"
        );
        assert_eq!(
            transliterate("करीअ", Script::Devanagari, Script::Romanized),
            "karIa"
        );
    }

    #[test]
    fn test_hk_to_devanagari() {
        assert_eq!(
            transliterate("homi", Script::Romanized, Script::Devanagari),
            "होमि"
        );
        assert_eq!(
            transliterate("bhaNa_i", Script::Romanized, Script::Devanagari),
            "भणइ"
        );
        assert_eq!(
            transliterate("muN", Script::Romanized, Script::Devanagari),
            "मुण्"
        );
        assert_eq!(
            transliterate("pucchai", Script::Romanized, Script::Devanagari),
            "पुच्छै"
        );
    }

    #[test]
    fn test_dotted_letters_to_devanagari() {
        assert_eq!(
            transliterate("muṇ", Script::Romanized, Script::Devanagari),
            "मुण्"
        );
        assert_eq!(
            transliterate("jāṇāmi", Script::Romanized, Script::Devanagari),
            "जाणामि"
        );
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("jāṇāmi"), "jAṇAmi");
        assert_eq!(fold("jAṇAmi"), "jAṇAmi");
        assert_eq!(fold("bhuṃj"), "bhuMj");
        assert_eq!(fold("jīv"), "jIv");
        assert_eq!(fold("muṇissa_i"), "muṇissa_i");
        assert_eq!(fold_char('ṇ'), 'ṇ');
    }

    #[test]
    fn test_unsupported_pair_is_identity() {
        assert_eq!(
            transliterate("homi", Script::Romanized, Script::Romanized),
            "homi"
        );
        assert_eq!(
            transliterate("होमि", Script::Devanagari, Script::Devanagari),
            "होमि"
        );
    }

    #[test]
    fn test_normalize_hiatus() {
        assert_eq!(normalize_hiatus("muṇissai"), "muṇissa_i");
        assert_eq!(normalize_hiatus("muṇissa_i"), "muṇissa_i");
        assert_eq!(normalize_hiatus("haai"), "haa_i");
        assert_eq!(normalize_hiatus("homi"), "homi");
        assert_eq!(normalize_hiatus("_ai"), "_ai");
    }

    #[test]
    fn test_normalize_hiatus_idempotent() {
        for text in ["bhaṇai", "jāṇae", "aiai", "kai_ai"] {
            let once = normalize_hiatus(text);
            assert_eq!(normalize_hiatus(&once), once);
        }
    }
}
