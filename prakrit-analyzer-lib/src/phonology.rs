// Phonotactic filter for candidate stems.

/// Unaspirated stops.
const STOPS: &[char] = &['k', 'g', 'c', 'j', 'ṭ', 'ḍ', 't', 'd', 'p', 'b'];

fn is_stop(c: char) -> bool {
    STOPS.contains(&c)
}

/// Check a stem against Prakrit consonant-cluster constraints.
///
/// Rejects two adjacent stops (`tt`, `kg`, ...) and a stop, `h`, stop
/// sequence (`thp`, ...). Vowel hiatus is allowed and not checked.
pub fn is_valid(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();

    let doubled_stop = chars.windows(2).any(|w| is_stop(w[0]) && is_stop(w[1]));
    if doubled_stop {
        return false;
    }

    !chars
        .windows(3)
        .any(|w| is_stop(w[0]) && w[1] == 'h' && is_stop(w[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_stems_are_valid() {
        assert!(is_valid("muṇ"));
        assert!(is_valid("ho"));
        assert!(is_valid(""));
        assert!(is_valid("bhaṇ"));
    }

    #[test]
    fn test_doubled_stop_rejected() {
        assert!(!is_valid("vatt"));
        assert!(!is_valid("gacch"));
        assert!(!is_valid("ciṭṭ"));
        assert!(!is_valid("kg"));
    }

    #[test]
    fn test_stop_h_stop_rejected() {
        assert!(!is_valid("athpa"));
        assert!(!is_valid("ṭhḍ"));
        // Aspirate followed by a vowel is fine.
        assert!(is_valid("kha"));
        assert!(is_valid("thi"));
    }

    #[test]
    fn test_hiatus_allowed() {
        assert!(is_valid("hoe"));
        assert!(is_valid("jāṇa_e"));
        assert!(is_valid("muṇissa_i"));
    }

    #[test]
    fn test_non_stop_geminates_allowed() {
        // Only unaspirated stops count; sibilants and nasals may double.
        assert!(is_valid("muṇiss"));
        assert!(is_valid("amm"));
    }
}
