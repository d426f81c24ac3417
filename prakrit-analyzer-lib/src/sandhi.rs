// Junction rules between a stem and an ending.

/// Join a stem and an ending.
///
/// `i` + `a` takes a `y` glide and `u` + `a` takes a `v` glide. Every other
/// junction is plain concatenation: Prakrit keeps vowel hiatus (`a` + `i`
/// stays `ai`, `o` + `e` stays `oe`).
pub fn join(stem: &str, ending: &str) -> String {
    let glide = if ending.starts_with('a') {
        match stem.chars().last() {
            Some('i') => Some('y'),
            Some('u') => Some('v'),
            _ => None,
        }
    } else {
        None
    };

    let mut out = String::with_capacity(stem.len() + ending.len() + 1);
    out.push_str(stem);
    out.extend(glide);
    out.push_str(ending);
    out
}
