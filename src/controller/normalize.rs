//! Free-text course names arrive in whatever form the scoring service or a
//! hand-maintained file used. Matching happens on an accent-folded form,
//! storage keys on a slug of the raw name.

/// Fold a lowercased character to its ASCII base letter.
fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}

/// Matching form of a name: accent-folded, lowercased, runs of
/// non-alphanumeric characters collapsed to a single space, trimmed.
/// Idempotent, so already-normalized text passes through unchanged.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        let c = fold_char(c);
        if c.is_alphanumeric() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with(' ') {
            out.push(' ');
        }
    }
    out.trim_end().to_string()
}

/// Storage slug: lowercased, non-alphanumeric runs collapsed to a single
/// dash. Accents are kept, so names that only differ in accents yield
/// distinct slugs even though they normalize identically.
#[must_use]
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

pub const COURSE_KEY_PREFIX: &str = "away-";

/// Deterministic catalog key for a course display name.
#[must_use]
pub fn course_key(display_name: &str) -> String {
    format!("{COURSE_KEY_PREFIX}{}", slug(display_name))
}

/// Sort key approximating pt-PT collation: accents and case are ignored at
/// the primary level, the raw name breaks ties. "Álamos" sorts next to
/// "Alamos", not after "Zebra".
#[must_use]
pub fn collation_key(name: &str) -> (String, String) {
    (normalize(name), name.to_string())
}
