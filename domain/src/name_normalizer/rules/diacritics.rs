use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Removes diacritics by decomposing to NFD, dropping combining marks and
/// recomposing what is left.
pub fn fold_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}
