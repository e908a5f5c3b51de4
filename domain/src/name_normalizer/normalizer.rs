use crate::name_normalizer::rules::{
    articles::strip_leading_article, diacritics::fold_diacritics, quotes::remove_quotes,
};

/// Reduces display strings (titles, credited names) to a comparison key:
/// leading article removed, diacritics folded, lowercased, quotes removed.
///
/// Normalization never fails; any input yields a key.
pub struct NameNormalizer;

impl NameNormalizer {
    pub fn normalize(&self, input: &str) -> String {
        let s = strip_leading_article(input);
        let s = fold_diacritics(s);
        let s = s.to_lowercase();
        remove_quotes(&s)
    }
}

/// Shorthand for [`NameNormalizer::normalize`].
///
/// ```
/// assert_eq!(domain::normalize("The Best of the Best"), "best of the best");
/// assert_eq!(domain::normalize("Èl Camino"), "el camino");
/// ```
pub fn normalize(input: &str) -> String {
    NameNormalizer.normalize(input)
}

/// Sorts titles by their normalized key. Titles with equal keys keep their
/// input order.
pub fn sort_by_neutral<S: AsRef<str>>(titles: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = titles.iter().map(|t| t.as_ref().to_string()).collect();
    sorted.sort_by_cached_key(|title| normalize(title));
    sorted
}
