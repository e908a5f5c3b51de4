/// Checked in order; only the first match is stripped.
pub const LEADING_ARTICLES: &[&str] = &["a ", "an ", "the ", "i "];

/// Strips a single leading article (including its trailing space) from `s`.
/// Matching is case-insensitive, the returned slice keeps the original casing.
pub fn strip_leading_article(s: &str) -> &str {
    for article in LEADING_ARTICLES {
        let char_count = article.chars().count();
        let end = s
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(s.len()))
            .nth(char_count);

        if let Some(end) = end
            && s[..end].to_lowercase() == *article
        {
            return &s[end..];
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_article() {
        let test_cases = vec![
            ("The Best of the Best", "Best of the Best"),
            ("A Tale of Two Cities", "Tale of Two Cities"),
            ("An Officer and a Gentleman", "Officer and a Gentleman"),
            ("I Walk the Line", "Walk the Line"),
            ("THE END", "END"),
            ("the ", ""),
            ("Theater", "Theater"),
            ("Anchorman", "Anchorman"),
            ("Apple of My Eye", "Apple of My Eye"),
            ("Into the Wild", "Into the Wild"),
            ("", ""),
        ];
        for (input, expected) in test_cases {
            assert_eq!(strip_leading_article(input), expected);
        }
    }

    #[test]
    fn test_only_first_article_is_stripped() {
        assert_eq!(strip_leading_article("The The"), "The");
        assert_eq!(strip_leading_article("A The Band"), "The Band");
    }

    #[test]
    fn test_article_must_be_a_prefix() {
        assert_eq!(strip_leading_article("Best of the Best"), "Best of the Best");
        assert_eq!(strip_leading_article(" The Best"), " The Best");
    }

    #[test]
    fn test_multibyte_input_is_left_alone() {
        assert_eq!(strip_leading_article("Ñu"), "Ñu");
        assert_eq!(strip_leading_article("İ am"), "İ am");
    }
}
