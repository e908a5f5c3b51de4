use regex::Regex;
use std::sync::OnceLock;

/// ASCII quotes, the typographic quotes U+2018..=U+201F, primes, the
/// modifier-letter apostrophe and the fullwidth quotes.
pub fn remove_quotes(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r#"["'\x{02BC}\x{2018}-\x{201F}\x{2032}\x{2033}\x{FF02}\x{FF07}]"#)
            .expect("static regex is valid")
    });

    re.replace_all(s, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_quotes() {
        let test_cases = vec![
            ("don't stop", "dont stop"),
            ("don’t stop", "dont stop"),
            ("\"heroes\"", "heroes"),
            ("“heroes”", "heroes"),
            ("‘single’", "single"),
            ("„low“", "low"),
            ("5′ 11″", "5 11"),
            ("don\u{2BC}t stop", "dont stop"),
            ("\u{FF02}heroes\u{FF02}", "heroes"),
            ("rock \u{FF07}n\u{FF07} roll", "rock n roll"),
            ("no quotes", "no quotes"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(remove_quotes(input), expected);
        }
    }
}
