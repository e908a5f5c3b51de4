/// Lowercase particles that open a multi-word surname ("de niro", "van gogh").
pub const SURNAME_PARTICLES: &[&str] = &[
    // spanish/portuguese
    "de", "del", "dos", "das",
    // french
    "du", "des", "le", "la",
    // dutch/flemish
    "van", "den", "der", "te", "ter", "ten",
    // german
    "von", "vom", "zu", "zum", "zur",
    // italian
    "di", "della", "degli", "delle", "da",
    // arabic
    "bin", "ibn", "bint",
    // misc
    "af", "av", "ap",
];

pub const GENERATIONAL_SUFFIXES: &[&str] = &["Jr.", "Sr.", "II", "III", "IV", "V"];

pub fn is_surname_particle(token: &str) -> bool {
    let token = token.to_lowercase();
    SURNAME_PARTICLES.contains(&token.as_str())
}

/// Case-insensitive so suffixes are still recognised in normalized names.
pub fn is_generational_suffix(token: &str) -> bool {
    GENERATIONAL_SUFFIXES
        .iter()
        .any(|suffix| suffix.eq_ignore_ascii_case(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_surname_particle() {
        for particle in SURNAME_PARTICLES {
            assert!(is_surname_particle(particle));
            assert!(is_surname_particle(&particle.to_uppercase()));
        }
        assert!(is_surname_particle("De"));
        assert!(!is_surname_particle("dei"));
        assert!(!is_surname_particle("smith"));
        assert!(!is_surname_particle(""));
    }

    #[test]
    fn test_is_generational_suffix() {
        let test_cases = vec![
            ("Jr.", true),
            ("jr.", true),
            ("SR.", true),
            ("III", true),
            ("iv", true),
            ("V", true),
            ("Jr", false),
            ("VI", false),
            ("Smith", false),
        ];
        for (input, expected) in test_cases {
            assert_eq!(is_generational_suffix(input), expected, "input: {input}");
        }
    }
}
