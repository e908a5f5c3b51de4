use std::{borrow::Cow, fmt};

use crate::surname::particles::{is_generational_suffix, is_surname_particle};

/// The part of a full name used to order it in a credit list. Borrowed
/// tokens keep the casing they had in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Surname<'a> {
    /// A particle followed by the final token of the name, e.g. "De Niro".
    Prefixed { particle: &'a str, last: &'a str },
    /// A single token. Owned when commas had to be stripped from it.
    Single(Cow<'a, str>),
}

impl Surname<'_> {
    /// Lowercase sort key.
    pub fn key(&self) -> String {
        self.to_string().to_lowercase()
    }
}

impl fmt::Display for Surname<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Surname::Prefixed { particle, last } => write!(f, "{} {}", particle, last),
            Surname::Single(token) => write!(f, "{}", token),
        }
    }
}

/// Picks the surname out of a full name.
///
/// The name is split on any Unicode whitespace, so a no-break space
/// separates tokens like a plain space does. Scanning from the end, the first
/// surname particle that still has a token after it wins, and is paired
/// with the last token of the name. Without a particle the last token is
/// used, unless it is a generational suffix ("Jr.", "III", ...) in a name
/// of more than two tokens, in which case the token before it is used with
/// commas removed.
///
/// Returns `None` when the name has no tokens.
pub fn extract_surname(name: &str) -> Option<Surname<'_>> {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    let last = *tokens.last()?;

    if tokens.len() > 1 {
        let particle = tokens
            .iter()
            .enumerate()
            .rev()
            .find(|&(i, token)| i + 1 < tokens.len() && is_surname_particle(token))
            .map(|(_, token)| *token);
        if let Some(particle) = particle {
            return Some(Surname::Prefixed { particle, last });
        }
    }

    if tokens.len() > 2 && is_generational_suffix(last) {
        let before_suffix = tokens[tokens.len() - 2];
        let surname = if before_suffix.contains(',') {
            Cow::Owned(before_suffix.replace(',', ""))
        } else {
            Cow::Borrowed(before_suffix)
        };
        return Some(Surname::Single(surname));
    }

    Some(Surname::Single(Cow::Borrowed(last)))
}

/// Lowercase surname key for `name`, or an empty string when the name has
/// no tokens.
pub fn extract_surname_key(name: &str) -> String {
    extract_surname(name)
        .map(|surname| surname.key())
        .unwrap_or_default()
}
