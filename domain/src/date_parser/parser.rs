use std::fmt;

use chrono::{
    Datelike, NaiveDate,
    format::{Parsed, StrftimeItems, parse},
};
use core_types::{DATE_PATTERN_PRIORITY, DatePattern, PatternGroup};
use tracing::trace;

/// A parsed date together with the pattern that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexibleDate {
    pub pattern: DatePattern,
    pub date: NaiveDate,
}

impl fmt::Display for FlexibleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.date, self.pattern)
    }
}

/// Parses `input` against a single pattern. The whole input must match.
///
/// Separators must be exactly those of the pattern: no surrounding
/// whitespace, no extra spaces. The year-only pattern requires exactly four
/// digits. Missing month or day default to 1. Two-digit years resolve into
/// 1970..=2069.
pub fn parse_with_pattern(input: &str, pattern: DatePattern) -> Option<NaiveDate> {
    if !separators_match(input, pattern) {
        return None;
    }
    if pattern.group() == PatternGroup::YearOnly && input.len() != 4 {
        return None;
    }

    let mut parsed = Parsed::new();
    parse(&mut parsed, input, StrftimeItems::new(pattern.strftime())).ok()?;

    match pattern.group() {
        PatternGroup::YearOnly => {
            parsed.set_month(1).ok()?;
            parsed.set_day(1).ok()?;
        }
        PatternGroup::YearMonth => {
            parsed.set_day(1).ok()?;
        }
        PatternGroup::FullDate => {}
    }

    parsed.to_naive_date().ok()
}

/// Non-digit characters of the input must equal the non-field characters
/// of the pattern, in order.
fn separators_match(input: &str, pattern: DatePattern) -> bool {
    let pattern = pattern.to_string();
    input
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .eq(pattern.chars().filter(|c| !c.is_ascii_alphabetic()))
}

/// Tries every pattern in [`DATE_PATTERN_PRIORITY`] and returns the first
/// match.
pub fn parse_flexible_date_detailed(input: &str) -> Option<FlexibleDate> {
    DATE_PATTERN_PRIORITY.iter().find_map(|&pattern| {
        let date = parse_with_pattern(input, pattern);
        trace!(%pattern, matched = date.is_some(), "Tried date pattern");
        date.map(|date| FlexibleDate { pattern, date })
    })
}

/// Parses a date written in any of the supported patterns, preferring year
/// only, then year and month, then full dates.
///
/// ```
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     domain::parse_flexible_date("03/04/2020"),
///     NaiveDate::from_ymd_opt(2020, 3, 4)
/// );
/// assert_eq!(domain::parse_flexible_date("not a date"), None);
/// ```
pub fn parse_flexible_date(input: &str) -> Option<NaiveDate> {
    parse_flexible_date_detailed(input).map(|parsed| parsed.date)
}

pub fn year_of(input: &str) -> Option<i32> {
    parse_flexible_date(input).map(|date| date.year())
}
