use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::CoreTypeError;

/// Which date components a pattern carries. Components a pattern does not
/// carry default to the first month and/or the first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternGroup {
    YearOnly,
    YearMonth,
    FullDate,
}

/// A textual date pattern, displayed using the familiar `MM/dd/yyyy`
/// notation.
///
/// Variants are declared in parsing priority order, so iterating with
/// `DatePattern::iter()` yields the same order as [`DATE_PATTERN_PRIORITY`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub enum DatePattern {
    #[strum(serialize = "yyyy")]
    Year,
    #[strum(serialize = "MM/yy")]
    MonthShortYear,
    #[strum(serialize = "MM/yyyy")]
    MonthYear,
    #[strum(serialize = "yy/MM")]
    ShortYearMonth,
    #[strum(serialize = "yyyy/MM")]
    YearMonth,
    #[strum(serialize = "MMddyy")]
    CompactMonthDayShortYear,
    #[strum(serialize = "MM/dd/yy")]
    MonthDayShortYear,
    #[strum(serialize = "MMddyyyy")]
    CompactMonthDayYear,
    #[strum(serialize = "MM dd yyyy")]
    SpacedMonthDayYear,
    #[strum(serialize = "MM dd, yyyy")]
    SpacedMonthDayCommaYear,
    #[strum(serialize = "MM/dd/yyyy")]
    MonthDayYear,
    #[strum(serialize = "dd MM yyyy")]
    SpacedDayMonthYear,
    #[strum(serialize = "yyyyMMdd")]
    CompactYearMonthDay,
    #[strum(serialize = "yyyy/MM/dd")]
    YearMonthDay,
}

/// Patterns in the order they are attempted: year only, then year and
/// month, then full dates. The first pattern that consumes the whole input
/// wins.
pub const DATE_PATTERN_PRIORITY: &[DatePattern] = &[
    DatePattern::Year,
    DatePattern::MonthShortYear,
    DatePattern::MonthYear,
    DatePattern::ShortYearMonth,
    DatePattern::YearMonth,
    DatePattern::CompactMonthDayShortYear,
    DatePattern::MonthDayShortYear,
    DatePattern::CompactMonthDayYear,
    DatePattern::SpacedMonthDayYear,
    DatePattern::SpacedMonthDayCommaYear,
    DatePattern::MonthDayYear,
    DatePattern::SpacedDayMonthYear,
    DatePattern::CompactYearMonthDay,
    DatePattern::YearMonthDay,
];

impl DatePattern {
    /// The equivalent `chrono` strftime format.
    pub fn strftime(&self) -> &'static str {
        match self {
            DatePattern::Year => "%Y",
            DatePattern::MonthShortYear => "%m/%y",
            DatePattern::MonthYear => "%m/%Y",
            DatePattern::ShortYearMonth => "%y/%m",
            DatePattern::YearMonth => "%Y/%m",
            DatePattern::CompactMonthDayShortYear => "%m%d%y",
            DatePattern::MonthDayShortYear => "%m/%d/%y",
            DatePattern::CompactMonthDayYear => "%m%d%Y",
            DatePattern::SpacedMonthDayYear => "%m %d %Y",
            DatePattern::SpacedMonthDayCommaYear => "%m %d, %Y",
            DatePattern::MonthDayYear => "%m/%d/%Y",
            DatePattern::SpacedDayMonthYear => "%d %m %Y",
            DatePattern::CompactYearMonthDay => "%Y%m%d",
            DatePattern::YearMonthDay => "%Y/%m/%d",
        }
    }

    pub fn group(&self) -> PatternGroup {
        match self {
            DatePattern::Year => PatternGroup::YearOnly,
            DatePattern::MonthShortYear
            | DatePattern::MonthYear
            | DatePattern::ShortYearMonth
            | DatePattern::YearMonth => PatternGroup::YearMonth,
            _ => PatternGroup::FullDate,
        }
    }
}

impl From<DatePattern> for String {
    fn from(value: DatePattern) -> Self {
        value.to_string()
    }
}

impl TryFrom<&str> for DatePattern {
    type Error = CoreTypeError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        DatePattern::iter()
            .find(|pattern| pattern.to_string() == value)
            .ok_or_else(|| {
                CoreTypeError::ConversionError(format!("Unknown date pattern '{}'", value))
            })
    }
}

impl TryFrom<String> for DatePattern {
    type Error = CoreTypeError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        DatePattern::try_from(value.as_str())
    }
}
