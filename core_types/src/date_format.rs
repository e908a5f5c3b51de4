use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::CoreTypeError;

/// Display styles for a calendar date.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DateFormat {
    /// Full month name with day and year, e.g. "March 4, 2020".
    #[default]
    #[strum(serialize = "full")]
    Full,
    /// Abbreviated month name with day and year, e.g. "Mar. 4, 2020".
    #[strum(serialize = "short")]
    Short,
    /// Full month name with year, e.g. "March 2020".
    #[strum(serialize = "month-year")]
    MonthYear,
    /// Abbreviated month name with year, e.g. "Mar. 2020".
    #[strum(serialize = "short-month-year")]
    ShortMonthYear,
    #[strum(serialize = "year")]
    Year,
}

impl DateFormat {
    pub fn strftime(&self) -> &'static str {
        match self {
            DateFormat::Full => "%B %-d, %Y",
            DateFormat::Short => "%b. %-d, %Y",
            DateFormat::MonthYear => "%B %Y",
            DateFormat::ShortMonthYear => "%b. %Y",
            DateFormat::Year => "%Y",
        }
    }
}

impl TryFrom<&str> for DateFormat {
    type Error = CoreTypeError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        DateFormat::iter()
            .find(|format| format.to_string().eq_ignore_ascii_case(value))
            .ok_or_else(|| {
                CoreTypeError::ConversionError(format!("Unknown date format '{}'", value))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_format_from_str() {
        for format in DateFormat::iter() {
            let name = format.to_string();
            assert_eq!(DateFormat::try_from(name.as_str()).unwrap(), format);
        }
        assert_eq!(DateFormat::try_from("Month-Year").unwrap(), DateFormat::MonthYear);
        assert!(DateFormat::try_from("iso").is_err());
    }

    #[test]
    fn test_default_is_full() {
        assert_eq!(DateFormat::default(), DateFormat::Full);
    }
}
