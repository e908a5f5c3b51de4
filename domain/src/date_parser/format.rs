use chrono::NaiveDate;
use core_types::DateFormat;

pub fn format_date(date: &NaiveDate, format: DateFormat) -> String {
    date.format(format.strftime()).to_string()
}
