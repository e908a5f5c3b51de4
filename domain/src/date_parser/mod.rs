//! Lenient parsing of user-entered dates and their display formatting.

mod format;
mod parser;

pub use format::format_date;
pub use parser::{
    FlexibleDate, parse_flexible_date, parse_flexible_date_detailed, parse_with_pattern, year_of,
};
