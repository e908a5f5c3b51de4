pub mod date_parser;
pub mod name_normalizer;
pub mod surname;

pub use date_parser::{
    FlexibleDate, format_date, parse_flexible_date, parse_flexible_date_detailed,
    parse_with_pattern, year_of,
};
pub use name_normalizer::{NameNormalizer, normalize, sort_by_neutral};
pub use surname::{
    Surname, extract_surname, extract_surname_key, sort_by_last_name, sort_by_last_name_in_place,
};
