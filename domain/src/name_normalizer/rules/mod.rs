pub mod articles;
pub mod diacritics;
pub mod quotes;
