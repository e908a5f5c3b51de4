pub mod date_format;
pub mod date_pattern;

pub use date_format::DateFormat;
pub use date_pattern::{DATE_PATTERN_PRIORITY, DatePattern, PatternGroup};

#[derive(Debug, Clone, PartialEq)]
pub enum CoreTypeError {
    ConversionError(String),
}

impl std::fmt::Display for CoreTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreTypeError::ConversionError(msg) => write!(f, "Conversion Error: {}", msg),
        }
    }
}

impl std::error::Error for CoreTypeError {}
