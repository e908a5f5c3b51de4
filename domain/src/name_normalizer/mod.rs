mod normalizer;
mod rules;

pub use normalizer::{NameNormalizer, normalize, sort_by_neutral};
pub use rules::articles::LEADING_ARTICLES;
