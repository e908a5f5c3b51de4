//! Surname extraction and credit-list sorting.

mod extractor;
mod particles;
mod sort;

pub use extractor::{Surname, extract_surname, extract_surname_key};
pub use particles::{GENERATIONAL_SUFFIXES, SURNAME_PARTICLES};
pub use sort::{last_name_sort_key, sort_by_last_name, sort_by_last_name_in_place};
