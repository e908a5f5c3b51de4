use tracing::debug;

use crate::{name_normalizer::normalize, surname::extract_surname_key};

/// Sort key for a full name: the surname of its normalized form.
pub fn last_name_sort_key(name: &str) -> String {
    extract_surname_key(&normalize(name))
}

/// Returns `names` ordered by surname.
///
/// Names with the same surname key keep the order they had in the input.
///
/// ```
/// let credits = ["Robert De Niro", "Joe Pesci", "Ray Liotta", "Frank Vincent"];
/// assert_eq!(
///     domain::sort_by_last_name(&credits),
///     vec!["Robert De Niro", "Ray Liotta", "Joe Pesci", "Frank Vincent"]
/// );
/// ```
pub fn sort_by_last_name<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
    sort_by_last_name_in_place(&mut sorted);
    sorted
}

pub fn sort_by_last_name_in_place<S: AsRef<str>>(names: &mut [S]) {
    // Stable: equal keys keep input order.
    names.sort_by_cached_key(|name| last_name_sort_key(name.as_ref()));
    debug!(count = names.len(), "Sorted names by last name");
}
