/// Pluralizes `text` unless `count` is exactly one.
///
/// `unique` replaces the text entirely for irregular plurals, otherwise
/// "es" or "s" is appended.
///
/// ```
/// use utils::text::plural;
///
/// assert_eq!(plural("3 pizza", 3, false, None), "3 pizzas");
/// assert_eq!(plural("4 sandwich", 4, true, None), "4 sandwiches");
/// assert_eq!(plural("67 person", 67, false, Some("67 people")), "67 people");
/// ```
pub fn plural(text: &str, count: i64, es: bool, unique: Option<&str>) -> String {
    if count == 1 {
        return text.to_string();
    }
    if let Some(unique) = unique {
        return unique.to_string();
    }
    if es {
        format!("{text}es")
    } else {
        format!("{text}s")
    }
}
