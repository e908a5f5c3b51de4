/// Splits `items` into consecutive chunks of `size`; the last chunk may be
/// shorter. A `size` of zero yields no chunks.
pub fn chunked<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).map(|chunk| chunk.to_vec()).collect()
}

/// Removes repeated elements, keeping the first occurrence of each.
///
/// Only needs `PartialEq`, so this is quadratic.
pub fn unique<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut result: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !result.contains(item) {
            result.push(item.clone());
        }
    }
    result
}
