//! Array helpers: deduplication, one-level flattening and chunking.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{Error, Result};

/// Remove repeated elements, keeping the first occurrence of each.
///
/// # Examples
///
/// ```
/// use utilkit::array::remove_duplicates;
///
/// assert_eq!(remove_duplicates(&[1, 2, 2, 3, 3, 3]), vec![1, 2, 3]);
/// assert_eq!(remove_duplicates(&["b", "a", "b"]), vec!["b", "a"]);
/// ```
pub fn remove_duplicates<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Flatten exactly one level of nesting.
///
/// Works on owned vectors as well as borrowed slices (yielding references).
///
/// # Examples
///
/// ```
/// use utilkit::array::flatten_array;
///
/// assert_eq!(flatten_array(vec![vec![1], vec![2, 3], vec![4]]), vec![1, 2, 3, 4]);
///
/// let nested = vec![vec![vec![1]], vec![vec![2, 3]]];
/// assert_eq!(flatten_array(nested), vec![vec![1], vec![2, 3]]);
/// ```
pub fn flatten_array<I, T>(nested: I) -> Vec<T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    nested.into_iter().flatten().collect()
}

/// Split a slice into consecutive chunks of `size` elements.
///
/// The last chunk holds the remainder and may be shorter. An empty slice
/// yields no chunks. A `size` of zero is rejected.
///
/// # Examples
///
/// ```
/// use utilkit::array::chunk_array;
///
/// let chunks = chunk_array(&[1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn chunk_array<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(Error::InvalidChunkSize);
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}
