//! Collection-wide uniqueness checks.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use super::ModelError;

/// Fail if `extract` yields the same value for two members of `items`.
///
/// The error lists every repeated value once, in order of first repetition.
pub fn validate_unique<T, V, F>(
    collection: &'static str,
    field: &'static str,
    items: &[T],
    extract: F,
) -> Result<(), ModelError>
where
    F: Fn(&T) -> V,
    V: Eq + Hash + Display,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for value in items.iter().map(extract) {
        if seen.contains(&value) {
            if !reported.contains(&value) {
                duplicates.push(value.to_string());
                reported.insert(value);
            }
        } else {
            seen.insert(value);
        }
    }

    if duplicates.is_empty() {
        return Ok(());
    }
    Err(ModelError::DuplicateValue {
        collection,
        field,
        values: duplicates,
    })
}
