//! Pure predicates used with [`Validator::check`](super::Validator::check).

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::hash::Hash;

/// Shape check for `local-part@domain` email addresses.
///
/// Domain labels are 1-63 alphanumerics or hyphens and may not start or end
/// with a hyphen.
pub static EMAIL_RX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern must compile")
});

/// Returns true if `value` equals one of `permitted`.
pub fn permitted_value<T: PartialEq>(value: &T, permitted: &[T]) -> bool {
    permitted.iter().any(|p| p == value)
}

/// Returns true if `rx` matches `value`.
pub fn matches(value: &str, rx: &Regex) -> bool {
    rx.is_match(value)
}

/// Returns true if no two elements of `values` are equal.
///
/// Compares every element with each one before it. Use [`unique_hashed`]
/// for long sequences of hashable values.
pub fn unique<T: PartialEq>(values: &[T]) -> bool {
    values
        .iter()
        .enumerate()
        .all(|(i, v)| !values[..i].contains(v))
}

/// Same as [`unique`], in a single pass over a `HashSet`.
pub fn unique_hashed<T: Eq + Hash>(values: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().all(|v| seen.insert(v))
}
