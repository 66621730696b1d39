//! Placeholder validation for translatable text.
//!
//! Two placeholder forms are recognized:
//! - numeric `%N` (N = a run of ASCII digits), substituted positionally from
//!   the runtime arguments at format time
//! - macro `%{Name}`, resolved elsewhere and never consuming an argument
//!
//! Any other `%` is plain text.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(?:\{[^}]+\}|(\d+))").unwrap());

/// Distinct numeric placeholder indices in `text`.
///
/// Returns `None` if an index does not fit in `usize`.
pub fn numeric_placeholders(text: &str) -> Option<BTreeSet<usize>> {
    let mut indices = BTreeSet::new();
    for caps in PLACEHOLDER_REGEX.captures_iter(text) {
        if let Some(digits) = caps.get(1) {
            indices.insert(digits.as_str().parse::<usize>().ok()?);
        }
    }
    Some(indices)
}

/// Check that the numeric placeholders of `text` match the runtime arguments.
///
/// With no arguments the text must have no numeric placeholders. With `N`
/// arguments the distinct indices must be exactly `{1, ..., N}`: every
/// argument referenced at least once and nothing outside that range.
pub fn validate_placeholders<T>(args: Option<&[T]>, text: &str) -> bool {
    let expected = args.map_or(0, <[T]>::len);
    numeric_placeholders(text).is_some_and(|indices| is_exact_range(&indices, expected))
}

/// Plural variant of [`validate_placeholders`].
///
/// The plural factor is an implicit first argument (`%1`), so the runtime
/// arguments occupy `%2..=%(N+1)`. Forms are checked together: the union of
/// their indices must be exactly `{1, ..., N+1}`, which lets the singular
/// form leave out the count.
pub fn validate_plural_placeholders<T>(args: Option<&[T]>, forms: &[String]) -> bool {
    let expected = 1 + args.map_or(0, <[T]>::len);
    let mut union = BTreeSet::new();
    for form in forms {
        match numeric_placeholders(form) {
            Some(indices) => union.extend(indices),
            None => return false,
        }
    }
    is_exact_range(&union, expected)
}

fn is_exact_range(indices: &BTreeSet<usize>, n: usize) -> bool {
    indices.len() == n && indices.iter().all(|&i| (1..=n).contains(&i))
}
