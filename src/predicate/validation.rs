//! Validation integration for predicates

use super::combinators::Predicate;
use crate::Validation;

/// Validate a value using a predicate.
///
/// Returns `Validation::success(value)` if the predicate is satisfied,
/// otherwise returns `Validation::failure(error)`.
///
/// # Example
///
/// ```rust
/// use meridian::{Validation, predicate::*};
///
/// let result = validate(7_i64, between(1, 12), "bad month");
/// assert_eq!(result, Validation::success(7));
///
/// let result = validate(13_i64, between(1, 12), "bad month");
/// assert_eq!(result, Validation::failure("bad month"));
/// ```
pub fn validate<T, E, P>(value: T, predicate: P, error: E) -> Validation<T, E>
where
    P: Predicate<T>,
{
    if predicate.check(&value) {
        Validation::success(value)
    } else {
        Validation::failure(error)
    }
}

/// Validate a value with an error factory.
///
/// Like `validate`, but the error is built from the rejected value, which is
/// how messages such as "'/bin/fish' is not an allowed value" echo the input.
pub fn validate_with<T, E, P, F>(value: T, predicate: P, error_fn: F) -> Validation<T, E>
where
    P: Predicate<T>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(&value) {
        Validation::success(value)
    } else {
        Validation::failure(error_fn(&value))
    }
}
