//! Validation type for single checks
//!
//! Every primitive check first produces a [`Validation`]: either the
//! normalized value or the error it found. The accumulator then folds that
//! outcome in under a field key with
//! [`Accumulator::record`](crate::Accumulator::record). At the end of a
//! pipeline the accumulator converts back into a `Validation` holding either
//! all values or all field errors.
//!
//! # Examples
//!
//! ```
//! use meridian::Validation;
//!
//! let ok = Validation::<_, Vec<&str>>::success(42);
//! let bad = Validation::<i32, _>::failure(vec!["not a number"]);
//!
//! assert_eq!(ok.into_result(), Ok(42));
//! assert!(bad.is_failure());
//! ```
//!
//! ## Accumulating errors
//!
//! ```
//! use meridian::Validation;
//!
//! let v1 = Validation::<i32, _>::failure(vec!["month out of range"]);
//! let v2 = Validation::<i32, _>::failure(vec!["day out of range"]);
//!
//! assert_eq!(
//!     Validation::all_vec([v1, v2]),
//!     Validation::Failure(vec!["month out of range", "day out of range"])
//! );
//! ```

use crate::predicate::Predicate;
use crate::Semigroup;

/// A validation that either succeeds with a value or fails with an error
///
/// Unlike `Result`, combining two failed validations with [`and`](Self::and)
/// keeps both errors when `E` is a [`Semigroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// ```
    /// use meridian::Validation;
    ///
    /// let v = Validation::from_result("12".parse::<i64>().map_err(|_| "not a number"));
    /// assert_eq!(v, Validation::Success(12));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Chain a dependent check
    ///
    /// The function only runs on success, so a later check never sees a value
    /// an earlier one rejected.
    ///
    /// ```
    /// use meridian::Validation;
    ///
    /// let month = Validation::<_, &str>::success(13)
    ///     .and_then(|m| match m {
    ///         1..=12 => Validation::success(m),
    ///         _ => Validation::failure("bad month"),
    ///     });
    /// assert_eq!(month, Validation::Failure("bad month"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Keep the value only if it satisfies `predicate`, failing with `error`
    /// otherwise.
    ///
    /// ```
    /// use meridian::{Validation, predicate::len_max};
    ///
    /// let v = Validation::<_, &str>::success(String::from("astronomer"))
    ///     .ensure(len_max(8), "too long");
    /// assert_eq!(v, Validation::Failure("too long"));
    /// ```
    #[inline]
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: Predicate<T>,
    {
        self.ensure_with(predicate, |_| error)
    }

    /// Like [`ensure`](Self::ensure), building the error from the rejected
    /// value.
    #[inline]
    pub fn ensure_with<P, F>(self, predicate: P, error_fn: F) -> Self
    where
        P: Predicate<T>,
        F: FnOnce(&T) -> E,
    {
        match self {
            Validation::Success(value) if predicate.check(&value) => Validation::Success(value),
            Validation::Success(value) => Validation::Failure(error_fn(&value)),
            failure => failure,
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine every validation in an iterator
    ///
    /// Succeeds with all values when nothing failed; otherwise fails with every
    /// error, in input order.
    ///
    /// ```
    /// use meridian::Validation;
    ///
    /// let checks = vec![
    ///     Validation::<_, Vec<&str>>::success(1),
    ///     Validation::failure(vec!["'9' is not offered"]),
    ///     Validation::failure(vec!["'x' is not offered"]),
    /// ];
    /// assert_eq!(
    ///     Validation::all_vec(checks),
    ///     Validation::Failure(vec!["'9' is not offered", "'x' is not offered"])
    /// );
    /// ```
    pub fn all_vec<I>(validations: I) -> Validation<Vec<T>, E>
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        let mut successes = Vec::new();
        let mut failure: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failure = Some(match failure {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failure {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}
