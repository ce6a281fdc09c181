//! Predicate combinators for composable checks
//!
//! Primitive validators are written as predicates plus an error: a month is
//! `between(1, 12)`, a session code is `len_eq(10)` followed by
//! `not_empty().and(is_ascii_alphanumeric())`. Predicates combine with `and`
//! and plug into [`Validation`](crate::Validation) through [`validate`],
//! [`validate_with`] and `Validation::ensure`.
//!
//! # Example
//!
//! ```rust
//! use meridian::{Validation, predicate::*};
//!
//! let night_hour = between(0, 23).and(|h: &i64| *h >= 19 || *h < 6);
//! assert!(night_hour.check(&20));
//! assert!(!night_hour.check(&9));
//!
//! let result = Validation::<_, &str>::success(String::from("2024A"))
//!     .ensure(len_eq(5), "must be 5 characters");
//! assert_eq!(result, Validation::success(String::from("2024A")));
//! ```

mod combinators;
mod number;
mod string;
mod validation;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::And;

// Re-export string predicates
pub use string::{
    all_chars, is_ascii_alphanumeric, is_email, len_eq, len_max, not_empty, one_of,
    one_of_ignore_case, AllChars, IsEmail, LenBetween, NotEmpty, OneOf,
};

// Re-export number predicates
pub use number::{between, Between};

// Re-export validation integration
pub use validation::{validate, validate_with};
