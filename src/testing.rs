//! Testing utilities for validation pipelines
//!
//! Assertion macros that read like the questions a form test asks ("is this
//! field clean?", "what did it store?"), plus proptest strategies for form
//! input behind the `proptest` feature.
//!
//! # Example
//!
//! ```rust
//! use meridian::{assert_field_error, assert_field_value, assert_no_errors};
//! use meridian::{Accumulator, FieldError, Value};
//! use meridian::primitive::{validate_integer, validate_month, Bounds};
//!
//! let acc = validate_integer(Accumulator::new(), &Value::from("3"), "nights");
//! assert_no_errors!(acc);
//! assert_field_value!(acc, "nights", Value::Int(3));
//!
//! let acc = validate_month(acc, &Value::from("0"), "month", Bounds::default());
//! assert_field_error!(acc, "month");
//! assert_field_error!(acc, "month", FieldError::OutOfRange { min: 1, max: 12 });
//! ```

/// Assert that an accumulator holds no errors at all.
///
/// On failure the panic message lists every field in error.
#[macro_export]
macro_rules! assert_no_errors {
    ($acc:expr) => {{
        let acc: &$crate::Accumulator = &$acc;
        if acc.has_errors() {
            panic!("Expected no errors, got: {:?}", acc.errors());
        }
    }};
}

/// Assert that a field is in error, optionally with a specific error.
///
/// With an expected error, the field's list must contain it.
#[macro_export]
macro_rules! assert_field_error {
    ($acc:expr, $key:expr) => {{
        let acc: &$crate::Accumulator = &$acc;
        if !acc.has_field_errors($key) {
            panic!(
                "Expected errors under {:?}, field is clean (value: {:?})",
                $key,
                acc.field_value($key)
            );
        }
    }};
    ($acc:expr, $key:expr, $expected:expr) => {{
        let acc: &$crate::Accumulator = &$acc;
        let expected: $crate::FieldError = $expected.into();
        if !acc.field_errors($key).contains(&expected) {
            panic!(
                "Expected {:?} under {:?}, got: {:?}",
                expected,
                $key,
                acc.field_errors($key)
            );
        }
    }};
}

/// Assert the value stored under a field.
#[macro_export]
macro_rules! assert_field_value {
    ($acc:expr, $key:expr, $expected:expr) => {{
        let acc: &$crate::Accumulator = &$acc;
        let expected: $crate::Value = $expected.into();
        match acc.field_value($key) {
            Some(actual) => assert_eq!(actual, &expected, "value under {:?}", $key),
            None => panic!(
                "Expected {:?} under {:?}, nothing stored (errors: {:?})",
                expected,
                $key,
                acc.field_errors($key)
            ),
        }
    }};
}

/// Assert that a validation succeeds.
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Proptest strategies for form input.
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::prelude::*;

    use crate::{Validation, Value};

    /// An integer as a form would submit it: bare, signed, padded, or
    /// wrapped in whitespace.
    pub fn integer_text(
        range: std::ops::RangeInclusive<i64>,
    ) -> impl Strategy<Value = (i64, Value)> {
        (range, 0usize..4).prop_map(|(n, style)| {
            let raw = match style {
                0 => n.to_string(),
                1 if n >= 0 => format!("+{}", n),
                2 => format!(" {}\t", n),
                3 if n >= 0 => format!("00{}", n),
                _ => n.to_string(),
            };
            (n, Value::Text(raw))
        })
    }

    /// Text that is never integer-coercible.
    pub fn non_integer_text() -> impl Strategy<Value = Value> {
        "[a-zA-Z ._-]{0,12}".prop_map(Value::Text)
    }

    /// Year, month, day triples that exist in the calendar.
    pub fn calendar_date() -> impl Strategy<Value = (i32, u32, u32)> {
        (1970i32..=2100, 1u32..=12, 1u32..=28)
    }

    /// Bounds drawn well outside any component domain.
    pub fn wild_bounds() -> impl Strategy<Value = crate::primitive::Bounds> {
        (
            proptest::option::of(-100_000i64..100_000),
            proptest::option::of(-100_000i64..100_000),
        )
            .prop_map(|(min, max)| crate::primitive::Bounds { min, max })
    }

    impl<T, E> Arbitrary for Validation<T, E>
    where
        T: Arbitrary + 'static,
        E: Arbitrary + 'static,
    {
        type Parameters = (T::Parameters, E::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (t_params, e_params) = args;
            prop_oneof![
                any_with::<T>(t_params).prop_map(Validation::success),
                any_with::<E>(e_params).prop_map(Validation::failure),
            ]
            .boxed()
        }
    }
}
