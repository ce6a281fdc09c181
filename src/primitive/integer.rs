//! Integer checks

use crate::predicate::{between, Between};
use crate::{Accumulator, FieldError, Validation, Value};

fn integer(value: &Value) -> Validation<i64, FieldError> {
    Validation::from_result(value.as_integer().ok_or(FieldError::NotInteger))
}

/// Coerce to an integer and require it to fall in `range`.
///
/// Reports the type error alone when the value is not an integer at all.
pub(crate) fn integer_in(value: &Value, range: Between<i64>) -> Validation<i64, FieldError> {
    integer(value).ensure(
        range,
        FieldError::OutOfRange {
            min: range.min(),
            max: range.max(),
        },
    )
}

/// Require an integer-coercible value and store it as [`Value::Int`].
///
/// ```
/// use meridian::{Accumulator, Value};
/// use meridian::primitive::validate_integer;
///
/// let acc = validate_integer(Accumulator::new(), &Value::from(" 42 "), "nights");
/// assert_eq!(acc.field_value("nights"), Some(&Value::Int(42)));
///
/// let acc = validate_integer(acc, &Value::from("four"), "hours");
/// assert_eq!(acc.messages("hours"), vec!["Must be a whole number"]);
/// ```
pub fn validate_integer(acc: Accumulator, value: &Value, key: &str) -> Accumulator {
    acc.record(key, integer(value).map(Value::Int))
}

/// Require an integer in `[min, max]`.
pub fn validate_integer_range(
    acc: Accumulator,
    value: &Value,
    key: &str,
    min: i64,
    max: i64,
) -> Accumulator {
    acc.record(key, integer_in(value, between(min, max)).map(Value::Int))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_stores_cast_value() {
        let acc = validate_integer(Accumulator::new(), &Value::from("-12"), "offset");
        assert_eq!(acc.field_value("offset"), Some(&Value::Int(-12)));
        assert!(!acc.has_errors());
    }

    #[test]
    fn integer_rejects_fractions() {
        let acc = validate_integer(Accumulator::new(), &Value::from("2.5"), "nights");
        assert_eq!(acc.field_errors("nights"), &[FieldError::NotInteger]);
        assert_eq!(acc.field_value("nights"), None);
    }

    #[test]
    fn range_accepts_bounds_inclusive() {
        let acc = validate_integer_range(Accumulator::new(), &Value::from(1), "a", 1, 3);
        let acc = validate_integer_range(acc, &Value::from(3), "b", 1, 3);
        assert!(!acc.has_errors());
    }

    #[test]
    fn range_reports_bounds() {
        let acc = validate_integer_range(Accumulator::new(), &Value::from(4), "n", 1, 3);
        assert_eq!(
            acc.field_errors("n"),
            &[FieldError::OutOfRange { min: 1, max: 3 }]
        );
    }

    #[test]
    fn range_reports_only_type_error_for_garbage() {
        let acc = validate_integer_range(Accumulator::new(), &Value::from("x"), "n", 1, 3);
        assert_eq!(acc.field_errors("n"), &[FieldError::NotInteger]);
    }
}
