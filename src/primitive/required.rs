use crate::predicate::validate;
use crate::{Accumulator, FieldError, Value};

/// Check that a mandatory field was filled in.
///
/// The original value is stored unchanged, including an empty one when the
/// field is optional, so later checks can still look at it.
///
/// ```
/// use meridian::{Accumulator, Value};
/// use meridian::primitive::validate_required;
///
/// let acc = validate_required(Accumulator::new(), &Value::from("  "), "title", true);
/// assert_eq!(acc.messages("title"), vec!["This field is required"]);
///
/// let acc = validate_required(Accumulator::new(), &Value::from(0), "count", true);
/// assert!(!acc.has_errors());
/// ```
pub fn validate_required(
    acc: Accumulator,
    value: &Value,
    key: &str,
    required: bool,
) -> Accumulator {
    let filled_in = move |v: &Value| !required || !v.is_blank();
    acc.record(key, validate(value.clone(), filled_in, FieldError::Required))
}
