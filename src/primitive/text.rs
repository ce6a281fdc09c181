//! Text checks

use crate::predicate::{is_ascii_alphanumeric, is_email, len_max, not_empty, one_of};
use crate::{Accumulator, FieldError, Validation, Value};

/// Cast to a string, failing for lists and records.
pub(crate) fn text(value: &Value) -> Validation<String, FieldError> {
    Validation::from_result(
        value
            .as_text()
            .map(|s| s.into_owned())
            .ok_or(FieldError::NotText),
    )
}

/// Require at most `max` characters.
///
/// There is no lower limit; combine with
/// [`validate_required`](super::validate_required) to reject empty input.
///
/// ```
/// use meridian::{Accumulator, Value};
/// use meridian::primitive::validate_string_length;
///
/// let acc = validate_string_length(Accumulator::new(), &Value::from("Subaru"), "site", 5);
/// assert_eq!(acc.messages("site"), vec!["Must be 1-5 characters"]);
/// ```
pub fn validate_string_length(
    acc: Accumulator,
    value: &Value,
    key: &str,
    max: usize,
) -> Accumulator {
    let outcome = text(value).ensure(len_max(max), FieldError::TooLong { max });
    acc.record(key, outcome.map(Value::Text))
}

/// Require a syntactically valid e-mail address.
pub fn validate_email_format(acc: Accumulator, value: &Value, key: &str) -> Accumulator {
    let outcome = text(value).ensure(is_email(), FieldError::InvalidEmail);
    acc.record(key, outcome.map(Value::Text))
}

/// Require an exact, case-sensitive member of `allowed`.
pub fn validate_string_in_set<S>(
    acc: Accumulator,
    value: &Value,
    key: &str,
    allowed: &[S],
) -> Accumulator
where
    S: AsRef<str> + Sync,
{
    let outcome = text(value).ensure_with(one_of(allowed), |rejected| FieldError::NotInSet {
        value: rejected.clone(),
    });
    acc.record(key, outcome.map(Value::Text))
}

/// Require one or more ASCII letters or digits and nothing else.
pub fn validate_alphanumeric(acc: Accumulator, value: &Value, key: &str) -> Accumulator {
    let outcome = text(value)
        .ensure(not_empty(), FieldError::NotAlphanumeric)
        .ensure(is_ascii_alphanumeric(), FieldError::NotAlphanumeric);
    acc.record(key, outcome.map(Value::Text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_upper_bound_only() {
        let acc = validate_string_length(Accumulator::new(), &Value::from(""), "empty", 3);
        let acc = validate_string_length(acc, &Value::from("abc"), "full", 3);
        let acc = validate_string_length(acc, &Value::from("abcd"), "over", 3);
        assert!(!acc.has_field_errors("empty"));
        assert_eq!(acc.field_value("full"), Some(&Value::from("abc")));
        assert_eq!(acc.field_errors("over"), &[FieldError::TooLong { max: 3 }]);
    }

    #[test]
    fn length_casts_numbers() {
        let acc = validate_string_length(Accumulator::new(), &Value::from(12345), "code", 5);
        assert_eq!(acc.field_value("code"), Some(&Value::from("12345")));
    }

    #[test]
    fn length_rejects_lists() {
        let acc = validate_string_length(Accumulator::new(), &Value::from(vec!["a"]), "k", 5);
        assert_eq!(acc.field_errors("k"), &[FieldError::NotText]);
    }

    #[test]
    fn email_format() {
        let acc = validate_email_format(Accumulator::new(), &Value::from("pi@obs.example"), "a");
        let acc = validate_email_format(acc, &Value::from("pi at obs"), "b");
        assert!(!acc.has_field_errors("a"));
        assert_eq!(acc.messages("b"), vec!["Must be a valid email address"]);
    }

    #[test]
    fn set_membership_echoes_value() {
        let shells = ["/bin/bash", "/bin/tcsh"];
        let acc =
            validate_string_in_set(Accumulator::new(), &Value::from("/bin/bash"), "a", &shells);
        let acc = validate_string_in_set(acc, &Value::from("/bin/fish"), "b", &shells);
        assert_eq!(acc.field_value("a"), Some(&Value::from("/bin/bash")));
        assert_eq!(acc.messages("b"), vec!["'/bin/fish' is not an allowed value"]);
    }

    #[test]
    fn set_membership_is_case_sensitive() {
        let acc = validate_string_in_set(Accumulator::new(), &Value::from("A"), "k", &["a"]);
        assert!(acc.has_field_errors("k"));
    }

    #[test]
    fn alphanumeric_rules() {
        let acc = validate_alphanumeric(Accumulator::new(), &Value::from("guest42"), "ok");
        let acc = validate_alphanumeric(acc, &Value::from(""), "empty");
        let acc = validate_alphanumeric(acc, &Value::from("guest_42"), "punct");
        let acc = validate_alphanumeric(acc, &Value::from("gäst"), "accent");
        assert!(!acc.has_field_errors("ok"));
        for key in ["empty", "punct", "accent"] {
            assert_eq!(acc.field_errors(key), &[FieldError::NotAlphanumeric], "{}", key);
        }
    }
}
