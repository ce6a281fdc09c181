//! Guest account fields

use crate::primitive::{
    validate_alphanumeric, validate_email_format, validate_string_in_set, validate_string_length,
};
use crate::rules::DEFAULT_USERNAME_MAX_LEN;
use crate::{Accumulator, ShortCircuitScope, Value};

/// Validate a login name: at most `max_len` characters (12 when `None`), all
/// ASCII letters or digits.
///
/// Gate: [`ShortCircuitScope::Field`] between the length and character
/// checks.
///
/// ```
/// use meridian::{Accumulator, Value};
/// use meridian::composite::validate_username;
///
/// let acc = validate_username(Accumulator::new(), &Value::from("guest_observer"), "login", None);
/// assert_eq!(acc.messages("login"), vec!["Must be 1-12 characters"]);
/// ```
pub fn validate_username(
    acc: Accumulator,
    value: &Value,
    key: &str,
    max_len: Option<usize>,
) -> Accumulator {
    let max_len = max_len.unwrap_or(DEFAULT_USERNAME_MAX_LEN);
    let acc = validate_string_length(acc, value, key, max_len);
    acc.continue_unless(ShortCircuitScope::Field, key, |acc| {
        validate_alphanumeric(acc, value, key)
    })
}

/// Validate a login shell against an allow-list, usually
/// [`Rules::shells`](crate::rules::Rules::shells).
pub fn validate_shell<S>(acc: Accumulator, value: &Value, key: &str, shells: &[S]) -> Accumulator
where
    S: AsRef<str> + Sync,
{
    validate_string_in_set(acc, value, key, shells)
}

/// Extra checks applied to an e-mail address once its format is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailOptions {
    /// Longest accepted address
    pub max_len: Option<usize>,
    /// Require ASCII letters and digits only
    pub alphanumeric: bool,
}

/// Validate an e-mail address, then apply `options`.
///
/// Gate: [`ShortCircuitScope::Global`] after the format check. The length and
/// character checks both run once past the gate.
pub fn validate_email(
    acc: Accumulator,
    value: &Value,
    key: &str,
    options: EmailOptions,
) -> Accumulator {
    let acc = validate_email_format(acc, value, key);
    acc.continue_unless(ShortCircuitScope::Global, key, |acc| {
        let acc = match options.max_len {
            Some(max) => validate_string_length(acc, value, key, max),
            None => acc,
        };
        if options.alphanumeric {
            validate_alphanumeric(acc, value, key)
        } else {
            acc
        }
    })
}
