//! Choices from a fixed list
//!
//! Check boxes, radio groups and rating scales all submit one or more values
//! that must have been offered by the form.

use std::ops::RangeInclusive;

use crate::predicate::validate_with;
use crate::primitive::validate_integer;
use crate::{Accumulator, FieldError, ShortCircuitScope, Validation, Value};

/// Which side of a `(key, label)` choice a submission names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectBy {
    /// The submitted values are choice keys
    #[default]
    Keys,
    /// The submitted values are choice labels
    Values,
}

/// Require every submitted item to be one of `choices`.
///
/// A single value is treated as a one-item selection and `Null` as an empty
/// one. Membership is strict: `Int(1)` does not match `Text("1")`. Every
/// stray item is reported on its own; when the field is clean the members are
/// stored as a list of strings.
///
/// Gate: [`ShortCircuitScope::Field`].
///
/// ```
/// use meridian::{Accumulator, Value};
/// use meridian::composite::{validate_selection, SelectBy};
///
/// let instruments = [
///     (Value::from("nirc2"), Value::from("NIRC2")),
///     (Value::from("hires"), Value::from("HIRES")),
/// ];
/// let submitted = Value::from(vec!["hires", "mosfire", "lris"]);
/// let acc = Accumulator::new();
/// let acc = validate_selection(acc, &submitted, "instruments", &instruments, SelectBy::Keys);
/// assert_eq!(
///     acc.messages("instruments"),
///     vec!["'mosfire' is not a valid selection", "'lris' is not a valid selection"]
/// );
/// ```
pub fn validate_selection(
    acc: Accumulator,
    submitted: &Value,
    key: &str,
    choices: &[(Value, Value)],
    by: SelectBy,
) -> Accumulator {
    let offered: Vec<&Value> = choices
        .iter()
        .map(|(choice_key, label)| match by {
            SelectBy::Keys => choice_key,
            SelectBy::Values => label,
        })
        .collect();
    let is_offered = |item: &&Value| offered.contains(item);

    let checks = submitted.items().iter().map(|item| {
        validate_with(item, is_offered, |stray| {
            vec![FieldError::InvalidSelection {
                value: stray.to_string(),
            }]
        })
        .map(|member| Value::Text(member.to_string()))
    });

    match Validation::all_vec(checks) {
        Validation::Failure(errors) => errors
            .into_iter()
            .fold(acc, |acc, error| acc.add_field_error(key, error)),
        Validation::Success(members) => {
            acc.continue_unless(ShortCircuitScope::Field, key, |acc| {
                acc.set_field_value(key, Value::List(members))
            })
        }
    }
}

fn scored(acc: Accumulator, value: &Value, key: &str, scale: RangeInclusive<i64>) -> Accumulator {
    let acc = validate_integer(acc, value, key);
    acc.continue_unless(ShortCircuitScope::Field, key, |acc| {
        let Some(score) = acc.field_value(key).cloned() else {
            return acc;
        };
        let choices: Vec<(Value, Value)> = scale.map(|n| (Value::Int(n), Value::Int(n))).collect();
        let acc = validate_selection(acc, &score, key, &choices, SelectBy::Keys);
        acc.continue_unless(ShortCircuitScope::Field, key, |acc| {
            acc.set_field_value(key, score)
        })
    })
}

/// Require a rating from 1 to 5, or 0 to 5 when "not applicable" is allowed.
///
/// The rating is stored as an integer.
///
/// Gate: [`ShortCircuitScope::Field`].
pub fn validate_rating(acc: Accumulator, value: &Value, key: &str, allow_na: bool) -> Accumulator {
    let lowest = if allow_na { 0 } else { 1 };
    scored(acc, value, key, lowest..=5)
}

/// Require 0 or 1, stored as an integer.
///
/// Gate: [`ShortCircuitScope::Field`].
pub fn validate_binary_option(acc: Accumulator, value: &Value, key: &str) -> Accumulator {
    scored(acc, value, key, 0..=1)
}
