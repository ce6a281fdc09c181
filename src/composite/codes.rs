//! Semester, program and session identifiers
//!
//! A semester code is a year and a tag, `2024A`. A program number appends a
//! three-digit sequence number, `2024A017`. Each part is checked under its own
//! child key, and the whole code is only stored once every part is clean.
//!
//! The year inside a code is any four-digit number. Codes are identifiers,
//! not dates, so the 1900 floor of [`validate_year`](crate::primitive::validate_year)
//! does not apply. Numeric parts are plain ASCII digits: no sign, no padding.

use crate::key::{self, child};
use crate::predicate::{
    all_chars, len_eq, not_empty, one_of, one_of_ignore_case, Between, Predicate, PredicateExt,
};
use crate::primitive::{integer_in, text, validate_alphanumeric, Bounds};
use crate::{Accumulator, FieldError, ShortCircuitScope, Validation, Value};

/// Accepted semester tags.
pub const SEMESTER_TAGS: [&str; 2] = ["A", "B"];

/// Years a code may carry.
pub const CODE_YEAR_DOMAIN: Between<i64> = Between::new(0, 9999);

/// Lowest and highest program sequence number.
pub const PROGRAM_NUMBER_DOMAIN: Between<i64> = Between::new(1, 999);

const SEMESTER_CODE_LEN: usize = 5;
const PROGRAM_NUMBER_LEN: usize = 8;
const SESSION_CODE_LEN: usize = 10;

fn exact_length(value: &Value, expected: usize) -> Validation<String, FieldError> {
    text(value).ensure(len_eq(expected), FieldError::WrongLength { expected })
}

/// A digits-only part of a code, read as an integer in `range`.
fn numeric_part(acc: Accumulator, part: &str, key: &str, range: Between<i64>) -> Accumulator {
    let digits = PredicateExt::<String>::and(not_empty(), all_chars(|c: char| c.is_ascii_digit()));
    let outcome = Validation::success(part.to_string())
        .ensure(digits, FieldError::NotInteger)
        .and_then(|digits| integer_in(&Value::from(digits), range));
    acc.record(key, outcome.map(Value::Int))
}

/// Split after the fourth character.
fn split_year(code: &str) -> (&str, &str) {
    let at = code.char_indices().nth(4).map_or(code.len(), |(i, _)| i);
    code.split_at(at)
}

/// Validate a one-letter semester tag, `A` or `B` in either case.
///
/// The tag is stored upper-cased.
///
/// Gate: [`ShortCircuitScope::Field`] between the length and membership
/// checks.
pub fn validate_semester_tag(acc: Accumulator, value: &Value, key: &str) -> Accumulator {
    let acc = acc.record(key, exact_length(value, 1).map(Value::Text));
    acc.continue_unless(ShortCircuitScope::Field, key, |acc| {
        let outcome = text(value)
            .ensure_with(one_of_ignore_case(&SEMESTER_TAGS), |tag| {
                FieldError::InvalidSemesterTag { value: tag.clone() }
            })
            .map(|tag| Value::Text(tag.to_ascii_uppercase()));
        acc.record(key, outcome)
    })
}

/// Validate a five-character semester code such as `2024A`.
///
/// A code of the wrong length is reported under `key` and nothing else is
/// checked. Otherwise the year goes under `{key}_year` and the tag under
/// `{key}_tag`, and both are always checked; the code is stored under `key`
/// as submitted when both are clean.
///
/// ```
/// use meridian::{Accumulator, Value};
/// use meridian::composite::validate_semester_code;
///
/// let acc = validate_semester_code(Accumulator::new(), &Value::from("12345"), "semester");
/// assert!(!acc.has_field_errors("semester_year"));
/// assert_eq!(acc.messages("semester_tag"), vec!["Semester must be A or B, not '5'"]);
/// ```
pub fn validate_semester_code(acc: Accumulator, value: &Value, key: &str) -> Accumulator {
    let code = match exact_length(value, SEMESTER_CODE_LEN) {
        Validation::Success(code) => code,
        Validation::Failure(error) => return acc.add_field_error(key, error),
    };
    let year_key = child(key, key::YEAR);
    let tag_key = child(key, key::TAG);
    let (year, tag) = split_year(&code);

    let acc = numeric_part(acc, year, &year_key, CODE_YEAR_DOMAIN);
    let acc = validate_semester_tag(acc, &Value::from(tag), &tag_key);
    if acc.has_field_errors(&year_key) || acc.has_field_errors(&tag_key) {
        acc
    } else {
        acc.set_field_value(key, code)
    }
}

/// Validate a program sequence number, 1 to 999 unless narrowed.
pub fn validate_program_number_range(
    acc: Accumulator,
    value: &Value,
    key: &str,
    bounds: Bounds,
) -> Accumulator {
    let range = bounds.resolve(PROGRAM_NUMBER_DOMAIN, PROGRAM_NUMBER_DOMAIN);
    acc.record(key, integer_in(value, range).map(Value::Int))
}

/// Validate an eight-character program number such as `2024A017`.
///
/// Parts go under `{key}_year`, `{key}_tag` and `{key}_number`; the code is
/// stored under `key` when all three are clean. A code of the wrong length is
/// reported under `key` alone.
pub fn validate_program_number(acc: Accumulator, value: &Value, key: &str) -> Accumulator {
    let code = match exact_length(value, PROGRAM_NUMBER_LEN) {
        Validation::Success(code) => code,
        Validation::Failure(error) => return acc.add_field_error(key, error),
    };
    let year_key = child(key, key::YEAR);
    let tag_key = child(key, key::TAG);
    let number_key = child(key, key::NUMBER);
    let (year, rest) = split_year(&code);
    let tag_end = rest.char_indices().nth(1).map_or(rest.len(), |(i, _)| i);
    let (tag, number) = rest.split_at(tag_end);

    let acc = numeric_part(acc, year, &year_key, CODE_YEAR_DOMAIN);
    let acc = validate_semester_tag(acc, &Value::from(tag), &tag_key);
    let acc = numeric_part(acc, number, &number_key, PROGRAM_NUMBER_DOMAIN);
    let parts = [&year_key, &tag_key, &number_key];
    if parts.iter().any(|part| acc.has_field_errors(part)) {
        acc
    } else {
        acc.set_field_value(key, code)
    }
}

/// Validate an observing session code.
///
/// An exact match against `engineering_codes` is accepted as is. Anything
/// else must be exactly ten ASCII letters or digits.
///
/// Gate: [`ShortCircuitScope::Global`] between the length and character
/// checks.
///
/// ```
/// use meridian::{Accumulator, Value};
/// use meridian::composite::validate_session_code;
/// use meridian::rules::Rules;
///
/// let rules = Rules::default();
/// let codes = &rules.engineering_codes;
/// let acc = validate_session_code(Accumulator::new(), &Value::from("tisanpwd"), "session", codes);
/// assert!(!acc.has_errors());
///
/// let acc = validate_session_code(acc, &Value::from("K2024A-001"), "other", codes);
/// assert_eq!(acc.messages("other"), vec!["Must contain only letters and numbers"]);
/// ```
pub fn validate_session_code<S>(
    acc: Accumulator,
    value: &Value,
    key: &str,
    engineering_codes: &[S],
) -> Accumulator
where
    S: AsRef<str> + Sync,
{
    let engineering = text(value)
        .into_result()
        .ok()
        .filter(|code| one_of(engineering_codes).check(code));
    if let Some(code) = engineering {
        return acc.set_field_value(key, code);
    }
    let acc = acc.record(key, exact_length(value, SESSION_CODE_LEN).map(Value::Text));
    acc.continue_unless(ShortCircuitScope::Global, key, |acc| {
        validate_alphanumeric(acc, value, key)
    })
}
