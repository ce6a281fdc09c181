//! Dates built from separate year/month/day (and time) fields
//!
//! Every component is checked under its own child key so each input box gets
//! its own message. Only once the whole accumulator is clean is the calendar
//! consulted: February 30th passes every component check and is rejected
//! here, under the base key.

use std::borrow::Cow;

use chrono::{Local, NaiveDate, TimeZone};

use crate::key::{self, child};
use crate::primitive::{
    validate_day, validate_hour, validate_minute, validate_month, validate_second, validate_year,
    Bounds,
};
use crate::semester::SemesterCalendar;
use crate::{Accumulator, DateComponents, DateValue, FieldError, ShortCircuitScope, Value};

use super::validate_semester_code;

/// The three raw inputs of a calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct DateInput {
    /// Raw year
    pub year: Value,
    /// Raw month
    pub month: Value,
    /// Raw day
    pub day: Value,
}

impl DateInput {
    /// Bundle the raw inputs.
    pub fn new(year: impl Into<Value>, month: impl Into<Value>, day: impl Into<Value>) -> Self {
        DateInput {
            year: year.into(),
            month: month.into(),
            day: day.into(),
        }
    }

    fn validate(&self, acc: Accumulator, base: &str) -> Accumulator {
        validate_full_date(acc, &self.year, &self.month, &self.day, base)
    }
}

/// Validate a calendar date spread over `{base}_year`, `{base}_month` and
/// `{base}_day`.
///
/// All three components are always checked. If the accumulator is then
/// entirely clean, the date must exist in the calendar; it is stored under
/// `{base}` as a [`Value::Date`], with the local-midnight timestamp under
/// `{base}_timestamp` and the components under `{base}_components`.
///
/// Gate: [`ShortCircuitScope::Global`].
///
/// ```
/// use meridian::{Accumulator, Value};
/// use meridian::composite::validate_full_date;
///
/// let acc = validate_full_date(
///     Accumulator::new(),
///     &Value::from("2024"),
///     &Value::from("2"),
///     &Value::from("30"),
///     "start",
/// );
/// assert!(!acc.has_field_errors("start_day"));
/// assert_eq!(acc.messages("start"), vec!["2024-02-30 is not a valid date"]);
/// ```
pub fn validate_full_date(
    acc: Accumulator,
    year: &Value,
    month: &Value,
    day: &Value,
    base: &str,
) -> Accumulator {
    validate_full_date_in(acc, year, month, day, base, Bounds::default())
}

/// Like [`validate_full_date`], with explicit bounds for the year.
pub fn validate_full_date_in(
    acc: Accumulator,
    year: &Value,
    month: &Value,
    day: &Value,
    base: &str,
    years: Bounds,
) -> Accumulator {
    let acc = validate_year(acc, year, &child(base, key::YEAR), years);
    let acc = validate_month(acc, month, &child(base, key::MONTH), Bounds::default());
    let acc = validate_day(acc, day, &child(base, key::DAY), Bounds::default());
    acc.continue_unless(ShortCircuitScope::Global, base, |acc| {
        match stored_components(&acc, base, false) {
            Some(components) => store_date(acc, base, components),
            None => acc,
        }
    })
}

/// Validate a local date and time spread over six child keys.
///
/// Behaves like [`validate_full_date`] with `{base}_hour`, `{base}_minute`
/// and `{base}_second` added. A wall-clock time skipped by a daylight-saving
/// change is rejected under `{base}`; an ambiguous one resolves to the earlier
/// instant.
///
/// Gate: [`ShortCircuitScope::Global`].
#[allow(clippy::too_many_arguments)]
pub fn validate_full_date_time(
    acc: Accumulator,
    year: &Value,
    month: &Value,
    day: &Value,
    hour: &Value,
    minute: &Value,
    second: &Value,
    base: &str,
) -> Accumulator {
    let acc = validate_year(acc, year, &child(base, key::YEAR), Bounds::default());
    let acc = validate_month(acc, month, &child(base, key::MONTH), Bounds::default());
    let acc = validate_day(acc, day, &child(base, key::DAY), Bounds::default());
    let acc = validate_hour(acc, hour, &child(base, key::HOUR), Bounds::default());
    let acc = validate_minute(acc, minute, &child(base, key::MINUTE), Bounds::default());
    let acc = validate_second(acc, second, &child(base, key::SECOND), Bounds::default());
    acc.continue_unless(ShortCircuitScope::Global, base, |acc| {
        match stored_components(&acc, base, true) {
            Some(components) => store_date(acc, base, components),
            None => acc,
        }
    })
}

/// Validate two dates under `{base}_start` and `{base}_end` and require the
/// end not to precede the start. Equal dates are accepted.
///
/// Gate: [`ShortCircuitScope::Global`].
///
/// ```
/// use meridian::{Accumulator, FieldError};
/// use meridian::composite::{validate_date_range, DateInput};
///
/// let acc = validate_date_range(
///     Accumulator::new(),
///     &DateInput::new(2024, 3, 10),
///     &DateInput::new(2024, 3, 9),
///     "run",
/// );
/// assert_eq!(acc.field_errors("run"), &[FieldError::EndBeforeStart]);
/// ```
pub fn validate_date_range(
    acc: Accumulator,
    start: &DateInput,
    end: &DateInput,
    base: &str,
) -> Accumulator {
    let start_key = child(base, key::START);
    let end_key = child(base, key::END);
    let acc = start.validate(acc, &start_key);
    let acc = end.validate(acc, &end_key);
    acc.continue_unless(ShortCircuitScope::Global, base, |acc| {
        match (stored_date(&acc, &start_key), stored_date(&acc, &end_key)) {
            (Some(first), Some(last)) if last.timestamp < first.timestamp => {
                acc.add_field_error(base, FieldError::EndBeforeStart)
            }
            _ => acc,
        }
    })
}

/// Validate a date under `{base}_date` and a semester code under
/// `{base}_semester`, and require the date to fall in that semester.
///
/// The semester the date falls in comes from `calendar` and is compared with
/// the submitted code exactly.
///
/// Gate: [`ShortCircuitScope::Global`].
///
/// ```
/// use meridian::Accumulator;
/// use meridian::composite::{validate_date_in_semester, DateInput};
/// use meridian::semester::ObservatoryCalendar;
///
/// let acc = validate_date_in_semester(
///     Accumulator::new(),
///     &DateInput::new(2025, 1, 15),
///     &"2025A".into(),
///     "visit",
///     &ObservatoryCalendar,
/// );
/// assert_eq!(acc.messages("visit"), vec!["Date falls in semester 2024B, not 2025A"]);
/// ```
pub fn validate_date_in_semester<C>(
    acc: Accumulator,
    date: &DateInput,
    semester: &Value,
    base: &str,
    calendar: &C,
) -> Accumulator
where
    C: SemesterCalendar + ?Sized,
{
    let date_key = child(base, key::DATE);
    let semester_key = child(base, key::SEMESTER);
    let acc = date.validate(acc, &date_key);
    let acc = validate_semester_code(acc, semester, &semester_key);
    acc.continue_unless(ShortCircuitScope::Global, base, |acc| {
        let Some(date) = stored_date(&acc, &date_key) else {
            return acc;
        };
        let Some(expected) = acc
            .field_value(&semester_key)
            .and_then(Value::as_text)
            .map(Cow::into_owned)
        else {
            return acc;
        };
        let c = date.components;
        let actual = calendar.semester_for(c.month, c.day, c.year);
        if actual == expected {
            acc
        } else {
            acc.add_field_error(base, FieldError::SemesterMismatch { expected, actual })
        }
    })
}

fn stored_date(acc: &Accumulator, key: &str) -> Option<DateValue> {
    acc.field_value(key).and_then(Value::as_date).copied()
}

fn stored_part<T: TryFrom<i64>>(acc: &Accumulator, base: &str, suffix: &str) -> Option<T> {
    let n = acc.field_value(&child(base, suffix))?.as_integer()?;
    T::try_from(n).ok()
}

fn stored_components(acc: &Accumulator, base: &str, with_time: bool) -> Option<DateComponents> {
    let year = stored_part(acc, base, key::YEAR)?;
    let month = stored_part(acc, base, key::MONTH)?;
    let day = stored_part(acc, base, key::DAY)?;
    if !with_time {
        return Some(DateComponents::date(year, month, day));
    }
    Some(DateComponents::date_time(
        year,
        month,
        day,
        stored_part(acc, base, key::HOUR)?,
        stored_part(acc, base, key::MINUTE)?,
        stored_part(acc, base, key::SECOND)?,
    ))
}

/// Seconds since the epoch for the components read as wall-clock time in
/// `zone`.
///
/// A repeated wall-clock time resolves to its earlier instant; one skipped by
/// a forward clock change has no timestamp.
fn zoned_timestamp<Tz: TimeZone>(zone: &Tz, c: &DateComponents) -> Option<i64> {
    let naive = NaiveDate::from_ymd_opt(c.year, c.month, c.day)?.and_hms_opt(
        c.hour.unwrap_or(0),
        c.minute.unwrap_or(0),
        c.second.unwrap_or(0),
    )?;
    zone.from_local_datetime(&naive)
        .earliest()
        .map(|instant| instant.timestamp())
}

fn calendar_error(c: &DateComponents) -> FieldError {
    let (year, month, day) = (i64::from(c.year), i64::from(c.month), i64::from(c.day));
    match (c.hour, c.minute, c.second) {
        (Some(hour), Some(minute), Some(second)) => FieldError::InvalidDateTime {
            year,
            month,
            day,
            hour: i64::from(hour),
            minute: i64::from(minute),
            second: i64::from(second),
        },
        _ => FieldError::InvalidDate { year, month, day },
    }
}

fn store_date(acc: Accumulator, base: &str, components: DateComponents) -> Accumulator {
    store_date_in(acc, base, components, &Local)
}

fn store_date_in<Tz: TimeZone>(
    acc: Accumulator,
    base: &str,
    components: DateComponents,
    zone: &Tz,
) -> Accumulator {
    let Some(timestamp) = zoned_timestamp(zone, &components) else {
        #[cfg(feature = "tracing")]
        tracing::debug!(field = base, date = %components, "not a calendar date");
        return acc.add_field_error(base, calendar_error(&components));
    };
    acc.set_field_value(base, Value::Date(DateValue { timestamp, components }))
        .set_field_value(child(base, key::TIMESTAMP), timestamp)
        .set_field_value(child(base, key::COMPONENTS), Value::Components(components))
}
