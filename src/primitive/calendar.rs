//! Calendar component and timestamp checks
//!
//! Caller-supplied bounds are never trusted: each component has a hard
//! domain, and a bound outside it is pulled back in before the check runs.
//! Asking for years from 500 on behaves exactly like asking from 1900 on.

use chrono::Datelike;

use super::integer_in;
use crate::predicate::{between, Between};
use crate::{Accumulator, Value};

/// Optional lower and upper limits for a numeric component.
///
/// A missing limit takes the component's default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Inclusive lower limit
    #[cfg_attr(feature = "serde", serde(default))]
    pub min: Option<i64>,
    /// Inclusive upper limit
    #[cfg_attr(feature = "serde", serde(default))]
    pub max: Option<i64>,
}

impl Bounds {
    /// Both limits given.
    pub fn new(min: i64, max: i64) -> Self {
        Bounds {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Only a lower limit.
    pub fn at_least(min: i64) -> Self {
        Bounds {
            min: Some(min),
            max: None,
        }
    }

    /// Only an upper limit.
    pub fn at_most(max: i64) -> Self {
        Bounds {
            min: None,
            max: Some(max),
        }
    }

    /// Fill missing limits from `default` and clamp both into `domain`.
    ///
    /// ```
    /// use meridian::predicate::between;
    /// use meridian::primitive::{Bounds, DAY_DOMAIN};
    ///
    /// let effective = Bounds::new(-4, 40).resolve(DAY_DOMAIN, DAY_DOMAIN);
    /// assert_eq!(effective, between(1, 31));
    /// ```
    pub fn resolve(self, default: Between<i64>, domain: Between<i64>) -> Between<i64> {
        let clamp = |n: i64| n.clamp(domain.min(), domain.max());
        between(
            clamp(self.min.unwrap_or(default.min())),
            clamp(self.max.unwrap_or(default.max())),
        )
    }
}

/// How many years past the current one a year field accepts by default.
pub const YEARS_AHEAD: i64 = 5;

/// Years the crate will ever accept.
pub const YEAR_DOMAIN: Between<i64> = Between::new(1900, 9999);
/// Months of the year.
pub const MONTH_DOMAIN: Between<i64> = Between::new(1, 12);
/// Days of a month, before the calendar check.
pub const DAY_DOMAIN: Between<i64> = Between::new(1, 31);
/// Hours of a day.
pub const HOUR_DOMAIN: Between<i64> = Between::new(0, 23);
/// Minutes of an hour.
pub const MINUTE_DOMAIN: Between<i64> = Between::new(0, 59);
/// Seconds of a minute. Leap seconds are not accepted.
pub const SECOND_DOMAIN: Between<i64> = Between::new(0, 59);
/// Unix timestamps up to 9999-12-31 23:59:59 UTC.
pub const TIMESTAMP_DOMAIN: Between<i64> = Between::new(0, 253_402_300_799);

/// The current year in the local time zone.
pub fn current_year() -> i64 {
    i64::from(chrono::Local::now().year())
}

fn default_years() -> Between<i64> {
    between(YEAR_DOMAIN.min(), current_year() + YEARS_AHEAD)
}

fn component(acc: Accumulator, value: &Value, key: &str, range: Between<i64>) -> Accumulator {
    acc.record(key, integer_in(value, range).map(Value::Int))
}

/// Require a year, by default from 1900 to five years ahead.
///
/// ```
/// use meridian::{Accumulator, Value};
/// use meridian::primitive::{validate_year, Bounds};
///
/// let acc = validate_year(Accumulator::new(), &Value::from(1899), "year", Bounds::at_least(500));
/// assert!(acc.messages("year")[0].starts_with("Must be between 1900 and "));
/// ```
pub fn validate_year(acc: Accumulator, value: &Value, key: &str, bounds: Bounds) -> Accumulator {
    let range = bounds.resolve(default_years(), YEAR_DOMAIN);
    component(acc, value, key, range)
}

/// Require a month, 1 to 12.
pub fn validate_month(acc: Accumulator, value: &Value, key: &str, bounds: Bounds) -> Accumulator {
    component(acc, value, key, bounds.resolve(MONTH_DOMAIN, MONTH_DOMAIN))
}

/// Require a day of the month, 1 to 31.
///
/// Whether the day exists in its month is checked by the full-date
/// composite, not here.
pub fn validate_day(acc: Accumulator, value: &Value, key: &str, bounds: Bounds) -> Accumulator {
    component(acc, value, key, bounds.resolve(DAY_DOMAIN, DAY_DOMAIN))
}

/// Require an hour, 0 to 23.
pub fn validate_hour(acc: Accumulator, value: &Value, key: &str, bounds: Bounds) -> Accumulator {
    component(acc, value, key, bounds.resolve(HOUR_DOMAIN, HOUR_DOMAIN))
}

/// Require a minute, 0 to 59.
pub fn validate_minute(acc: Accumulator, value: &Value, key: &str, bounds: Bounds) -> Accumulator {
    component(acc, value, key, bounds.resolve(MINUTE_DOMAIN, MINUTE_DOMAIN))
}

/// Require a second, 0 to 59.
pub fn validate_second(acc: Accumulator, value: &Value, key: &str, bounds: Bounds) -> Accumulator {
    component(acc, value, key, bounds.resolve(SECOND_DOMAIN, SECOND_DOMAIN))
}

/// Require a non-negative Unix timestamp no later than the end of year 9999.
pub fn validate_timestamp(
    acc: Accumulator,
    value: &Value,
    key: &str,
    bounds: Bounds,
) -> Accumulator {
    component(acc, value, key, bounds.resolve(TIMESTAMP_DOMAIN, TIMESTAMP_DOMAIN))
}
