//! Field-key naming for composite validators
//!
//! Composite validators spread one logical input over several keys by
//! suffixing a base key. A renderer that wants to show `start_month` errors
//! next to the right widget relies on exactly this scheme, so every composite
//! builds its keys through [`child`].
//!
//! ```
//! use meridian::key;
//!
//! assert_eq!(key::child("start", key::YEAR), "start_year");
//! assert_eq!(key::child(&key::child("obs", key::START), key::DAY), "obs_start_day");
//! ```

/// Year component of a date
pub const YEAR: &str = "year";
/// Month component of a date
pub const MONTH: &str = "month";
/// Day component of a date
pub const DAY: &str = "day";
/// Hour component of a date-time
pub const HOUR: &str = "hour";
/// Minute component of a date-time
pub const MINUTE: &str = "minute";
/// Second component of a date-time
pub const SECOND: &str = "second";
/// Derived Unix timestamp
pub const TIMESTAMP: &str = "timestamp";
/// Derived component record
pub const COMPONENTS: &str = "components";
/// First date of a range
pub const START: &str = "start";
/// Last date of a range
pub const END: &str = "end";
/// Date half of a date/semester pair
pub const DATE: &str = "date";
/// Semester half of a date/semester pair
pub const SEMESTER: &str = "semester";
/// Semester tag (`A`/`B`) inside a code
pub const TAG: &str = "tag";
/// Sequence number inside a program number
pub const NUMBER: &str = "number";

/// Build the key for `suffix` under `base`.
pub fn child(base: &str, suffix: &str) -> String {
    let mut key = String::with_capacity(base.len() + suffix.len() + 1);
    key.push_str(base);
    key.push('_');
    key.push_str(suffix);
    key
}
