//! Single-concern validators
//!
//! Every function here has the same shape: take the accumulator, a raw
//! [`Value`](crate::Value), a field key and optional limits; record at most one
//! error under that key, or store the normalized value there; return the
//! accumulator. None of them look at any other field.

mod calendar;
mod integer;
mod required;
mod text;
mod upload;

pub use calendar::{
    current_year, validate_day, validate_hour, validate_minute, validate_month, validate_second,
    validate_timestamp, validate_year, Bounds, DAY_DOMAIN, HOUR_DOMAIN, MINUTE_DOMAIN,
    MONTH_DOMAIN, SECOND_DOMAIN, TIMESTAMP_DOMAIN, YEARS_AHEAD, YEAR_DOMAIN,
};
pub use integer::{validate_integer, validate_integer_range};
pub use required::validate_required;
pub use text::{
    validate_alphanumeric, validate_email_format, validate_string_in_set, validate_string_length,
};
pub use upload::validate_uploaded_file;

pub(crate) use integer::integer_in;
pub(crate) use text::text;
