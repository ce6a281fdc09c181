//! Untyped field values
//!
//! Form submissions, CSV rows and upload metadata all arrive as loosely typed
//! data. [`Value`] is the single representation used both for raw input handed
//! to validators and for the normalized values they store in an
//! [`Accumulator`](crate::Accumulator).
//!
//! # Coercion
//!
//! Validators never trust the variant they are given. They ask for an integer
//! or a string view instead:
//!
//! ```
//! use meridian::Value;
//!
//! assert_eq!(Value::from(" 007 ").as_integer(), Some(7));
//! assert_eq!(Value::from(12.0).as_integer(), Some(12));
//! assert_eq!(Value::from("1.5").as_integer(), None);
//!
//! assert_eq!(Value::from(42).as_text().as_deref(), Some("42"));
//! assert_eq!(Value::from(true).as_text().as_deref(), Some("1"));
//! assert_eq!(Value::Null.as_text().as_deref(), Some(""));
//! ```

use std::borrow::Cow;
use std::fmt;

/// A loosely typed field value.
///
/// With the `serde` feature this (de)serializes untagged, so a JSON form body
/// such as `{"year": "2024", "tags": ["a", "b"]}` maps onto the natural
/// variants.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Missing or explicit null input
    #[default]
    Null,
    /// Boolean flag
    Bool(bool),
    /// Integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Text
    Text(String),
    /// Multi-valued input (checkbox groups, multi-selects)
    List(Vec<Value>),
    /// Upload metadata
    Upload(Upload),
    /// Derived timestamp plus the components it was built from
    Date(DateValue),
    /// Calendar components of a validated date or date-time
    Components(DateComponents),
}

impl Value {
    /// Coerce to an integer.
    ///
    /// Accepts integers, integral finite floats, and text holding an optional
    /// sign followed by ASCII digits (surrounding whitespace and leading zeros
    /// are allowed). Everything else is rejected.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Float(f) => float_to_integer(*f),
            Value::Text(s) => parse_integer(s),
            _ => None,
        }
    }

    /// Coerce to a string.
    ///
    /// Lists and records have no string form and yield `None`.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Text(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Int(n) => Some(Cow::Owned(n.to_string())),
            Value::Float(f) => Some(Cow::Owned(f.to_string())),
            Value::Bool(true) => Some(Cow::Borrowed("1")),
            Value::Bool(false) | Value::Null => Some(Cow::Borrowed("")),
            Value::List(_) | Value::Upload(_) | Value::Date(_) | Value::Components(_) => None,
        }
    }

    /// Whether this value counts as "not provided" for a required field.
    ///
    /// Null, whitespace-only text, an empty list, and `false` are empty.
    /// Numbers are never empty, so a submitted `0` satisfies a required field.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null | Value::Bool(false) => true,
            Value::Text(s) => s.trim().is_empty(),
            Value::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Borrow the upload record, if this is one.
    pub fn as_upload(&self) -> Option<&Upload> {
        match self {
            Value::Upload(upload) => Some(upload),
            _ => None,
        }
    }

    /// Borrow the derived date record, if this is one.
    pub fn as_date(&self) -> Option<&DateValue> {
        match self {
            Value::Date(date) => Some(date),
            _ => None,
        }
    }

    /// View a scalar as a one-element slice and a list as its items.
    ///
    /// `Null` means nothing was submitted and yields no items.
    pub fn items(&self) -> &[Value] {
        match self {
            Value::Null => &[],
            Value::List(items) => items,
            other => std::slice::from_ref(other),
        }
    }
}

fn float_to_integer(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn parse_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_matches(|c: char| c.is_ascii_whitespace());
    let digits = trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::List(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            Value::Upload(upload) => f.write_str(upload.name.as_deref().unwrap_or(&upload.mime)),
            Value::Date(date) => write!(f, "{}", date.components),
            Value::Components(components) => write!(f, "{}", components),
            scalar => match scalar.as_text() {
                Some(text) => f.write_str(&text),
                None => Ok(()),
            },
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Upload> for Value {
    fn from(upload: Upload) -> Self {
        Value::Upload(upload)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

/// Status code reported for a successful upload.
pub const UPLOAD_OK: i64 = 0;

/// Metadata describing a submitted file.
///
/// The validation layer only looks at the status code and MIME type; storing
/// the file is somebody else's job.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Upload {
    /// Transfer status; [`UPLOAD_OK`] on success
    pub status: i64,
    /// Client-reported MIME type
    pub mime: String,
    /// Original file name
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Size in bytes
    #[cfg_attr(feature = "serde", serde(default))]
    pub size: Option<u64>,
}

impl Upload {
    /// Create upload metadata with a status code and MIME type.
    pub fn new(status: i64, mime: impl Into<String>) -> Self {
        Upload {
            status,
            mime: mime.into(),
            name: None,
            size: None,
        }
    }

    /// Attach the original file name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach the size in bytes.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Whether the transfer itself succeeded.
    pub fn is_ok(&self) -> bool {
        self.status == UPLOAD_OK
    }
}

/// Human-readable reason for an upload status code.
pub fn upload_failure_reason(status: i64) -> &'static str {
    match status {
        UPLOAD_OK => "no error",
        1 => "the file exceeds the server size limit",
        2 => "the file exceeds the form size limit",
        3 => "the file was only partially uploaded",
        4 => "no file was uploaded",
        6 => "the temporary folder is missing",
        7 => "the file could not be written to disk",
        8 => "the upload was stopped by an extension",
        _ => "unknown upload error",
    }
}

/// Calendar components of a validated date, with time of day when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateComponents {
    /// Four-digit year
    pub year: i32,
    /// Month, 1-12
    pub month: u32,
    /// Day of month, 1-31
    pub day: u32,
    /// Hour, 0-23
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub hour: Option<u32>,
    /// Minute, 0-59
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub minute: Option<u32>,
    /// Second, 0-59
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub second: Option<u32>,
}

impl DateComponents {
    /// A calendar date at midnight.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        DateComponents {
            year,
            month,
            day,
            hour: None,
            minute: None,
            second: None,
        }
    }

    /// A calendar date with time of day.
    pub fn date_time(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        DateComponents {
            year,
            month,
            day,
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
        }
    }
}

impl fmt::Display for DateComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if let (Some(h), Some(m), Some(s)) = (self.hour, self.minute, self.second) {
            write!(f, " {:02}:{:02}:{:02}", h, m, s)?;
        }
        Ok(())
    }
}

/// A validated date: Unix timestamp plus its components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateValue {
    /// Seconds since the Unix epoch, in the local time zone
    pub timestamp: i64,
    /// The components the timestamp was built from
    pub components: DateComponents,
}
