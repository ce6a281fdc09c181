//! Field errors and configuration errors
//!
//! Invalid *input* is never an `Err`: it becomes a [`FieldError`] appended to
//! an accumulator under the offending field key. Only broken *configuration*
//! surfaces as a Rust error ([`ConfigError`]).

use thiserror::Error;

/// A single validation failure recorded against a field.
///
/// The `Display` impl is the human-readable message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "detail", rename_all = "snake_case"))]
pub enum FieldError {
    /// Mandatory field left empty
    #[error("This field is required")]
    Required,

    /// Value is not integer-coercible
    #[error("Must be a whole number")]
    NotInteger,

    /// Value has no string form (a list or a record)
    #[error("Must be a single text value")]
    NotText,

    /// Integer outside the effective bounds
    #[error("Must be between {min} and {max}")]
    OutOfRange {
        /// Inclusive lower bound
        min: i64,
        /// Inclusive upper bound
        max: i64,
    },

    /// Text longer than allowed
    #[error("Must be 1-{max} characters")]
    TooLong {
        /// Maximum length in characters
        max: usize,
    },

    /// Text of the wrong fixed length
    #[error("Must be exactly {expected} characters")]
    WrongLength {
        /// Required length in characters
        expected: usize,
    },

    /// Not an e-mail address
    #[error("Must be a valid email address")]
    InvalidEmail,

    /// Contains something other than ASCII letters and digits
    #[error("Must contain only letters and numbers")]
    NotAlphanumeric,

    /// Not one of the allowed strings
    #[error("'{value}' is not an allowed value")]
    NotInSet {
        /// The rejected value
        value: String,
    },

    /// Submitted choice not offered by the form
    #[error("'{value}' is not a valid selection")]
    InvalidSelection {
        /// The rejected choice
        value: String,
    },

    /// Semester tag other than A or B
    #[error("Semester must be A or B, not '{value}'")]
    InvalidSemesterTag {
        /// The rejected tag
        value: String,
    },

    /// Year, month and day that do not name a real day
    #[error("{year:04}-{month:02}-{day:02} is not a valid date")]
    InvalidDate {
        /// Year as submitted
        year: i64,
        /// Month as submitted
        month: i64,
        /// Day as submitted
        day: i64,
    },

    /// Date and time that do not name a real local instant
    #[error("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02} is not a valid date and time")]
    InvalidDateTime {
        /// Year as submitted
        year: i64,
        /// Month as submitted
        month: i64,
        /// Day as submitted
        day: i64,
        /// Hour as submitted
        hour: i64,
        /// Minute as submitted
        minute: i64,
        /// Second as submitted
        second: i64,
    },

    /// Range whose end precedes its start
    #[error("End date must not be before start date")]
    EndBeforeStart,

    /// Date that does not fall in the stated semester
    #[error("Date falls in semester {actual}, not {expected}")]
    SemesterMismatch {
        /// Semester code the caller supplied
        expected: String,
        /// Semester the date actually falls in
        actual: String,
    },

    /// Value is not upload metadata
    #[error("Must be a file upload")]
    NotAnUpload,

    /// Upload transfer failed
    #[error("File upload failed: {reason} (code {status})")]
    UploadFailed {
        /// Transfer status code
        status: i64,
        /// Description of the status code
        reason: String,
    },

    /// Upload MIME type not on the allow-list
    #[error("File type '{mime}' is not allowed")]
    MimeNotAllowed {
        /// The rejected MIME type
        mime: String,
    },

    /// Caller-supplied message
    #[error("{0}")]
    Custom(String),
}

/// Taxonomy of failures, independent of message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Value has the wrong shape for the check
    TypeMismatch,
    /// Integer outside bounds
    OutOfRange,
    /// Bad e-mail, bad characters, wrong length
    Format,
    /// Value not in an allowed set
    Membership,
    /// Non-existent calendar date
    Calendar,
    /// Range end before start
    Ordering,
    /// Disagreement between two fields
    CrossField,
    /// Mandatory value missing
    Required,
    /// Upload transfer failed
    UploadStatus,
    /// Upload MIME type rejected
    Mime,
    /// Caller-defined
    Custom,
}

impl FieldError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldError::Required => ErrorKind::Required,
            FieldError::NotInteger | FieldError::NotText | FieldError::NotAnUpload => {
                ErrorKind::TypeMismatch
            }
            FieldError::OutOfRange { .. } => ErrorKind::OutOfRange,
            FieldError::TooLong { .. }
            | FieldError::WrongLength { .. }
            | FieldError::InvalidEmail
            | FieldError::NotAlphanumeric => ErrorKind::Format,
            FieldError::NotInSet { .. }
            | FieldError::InvalidSelection { .. }
            | FieldError::InvalidSemesterTag { .. } => ErrorKind::Membership,
            FieldError::InvalidDate { .. } | FieldError::InvalidDateTime { .. } => {
                ErrorKind::Calendar
            }
            FieldError::EndBeforeStart => ErrorKind::Ordering,
            FieldError::SemesterMismatch { .. } => ErrorKind::CrossField,
            FieldError::UploadFailed { .. } => ErrorKind::UploadStatus,
            FieldError::MimeNotAllowed { .. } => ErrorKind::Mime,
            FieldError::Custom(_) => ErrorKind::Custom,
        }
    }
}

impl From<&str> for FieldError {
    fn from(message: &str) -> Self {
        FieldError::Custom(message.to_string())
    }
}

impl From<String> for FieldError {
    fn from(message: String) -> Self {
        FieldError::Custom(message)
    }
}

/// Problems with deployment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The rules document could not be parsed
    #[cfg(feature = "serde")]
    #[error("failed to parse validation rules: {0}")]
    Parse(#[from] toml::de::Error),

    /// The rules parsed but are unusable
    #[error("invalid validation rules: {0}")]
    Invalid(String),
}
