//! # Meridian
//!
//! Field validation for observatory administration forms: proposal intake,
//! scheduling, and guest-account provisioning.
//!
//! ## Model
//!
//! A request's raw input is checked by piping one [`Accumulator`] through a
//! series of validator calls. Each call consumes the accumulator and returns
//! it with either a normalized value or an error recorded under the field's
//! key. Nothing fails fast: a form comes back with every problem at once.
//!
//! - [`primitive`] validators check one concern for one field.
//! - [`composite`] validators spread a logical input (a date, a semester
//!   code) over child keys, and may stop early when earlier checks failed;
//!   see [`ShortCircuitScope`].
//!
//! ## Quick Example
//!
//! ```rust
//! use meridian::prelude::*;
//! use meridian::composite::{validate_date_range, validate_username, DateInput};
//! use meridian::primitive::validate_required;
//!
//! let form = Accumulator::new();
//! let form = validate_required(form, &Value::from("Keck time request"), "title", true);
//! let form = validate_username(form, &Value::from("guest01"), "login", None);
//! let form = validate_date_range(
//!     form,
//!     &DateInput::new("2024", "8", "12"),
//!     &DateInput::new("2024", "8", "14"),
//!     "run",
//! );
//!
//! match form.into_validation() {
//!     Validation::Success(values) => {
//!         assert_eq!(values["login"], Value::from("guest01"));
//!         assert!(values.contains_key("run_end_timestamp"));
//!     }
//!     Validation::Failure(errors) => panic!("unexpected errors: {:?}", errors),
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when errors are recorded, gates skip
//!   work, and calendar checks fail
//! - `serde`: `Serialize`/`Deserialize` for values, errors and accumulators,
//!   plus [`Rules::from_toml_str`](rules::Rules::from_toml_str)
//! - `proptest`: input strategies in [`testing::strategies`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod accumulator;
pub mod composite;
pub mod error;
pub mod key;
pub mod predicate;
pub mod primitive;
pub mod rules;
pub mod semester;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod value;

// Re-exports
pub use accumulator::{Accumulator, FieldErrors, FieldValues, ShortCircuitScope};
pub use error::{ConfigError, ErrorKind, FieldError};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use value::{DateComponents, DateValue, Upload, Value, UPLOAD_OK};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::accumulator::{Accumulator, ShortCircuitScope};
    pub use crate::error::{ErrorKind, FieldError};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::semester::{ObservatoryCalendar, SemesterCalendar};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::value::Value;
}
