//! The threaded value/error accumulator
//!
//! An [`Accumulator`] is created per validation request, moved through a
//! pipeline of validator calls, and consumed once at the end. Every validator
//! takes it by value and hands it back, so there is never a stale copy to read
//! from:
//!
//! ```
//! use meridian::{Accumulator, Value};
//! use meridian::primitive::{validate_month, validate_required, Bounds};
//!
//! let form = Accumulator::new();
//! let form = validate_required(form, &Value::from("Orion survey"), "title", true);
//! let form = validate_month(form, &Value::from("13"), "month", Bounds::default());
//!
//! assert!(form.has_errors());
//! assert!(!form.has_field_errors("title"));
//! assert_eq!(form.messages("month"), vec!["Must be between 1 and 12"]);
//! ```
//!
//! Both maps only grow: nothing removes an error or a value once recorded.

use std::collections::BTreeMap;

use crate::{FieldError, Semigroup, Validation, Value};

/// Validated values keyed by field.
pub type FieldValues = BTreeMap<String, Value>;

/// Ordered error lists keyed by field.
pub type FieldErrors = BTreeMap<String, Vec<FieldError>>;

/// Which errors stop a composite validator from doing further work.
///
/// Composites differ here on purpose. Date construction, date ranges,
/// date/semester alignment and the e-mail composite refuse to continue while
/// *any* field in the accumulator is in error. Selections, ratings, binary
/// options and the semester-tag check only look at their own field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortCircuitScope {
    /// Stop if any field has an error
    Global,
    /// Stop if the given field has an error
    Field,
}

/// Field-keyed validated values and error lists.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Accumulator {
    values: FieldValues,
    errors: FieldErrors,
}

impl Accumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error to `key`'s list.
    #[must_use]
    pub fn add_field_error(mut self, key: impl Into<String>, error: impl Into<FieldError>) -> Self {
        let key = key.into();
        let error = error.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(field = %key, error = %error, "field rejected");
        self.errors.entry(key).or_default().push(error);
        self
    }

    /// Store `value` under `key`, replacing any earlier value.
    #[must_use]
    pub fn set_field_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Whether any field has an error.
    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|list| !list.is_empty())
    }

    /// Whether `key` has an error.
    pub fn has_field_errors(&self, key: &str) -> bool {
        self.errors.get(key).is_some_and(|list| !list.is_empty())
    }

    /// The value stored under `key`.
    pub fn field_value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The errors recorded under `key`, oldest first.
    pub fn field_errors(&self, key: &str) -> &[FieldError] {
        self.errors.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The rendered messages recorded under `key`, oldest first.
    pub fn messages(&self, key: &str) -> Vec<String> {
        self.field_errors(key).iter().map(ToString::to_string).collect()
    }

    /// Total number of errors across all fields.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// All stored values.
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// All recorded errors.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether the gate for `scope` is closed.
    ///
    /// `key` is only consulted for [`ShortCircuitScope::Field`].
    pub fn is_blocked(&self, scope: ShortCircuitScope, key: &str) -> bool {
        match scope {
            ShortCircuitScope::Global => self.has_errors(),
            ShortCircuitScope::Field => self.has_field_errors(key),
        }
    }

    /// Fold a single check into the accumulator.
    ///
    /// Success stores the value under `key`; failure appends the error.
    #[must_use]
    pub fn record(self, key: &str, outcome: Validation<Value, FieldError>) -> Self {
        match outcome {
            Validation::Success(value) => self.set_field_value(key, value),
            Validation::Failure(error) => self.add_field_error(key, error),
        }
    }

    /// Run `next` unless the gate for `scope` is closed.
    ///
    /// This is the short-circuit every composite validator is built from:
    ///
    /// ```
    /// use meridian::{Accumulator, ShortCircuitScope};
    ///
    /// let acc = Accumulator::new().add_field_error("other", "broken");
    ///
    /// let acc = acc.continue_unless(ShortCircuitScope::Field, "mine", |acc| {
    ///     acc.set_field_value("mine", 1)
    /// });
    /// assert!(acc.field_value("mine").is_some());
    ///
    /// let acc = acc.continue_unless(ShortCircuitScope::Global, "mine", |acc| {
    ///     acc.set_field_value("mine", 2)
    /// });
    /// assert_eq!(acc.field_value("mine"), Some(&meridian::Value::Int(1)));
    /// ```
    #[must_use]
    pub fn continue_unless<F>(self, scope: ShortCircuitScope, key: &str, next: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if self.is_blocked(scope, key) {
            #[cfg(feature = "tracing")]
            tracing::trace!(field = key, ?scope, "short-circuit");
            self
        } else {
            next(self)
        }
    }

    /// Fold in the outcome of an independent sub-pipeline.
    ///
    /// Error lists concatenate per key; values from `other` win.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.combine(other)
    }

    /// Consume the accumulator: every value if nothing failed, otherwise every
    /// error.
    pub fn into_validation(self) -> Validation<FieldValues, FieldErrors> {
        if self.has_errors() {
            Validation::Failure(self.errors)
        } else {
            Validation::Success(self.values)
        }
    }

    /// Like [`into_validation`](Self::into_validation), as a `Result`.
    pub fn into_result(self) -> Result<FieldValues, FieldErrors> {
        self.into_validation().into_result()
    }
}

// Errors concatenate per field; on value collisions the right-hand side wins.
impl Semigroup for Accumulator {
    fn combine(mut self, other: Self) -> Self {
        self.values.extend(other.values);
        self.errors = self.errors.combine(other.errors);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn new_accumulator_is_clean() {
        let acc = Accumulator::new();
        assert!(!acc.has_errors());
        assert!(!acc.has_field_errors("anything"));
        assert_eq!(acc.field_value("anything"), None);
        assert!(acc.field_errors("anything").is_empty());
        assert_eq!(acc.error_count(), 0);
    }

    #[test]
    fn errors_append_in_order() {
        let acc = Accumulator::new()
            .add_field_error("title", "Title is required")
            .add_field_error("title", FieldError::TooLong { max: 80 });

        assert_eq!(
            acc.messages("title"),
            vec!["Title is required", "Must be 1-80 characters"]
        );
        assert_eq!(acc.field_errors("title")[1].kind(), ErrorKind::Format);
        assert_eq!(acc.error_count(), 2);
    }

    #[test]
    fn values_overwrite() {
        let acc = Accumulator::new()
            .set_field_value("year", 2023)
            .set_field_value("year", 2024);
        assert_eq!(acc.field_value("year"), Some(&Value::Int(2024)));
    }

    #[test]
    fn setting_a_value_does_not_clear_errors() {
        let acc = Accumulator::new()
            .add_field_error("year", FieldError::NotInteger)
            .set_field_value("year", 2024);
        assert!(acc.has_field_errors("year"));
        assert!(acc.field_value("year").is_some());
    }

    #[test]
    fn field_and_global_flags_differ() {
        let acc = Accumulator::new().add_field_error("a", "bad");
        assert!(acc.has_errors());
        assert!(acc.has_field_errors("a"));
        assert!(!acc.has_field_errors("b"));
        assert!(acc.is_blocked(ShortCircuitScope::Global, "b"));
        assert!(!acc.is_blocked(ShortCircuitScope::Field, "b"));
    }

    #[test]
    fn record_routes_outcome() {
        let acc = Accumulator::new()
            .record("ok", Validation::success(Value::from(3)))
            .record("bad", Validation::failure(FieldError::NotInteger));
        assert_eq!(acc.field_value("ok"), Some(&Value::Int(3)));
        assert_eq!(acc.field_errors("bad"), &[FieldError::NotInteger]);
        assert_eq!(acc.field_value("bad"), None);
    }

    #[test]
    fn into_validation_reports_everything() {
        let clean = Accumulator::new().set_field_value("a", 1).set_field_value("b", 2);
        match clean.into_validation() {
            Validation::Success(values) => assert_eq!(values.len(), 2),
            Validation::Failure(errors) => panic!("unexpected errors: {:?}", errors),
        }

        let dirty = Accumulator::new()
            .set_field_value("a", 1)
            .add_field_error("b", "bad")
            .add_field_error("c", "worse");
        let errors = dirty.into_result().expect_err("should fail");
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn combine_merges_sub_pipelines() {
        let applicant = Accumulator::new()
            .set_field_value("name", "Vera")
            .add_field_error("email", FieldError::InvalidEmail);
        let schedule = Accumulator::new()
            .set_field_value("nights", 3)
            .add_field_error("email", "Already registered");

        let merged = applicant.combine(schedule);
        assert_eq!(merged.values().len(), 2);
        assert_eq!(
            merged.messages("email"),
            vec!["Must be a valid email address", "Already registered"]
        );
    }

    #[test]
    fn combine_is_associative() {
        let a = Accumulator::new().add_field_error("k", "1").set_field_value("v", 1);
        let b = Accumulator::new().add_field_error("k", "2").set_field_value("v", 2);
        let c = Accumulator::new().add_field_error("j", "3").set_field_value("v", 3);

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }

    #[test]
    fn merge_is_combine() {
        let a = Accumulator::new().add_field_error("k", "1");
        let b = Accumulator::new().add_field_error("k", "2");
        assert_eq!(a.clone().merge(b.clone()), a.combine(b));
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn rejected_field_is_logged() {
            let _acc = Accumulator::new().add_field_error("start_year", FieldError::NotInteger);
            assert!(logs_contain("field rejected"));
            assert!(logs_contain("start_year"));
        }

        #[traced_test]
        #[test]
        fn closed_gate_is_logged() {
            let _acc = Accumulator::new()
                .add_field_error("title", FieldError::Required)
                .continue_unless(ShortCircuitScope::Global, "start", |acc| acc);
            assert!(logs_contain("short-circuit"));
        }

        #[traced_test]
        #[test]
        fn open_gate_is_silent() {
            let _acc = Accumulator::new().continue_unless(ShortCircuitScope::Field, "start", |acc| {
                acc.set_field_value("start", 1)
            });
            assert!(!logs_contain("short-circuit"));
        }
    }
}
