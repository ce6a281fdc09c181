//! Number predicates

use super::combinators::Predicate;
use std::cmp::PartialOrd;

/// Predicate for value in range (inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T> Between<T> {
    /// Inclusive range, usable in constants.
    pub const fn new(min: T, max: T) -> Self {
        Between { min, max }
    }
}

impl<T: Copy> Between<T> {
    /// Inclusive lower bound.
    pub fn min(&self) -> T {
        self.min
    }

    /// Inclusive upper bound.
    pub fn max(&self) -> T {
        self.max
    }
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Create a predicate that checks if value is between min and max (inclusive).
///
/// An inverted range (`min > max`) accepts nothing.
///
/// # Example
///
/// ```rust
/// use meridian::predicate::*;
///
/// let month = between(1, 12);
/// assert!(month.check(&1));
/// assert!(month.check(&12));
/// assert!(!month.check(&0));
/// assert!(!month.check(&13));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_inclusive() {
        let p = between(0, 59);
        assert!(p.check(&0));
        assert!(p.check(&59));
        assert!(!p.check(&-1));
        assert!(!p.check(&60));
    }

    #[test]
    fn test_between_inverted_rejects_all() {
        let p = between(10, 1);
        assert!(!p.check(&5));
        assert!(!p.check(&1));
        assert!(!p.check(&10));
    }

    #[test]
    fn test_between_accessors() {
        let p = between(1900_i64, 2031);
        assert_eq!(p.min(), 1900);
        assert_eq!(p.max(), 2031);
    }
}
