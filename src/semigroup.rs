//! Semigroup trait for associative combination
//!
//! Independent sub-pipelines (say, the applicant section and the scheduling
//! section of a proposal form) can be validated into separate accumulators and
//! merged afterwards. Merging must not depend on grouping, which is exactly
//! the semigroup law:
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use meridian::Semigroup;
//!
//! // Error lists concatenate in order
//! assert_eq!(vec!["a"].combine(vec!["b"]), vec!["a", "b"]);
//!
//! // Maps combine per key
//! let left = BTreeMap::from([("year", vec!["too early"])]);
//! let right = BTreeMap::from([("year", vec!["not a number"]), ("day", vec!["missing"])]);
//! let merged = left.combine(right);
//! assert_eq!(merged["year"], vec!["too early", "not a number"]);
//! assert_eq!(merged["day"], vec!["missing"]);
//! ```

use std::collections::BTreeMap;

/// A type that supports an associative binary operation
///
/// # Laws
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes both operands by value; clone first if you still need them.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

// Keys present on both sides combine their values; the rest are unioned.
impl<K: Ord, V: Semigroup> Semigroup for BTreeMap<K, V> {
    fn combine(mut self, other: Self) -> Self {
        for (key, value) in other {
            let merged = match self.remove(&key) {
                Some(existing) => existing.combine(value),
                None => value,
            };
            self.insert(key, merged);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_semigroup() {
        assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_vec_semigroup_empty() {
        let empty: Vec<i32> = vec![];
        assert_eq!(empty.combine(vec![1]), vec![1]);
    }

    #[test]
    fn test_map_disjoint_keys_union() {
        let a = BTreeMap::from([("a", vec![1])]);
        let b = BTreeMap::from([("b", vec![2])]);
        let merged = a.combine(b);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged["a"], vec![1]);
        assert_eq!(merged["b"], vec![2]);
    }

    #[test]
    fn test_map_shared_key_preserves_order() {
        let a = BTreeMap::from([("k", vec!["first"])]);
        let b = BTreeMap::from([("k", vec!["second", "third"])]);
        assert_eq!(a.combine(b)["k"], vec!["first", "second", "third"]);
    }

    #[test]
    fn test_map_associativity() {
        let a = BTreeMap::from([("x", vec![1]), ("y", vec![2])]);
        let b = BTreeMap::from([("x", vec![3])]);
        let c = BTreeMap::from([("y", vec![4]), ("z", vec![5])]);

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }
}
