//! String predicates
//!
//! Lengths are counted in characters, not bytes, so a name with accents is
//! measured the way the person typing it would count.

use once_cell::sync::Lazy;
use regex::Regex;

use super::combinators::Predicate;

// HTML5 "valid e-mail address" grammar.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

impl Predicate<String> for NotEmpty {
    #[inline]
    fn check(&self, value: &String) -> bool {
        !value.is_empty()
    }
}

/// Create a predicate that checks if a string is not empty.
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks character count is in range.
#[derive(Clone, Copy, Debug)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl Predicate<str> for LenBetween {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let len = value.chars().count();
        len >= self.min && len <= self.max
    }
}

impl Predicate<String> for LenBetween {
    #[inline]
    fn check(&self, value: &String) -> bool {
        Predicate::<str>::check(self, value.as_str())
    }
}

/// Create a predicate that checks if a string has at most `max` characters.
///
/// # Example
///
/// ```rust
/// use meridian::predicate::*;
///
/// assert!(len_max(5).check("Keck1"));
/// assert!(len_max(5).check(""));
/// assert!(!len_max(5).check("Subaru"));
/// ```
pub fn len_max(max: usize) -> LenBetween {
    LenBetween { min: 0, max }
}

/// Create a predicate that checks if a string has exactly `len` characters.
///
/// # Example
///
/// ```rust
/// use meridian::predicate::*;
///
/// assert!(len_eq(5).check("2024A"));
/// assert!(!len_eq(5).check("2024"));
/// ```
pub fn len_eq(len: usize) -> LenBetween {
    LenBetween { min: len, max: len }
}

/// Predicate that checks if all characters satisfy a predicate.
#[derive(Clone, Copy, Debug)]
pub struct AllChars<F>(pub F);

impl<F: Fn(char) -> bool + Send + Sync> Predicate<str> for AllChars<F> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().all(&self.0)
    }
}

impl<F: Fn(char) -> bool + Send + Sync> Predicate<String> for AllChars<F> {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.chars().all(&self.0)
    }
}

/// Create a predicate that checks if all characters satisfy a condition.
pub fn all_chars<F: Fn(char) -> bool + Send + Sync>(f: F) -> AllChars<F> {
    AllChars(f)
}

/// Create a predicate that checks if all characters are ASCII letters or digits.
///
/// Vacuously true for the empty string; pair with [`not_empty`] to reject it.
///
/// # Example
///
/// ```rust
/// use meridian::predicate::*;
///
/// assert!(is_ascii_alphanumeric().check("AB12CD34EF"));
/// assert!(!is_ascii_alphanumeric().check("AB12-D34EF"));
/// assert!(!is_ascii_alphanumeric().check("résumé"));
/// ```
pub fn is_ascii_alphanumeric() -> AllChars<fn(char) -> bool> {
    AllChars(|c| c.is_ascii_alphanumeric())
}

/// Predicate that checks a string is a syntactically valid e-mail address.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsEmail;

impl Predicate<str> for IsEmail {
    #[inline]
    fn check(&self, value: &str) -> bool {
        EMAIL_RE.is_match(value)
    }
}

impl Predicate<String> for IsEmail {
    #[inline]
    fn check(&self, value: &String) -> bool {
        EMAIL_RE.is_match(value)
    }
}

/// Create a predicate that accepts e-mail addresses.
///
/// # Example
///
/// ```rust
/// use meridian::predicate::*;
///
/// assert!(is_email().check("observer@example.org"));
/// assert!(!is_email().check("observer@"));
/// assert!(!is_email().check("two@@example.org"));
/// ```
pub fn is_email() -> IsEmail {
    IsEmail
}

/// Predicate that checks membership in a fixed list of strings.
#[derive(Clone, Copy, Debug)]
pub struct OneOf<'a, S> {
    allowed: &'a [S],
    ignore_case: bool,
}

impl<S: AsRef<str> + Sync> OneOf<'_, S> {
    fn contains(&self, value: &str) -> bool {
        self.allowed.iter().any(|candidate| {
            let candidate = candidate.as_ref();
            if self.ignore_case {
                candidate.eq_ignore_ascii_case(value)
            } else {
                candidate == value
            }
        })
    }
}

impl<S: AsRef<str> + Sync> Predicate<str> for OneOf<'_, S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.contains(value)
    }
}

impl<S: AsRef<str> + Sync> Predicate<String> for OneOf<'_, S> {
    #[inline]
    fn check(&self, value: &String) -> bool {
        self.contains(value)
    }
}

/// Create a predicate that accepts exactly the listed strings.
///
/// # Example
///
/// ```rust
/// use meridian::predicate::*;
///
/// let shells = ["/bin/bash", "/bin/tcsh"];
/// assert!(one_of(&shells).check("/bin/bash"));
/// assert!(!one_of(&shells).check("/bin/BASH"));
/// ```
pub fn one_of<S: AsRef<str> + Sync>(allowed: &[S]) -> OneOf<'_, S> {
    OneOf {
        allowed,
        ignore_case: false,
    }
}

/// Create a predicate that accepts the listed strings in any ASCII case.
///
/// # Example
///
/// ```rust
/// use meridian::predicate::*;
///
/// assert!(one_of_ignore_case(&["A", "B"]).check("b"));
/// assert!(!one_of_ignore_case(&["A", "B"]).check("C"));
/// ```
pub fn one_of_ignore_case<S: AsRef<str> + Sync>(allowed: &[S]) -> OneOf<'_, S> {
    OneOf {
        allowed,
        ignore_case: true,
    }
}
