//! Deployment rules
//!
//! The allow-lists and limits that vary between installations. [`Rules::default`]
//! carries the built-in tables; with the `serde` feature a TOML document can
//! override any subset of them:
//!
//! ```toml
//! shells = ["/bin/bash", "/bin/zsh"]
//! username_max_len = 16
//! ```

use crate::error::ConfigError;
use crate::primitive::{current_year, Bounds, YEARS_AHEAD};

/// Login shells a guest account may be given.
pub const DEFAULT_SHELLS: &[&str] = &["/bin/bash", "/bin/csh", "/bin/sh", "/bin/tcsh", "/bin/zsh"];

/// Session codes that stand for engineering time rather than a science
/// session.
pub const DEFAULT_ENGINEERING_CODES: &[&str] = &["tisanpwd", "engineering"];

/// Longest accepted username.
pub const DEFAULT_USERNAME_MAX_LEN: usize = 12;

/// Installation-specific validation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Rules {
    /// Allowed login shells
    pub shells: Vec<String>,
    /// Session codes accepted as engineering time
    pub engineering_codes: Vec<String>,
    /// Longest accepted username
    pub username_max_len: usize,
    /// Years past the current one a year field accepts
    pub year_lookahead: i64,
    /// Accepted upload MIME types for
    /// [`validate_uploaded_file`](crate::primitive::validate_uploaded_file);
    /// empty accepts any
    pub upload_types: Vec<String>,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            shells: DEFAULT_SHELLS.iter().map(|s| s.to_string()).collect(),
            engineering_codes: DEFAULT_ENGINEERING_CODES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            username_max_len: DEFAULT_USERNAME_MAX_LEN,
            year_lookahead: YEARS_AHEAD,
            upload_types: Vec::new(),
        }
    }
}

impl Rules {
    /// Check that the rules can be used at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shells.is_empty() {
            return Err(ConfigError::Invalid("shells must not be empty".into()));
        }
        if self.username_max_len == 0 {
            return Err(ConfigError::Invalid(
                "username_max_len must be at least 1".into(),
            ));
        }
        if self.year_lookahead < 0 {
            return Err(ConfigError::Invalid(format!(
                "year_lookahead must not be negative, got {}",
                self.year_lookahead
            )));
        }
        Ok(())
    }

    /// Year bounds honouring the configured look-ahead.
    ///
    /// ```
    /// use meridian::primitive::current_year;
    /// use meridian::rules::Rules;
    ///
    /// let rules = Rules { year_lookahead: 1, ..Rules::default() };
    /// assert_eq!(rules.year_bounds().max, Some(current_year() + 1));
    /// ```
    pub fn year_bounds(&self) -> Bounds {
        Bounds::at_most(current_year() + self.year_lookahead)
    }

    /// Parse rules from TOML, falling back to defaults for missing keys.
    ///
    /// ```
    /// use meridian::rules::Rules;
    ///
    /// let rules = Rules::from_toml_str(r#"shells = ["/bin/zsh"]"#).unwrap();
    /// assert_eq!(rules.shells, vec!["/bin/zsh"]);
    /// assert_eq!(rules.username_max_len, 12);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let rules: Rules = toml::from_str(source)?;
        rules.validate()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            shells = rules.shells.len(),
            engineering_codes = rules.engineering_codes.len(),
            "loaded validation rules"
        );
        Ok(rules)
    }
}
