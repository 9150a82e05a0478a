//! Fill options for the populator and fixture builder.
//!
//! [`FillOptions`] is a plain value passed to every fixture call; there are no
//! process-wide defaults to mutate. It serializes with camelCase keys so
//! provider tables can be written as JSON:
//!
//! ```rust
//! use api_fixtures::FillOptions;
//!
//! let options = FillOptions::from_json(
//!     r#"{"emailDomain": "example.org", "excludeProperties": ["sladay"]}"#,
//! )?;
//! assert_eq!(options.email_domain, "example.org");
//! assert!(options.only_fill_when_empty);
//! assert!(options.is_excluded("SLADay"));
//! # Ok::<(), api_fixtures::FixtureError>(())
//! ```

use crate::error::{FixtureError, FixtureResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Email domain used when none is configured.
pub const DEFAULT_EMAIL_DOMAIN: &str = "zensar.com";

/// Letters in generated `Auto_` tokens when none is configured.
pub const DEFAULT_AUTO_LETTERS: usize = 5;

/// Case-insensitive set of field names the populator must not touch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field name. Returns `false` if it was already present.
    pub fn insert(&mut self, name: impl AsRef<str>) -> bool {
        self.names.insert(name.as_ref().to_lowercase())
    }

    /// Whether `name` is excluded, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    /// Number of excluded names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Excluded names, lower-cased, in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for ExclusionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl From<Vec<String>> for ExclusionSet {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<ExclusionSet> for Vec<String> {
    fn from(set: ExclusionSet) -> Self {
        set.names.into_iter().collect()
    }
}

/// Options controlling how unset fields are synthesized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FillOptions {
    /// Domain appended to synthesized email local parts
    pub email_domain: String,
    /// Never overwrite a value the seed already set
    pub only_fill_when_empty: bool,
    /// Length of generated alphabetic tokens
    pub auto_letters: usize,
    /// Field names skipped entirely, matched case-insensitively
    pub exclude_properties: ExclusionSet,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
            only_fill_when_empty: true,
            auto_letters: DEFAULT_AUTO_LETTERS,
            exclude_properties: ExclusionSet::new(),
        }
    }
}

impl FillOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the email domain.
    pub fn with_email_domain(mut self, domain: impl Into<String>) -> Self {
        self.email_domain = domain.into();
        self
    }

    /// Set whether existing values are preserved.
    pub fn with_only_fill_when_empty(mut self, only_when_empty: bool) -> Self {
        self.only_fill_when_empty = only_when_empty;
        self
    }

    /// Set the generated token length.
    pub fn with_auto_letters(mut self, letters: usize) -> Self {
        self.auto_letters = letters;
        self
    }

    /// Exclude a field name from population.
    pub fn exclude(mut self, name: impl AsRef<str>) -> Self {
        self.exclude_properties.insert(name);
        self
    }

    /// Exclude several field names from population.
    pub fn exclude_all<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_properties.extend(names);
        self
    }

    /// Whether `name` is excluded, ignoring case.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude_properties.contains(name)
    }

    /// Check that the options can produce well-formed values.
    pub fn validate(&self) -> FixtureResult<()> {
        let domain = self.email_domain.trim();
        if domain.is_empty() {
            return Err(FixtureError::invalid_options("email domain cannot be empty"));
        }
        if domain.contains('@') || domain.chars().any(char::is_whitespace) {
            return Err(FixtureError::invalid_options(format!(
                "email domain '{}' is not a bare domain",
                self.email_domain
            )));
        }
        if self.auto_letters == 0 {
            return Err(FixtureError::invalid_options(
                "auto letters must be at least 1 so generated tokens are not bare prefixes",
            ));
        }
        Ok(())
    }

    /// Parse options from JSON and validate them.
    pub fn from_json(json: &str) -> FixtureResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Serialize options to JSON.
    pub fn to_json(&self) -> FixtureResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
