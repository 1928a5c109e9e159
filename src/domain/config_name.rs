// SPDX-License-Identifier: MIT OR Apache-2.0

//! Config name newtype for validated document names.
//!
//! This module provides the `ConfigName` type, which wraps the caller-supplied name
//! of one configuration document within an environment. Names are used verbatim as
//! the last segment of a store key, so anything that would move the key into a
//! different part of the hierarchy is rejected up front.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::layout::SEPARATOR;
use std::fmt;

/// A validated configuration document name.
///
/// A name must be non-empty and must not contain the path separator `/`. No other
/// normalization is applied: surrounding whitespace, dots and unicode are kept as-is.
///
/// # Examples
///
/// ```
/// use configcenter::domain::ConfigName;
///
/// let name = ConfigName::parse("xx125").unwrap();
/// assert_eq!(name.as_str(), "xx125");
///
/// assert!(ConfigName::parse("nested/name").is_err());
/// assert!(ConfigName::parse("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConfigName(String);

impl ConfigName {
    /// Validates `name` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidName`] if the name is empty or contains `/`.
    pub fn parse(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(ConfigError::InvalidName {
                name: name.to_string(),
                reason: "name is empty",
            });
        }
        if name.contains(SEPARATOR) {
            return Err(ConfigError::InvalidName {
                name: name.to_string(),
                reason: "contains the path separator",
            });
        }
        Ok(ConfigName(name.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigName` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for ConfigName {
    type Error = ConfigError;

    fn try_from(name: &str) -> Result<Self> {
        ConfigName::parse(name)
    }
}

impl TryFrom<String> for ConfigName {
    type Error = ConfigError;

    fn try_from(name: String) -> Result<Self> {
        ConfigName::parse(&name)
    }
}

impl From<ConfigName> for String {
    fn from(name: ConfigName) -> Self {
        name.0
    }
}

impl AsRef<str> for ConfigName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
