// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment newtype for normalized deployment scopes.
//!
//! An environment (e.g. `test`, `prod`) scopes a set of configuration documents. The
//! raw string a caller supplies is normalized once, when the `Environment` is built.

use std::fmt;

/// The environment substituted when the caller supplies a blank name.
pub const DEFAULT_SENTINEL: &str = "_";

/// Characters stripped from both ends of a raw environment name.
const TRIMMED: [char; 4] = [' ', '\t', '\r', '\n'];

/// A normalized environment name.
///
/// Surrounding spaces, tabs, carriage returns and line feeds are stripped. If
/// nothing is left, the sentinel environment is used instead. Normalization
/// cannot fail.
///
/// # Examples
///
/// ```
/// use configcenter::domain::Environment;
///
/// assert_eq!(Environment::new(" prod\n").as_str(), "prod");
/// assert_eq!(Environment::new(" \t ").as_str(), "_");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Environment(String);

impl Environment {
    /// Normalizes `raw` using the default sentinel `"_"`.
    pub fn new(raw: &str) -> Self {
        Self::with_sentinel(raw, DEFAULT_SENTINEL)
    }

    /// Normalizes `raw`, falling back to `sentinel` if it is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use configcenter::domain::Environment;
    ///
    /// let env = Environment::with_sentinel("", "default");
    /// assert_eq!(env.as_str(), "default");
    /// ```
    pub fn with_sentinel(raw: &str, sentinel: &str) -> Self {
        let trimmed = raw.trim_matches(&TRIMMED[..]);
        if trimmed.is_empty() {
            Environment(sentinel.to_string())
        } else {
            Environment(trimmed.to_string())
        }
    }

    /// Returns the environment as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `Environment` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Environment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_plain() {
        assert_eq!(Environment::new("test").as_str(), "test");
    }

    #[test]
    fn test_environment_trims_whitespace() {
        assert_eq!(Environment::new("  prod \t\r\n").as_str(), "prod");
    }

    #[test]
    fn test_environment_keeps_inner_whitespace() {
        assert_eq!(Environment::new(" eu west ").as_str(), "eu west");
    }

    #[test]
    fn test_environment_blank_uses_sentinel() {
        assert_eq!(Environment::new("").as_str(), "_");
        assert_eq!(Environment::new("  ").as_str(), "_");
        assert_eq!(Environment::new("\r\n\t ").as_str(), "_");
    }

    #[test]
    fn test_environment_blank_equals_explicit_sentinel() {
        assert_eq!(Environment::new("  "), Environment::new("_"));
    }

    #[test]
    fn test_environment_other_whitespace_not_trimmed() {
        // Only space, tab, CR and LF are stripped.
        let env = Environment::new("\u{0B}prod");
        assert_eq!(env.as_str(), "\u{0B}prod");
    }

    #[test]
    fn test_environment_custom_sentinel() {
        let env = Environment::with_sentinel("\n", "default");
        assert_eq!(env.as_str(), "default");
    }

    #[test]
    fn test_environment_display_and_into_string() {
        let env = Environment::new("staging");
        assert_eq!(format!("{}", env), "staging");
        assert_eq!(env.into_string(), "staging");
    }
}
