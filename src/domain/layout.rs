// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store key layout.
//!
//! Every configuration document lives at `<base>/<environment>/<name>`. This module
//! builds those keys and inverts them again when an environment is listed.

use crate::domain::{ConfigName, Environment};

/// The path separator used between key segments.
pub const SEPARATOR: char = '/';

/// Base path used when none is configured.
pub const DEFAULT_BASE_PATH: &str = "/config_center";

/// Maps (environment, name) pairs to store keys and back.
///
/// # Examples
///
/// ```
/// use configcenter::domain::{ConfigName, Environment, KeyLayout};
///
/// let layout = KeyLayout::default();
/// let env = Environment::new("test");
/// let name = ConfigName::parse("xx125").unwrap();
///
/// assert_eq!(layout.config_key(&env, &name), "/config_center/test/xx125");
/// assert_eq!(layout.environment_prefix(&env), "/config_center/test/");
/// assert_eq!(
///     KeyLayout::name_from_key("/config_center/test/", "/config_center/test/xx125"),
///     Some("xx125")
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyLayout {
    base_path: String,
}

impl KeyLayout {
    /// Creates a layout rooted at `base_path`.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Returns the base path.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the store key of `name` within `env`.
    pub fn config_key(&self, env: &Environment, name: &ConfigName) -> String {
        self.join(env, name.as_str())
    }

    /// Returns the prefix shared by every key of `env`.
    ///
    /// The trailing separator keeps `prod` from matching keys of `production`.
    pub fn environment_prefix(&self, env: &Environment) -> String {
        self.join(env, "")
    }

    /// Recovers a config name from a key returned by a scan over `prefix`.
    ///
    /// The name is what follows the environment prefix. A key equal to the prefix
    /// carries no name, and a remainder containing the separator belongs to a nested
    /// environment rather than to a valid config name; both yield `None`.
    pub fn name_from_key<'k>(prefix: &str, key: &'k str) -> Option<&'k str> {
        match key.strip_prefix(prefix) {
            Some(rest) if !rest.is_empty() && !rest.contains(SEPARATOR) => Some(rest),
            _ => None,
        }
    }

    fn join(&self, env: &Environment, last: &str) -> String {
        let mut key =
            String::with_capacity(self.base_path.len() + env.as_str().len() + last.len() + 2);
        key.push_str(&self.base_path);
        key.push(SEPARATOR);
        key.push_str(env.as_str());
        key.push(SEPARATOR);
        key.push_str(last);
        key
    }
}

impl Default for KeyLayout {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH)
    }
}
