// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-instance config center options.
//!
//! Base path, call timeout and sentinel environment are fields of each facade rather
//! than process-wide constants, so instances with different settings can coexist.

use crate::domain::environment::DEFAULT_SENTINEL;
use crate::domain::errors::{ConfigError, Result};
use crate::domain::layout::{DEFAULT_BASE_PATH, SEPARATOR};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Time budget applied to every store call unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Maximum size of an options file (prevents DoS)
#[cfg(feature = "yaml")]
const MAX_OPTIONS_FILE_SIZE: u64 = 64 * 1024;

/// Options controlling key layout and call deadlines.
///
/// Every field has a default, so a partial document deserializes cleanly. The timeout
/// is expressed in milliseconds as `timeout_ms` when (de)serialized.
///
/// # Examples
///
/// ```
/// use configcenter::domain::CenterOptions;
/// use std::time::Duration;
///
/// let options = CenterOptions::default();
/// assert_eq!(options.base_path, "/config_center");
/// assert_eq!(options.timeout, Duration::from_secs(15));
/// assert_eq!(options.sentinel_environment, "_");
/// assert!(options.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenterOptions {
    /// Root of the keyspace, without a trailing separator
    pub base_path: String,
    /// Deadline applied independently to each store call
    #[serde(rename = "timeout_ms", with = "millis")]
    pub timeout: Duration,
    /// Environment used when the caller supplies a blank one
    pub sentinel_environment: String,
}

impl CenterOptions {
    /// Checks that the options describe a usable keyspace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOptions`] if the base path is empty or ends with
    /// the separator, the timeout is zero, or the sentinel is blank or contains the
    /// separator.
    pub fn validate(&self) -> Result<()> {
        if self.base_path.is_empty() {
            return Err(invalid("base path must not be empty"));
        }
        if self.base_path.ends_with(SEPARATOR) {
            return Err(invalid("base path must not end with '/'"));
        }
        if self.timeout.is_zero() {
            return Err(invalid("timeout must be non-zero"));
        }
        if self.sentinel_environment.trim().is_empty() {
            return Err(invalid("sentinel environment must not be blank"));
        }
        if self.sentinel_environment.contains(SEPARATOR) {
            return Err(invalid("sentinel environment must not contain '/'"));
        }
        Ok(())
    }

    /// Parses and validates options from a YAML document.
    ///
    /// # Examples
    ///
    /// ```
    /// use configcenter::domain::CenterOptions;
    /// use std::time::Duration;
    ///
    /// let options = CenterOptions::from_yaml_str("timeout_ms: 2500\n").unwrap();
    /// assert_eq!(options.timeout, Duration::from_millis(2500));
    /// assert_eq!(options.base_path, "/config_center");
    /// ```
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let options: CenterOptions =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Invalid options YAML: {}", e),
                source: Some(Box::new(e)),
            })?;
        options.validate()?;
        Ok(options)
    }

    /// Reads, parses and validates options from a YAML file.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let metadata = std::fs::metadata(path)?;
        if metadata.len() > MAX_OPTIONS_FILE_SIZE {
            return Err(ConfigError::ParseError {
                message: format!(
                    "Options file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_OPTIONS_FILE_SIZE
                ),
                source: None,
            });
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}

impl Default for CenterOptions {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
            sentinel_environment: DEFAULT_SENTINEL.to_string(),
        }
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::InvalidOptions {
        message: message.to_string(),
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
