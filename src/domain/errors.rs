// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the config center.
//!
//! This module defines the errors that can occur when reading, writing, removing or
//! listing configuration documents. All errors use `thiserror` for proper error
//! handling and conversion.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// The store operation a config center call was performing.
///
/// Carried by [`ConfigError::Timeout`] and used as a field in log events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Point read of a single document.
    Get,
    /// Upsert of a single document.
    Set,
    /// Removal of a single document.
    Remove,
    /// Prefix scan over an environment.
    List,
}

impl Operation {
    /// Returns the lowercase name of the operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Get => "get",
            Operation::Set => "set",
            Operation::Remove => "remove",
            Operation::List => "list",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The main error type for config center operations.
///
/// `NoConfig`, `Timeout` and `Transport` are deliberately separate so callers can
/// treat "not configured" differently from "backend unreachable" and from "backend
/// too slow". It is marked as `#[non_exhaustive]` to allow for future additions
/// without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use configcenter::domain::errors::ConfigError;
///
/// fn lookup() -> Result<String, ConfigError> {
///     Err(ConfigError::NoConfig {
///         name: "database".to_string(),
///         key: "/config_center/prod/database".to_string(),
///     })
/// }
///
/// assert!(lookup().unwrap_err().is_not_found());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A point read found no document under the computed key.
    #[error("No config '{name}' in store (key {key})")]
    NoConfig {
        /// The config name that was requested
        name: String,
        /// The store key that was read
        key: String,
    },

    /// The per-call time budget elapsed before the store answered.
    #[error("Config {operation} on '{key}' timed out after {timeout:?}")]
    Timeout {
        /// The operation that timed out
        operation: Operation,
        /// The key or prefix being accessed
        key: String,
        /// The budget that elapsed
        timeout: Duration,
    },

    /// The store reported a failure.
    #[error("Store '{store}' error: {message}")]
    Transport {
        /// The name of the store that failed
        store: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A config name was rejected before reaching the store.
    #[error("Invalid config name '{name}': {reason}")]
    InvalidName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Config center options failed validation.
    #[error("Invalid config center options: {message}")]
    InvalidOptions {
        /// The error message
        message: String,
    },

    /// The store returned a key or value that is not valid UTF-8.
    #[error("Store returned non UTF-8 data for key '{key}'")]
    InvalidEncoding {
        /// The key, lossily decoded
        key: String,
    },

    /// Failed to parse an options file.
    #[error("Failed to parse options: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a `Transport` error wrapping an underlying store error.
    pub fn transport<E>(store: &str, message: impl Into<String>, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConfigError::Transport {
            store: store.to_string(),
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }

    /// Returns `true` if no document existed for a point read.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::NoConfig { .. })
    }

    /// Returns `true` if the per-call deadline elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ConfigError::Timeout { .. })
    }

    /// Returns `true` if the store itself reported a failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, ConfigError::Transport { .. })
    }
}

/// A specialized Result type for config center operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
