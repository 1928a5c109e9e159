// SPDX-License-Identifier: MIT OR Apache-2.0

//! Config center service trait definition.
//!
//! This module defines the `ConfigCenterService` trait, which is the main interface
//! for reading, writing, removing and listing configuration documents within one
//! environment.

use crate::domain::{Environment, Result};
use async_trait::async_trait;
use std::collections::HashMap;

/// The main config center trait.
///
/// Implementations address documents by name only; the environment is fixed when the
/// implementation is constructed.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use configcenter::domain::{ConfigCenterService, ConfigError, Environment, Result};
/// use std::collections::HashMap;
///
/// struct Empty(Environment);
///
/// #[async_trait]
/// impl ConfigCenterService for Empty {
///     fn environment(&self) -> &Environment {
///         &self.0
///     }
///
///     async fn get_config(&self, name: &str) -> Result<String> {
///         Err(ConfigError::NoConfig {
///             name: name.to_string(),
///             key: name.to_string(),
///         })
///     }
///
///     async fn set_config(&self, _name: &str, _content: &str) -> Result<()> {
///         Ok(())
///     }
///
///     async fn remove_config(&self, _name: &str) -> Result<()> {
///         Ok(())
///     }
///
///     async fn list_config(&self) -> Result<HashMap<String, String>> {
///         Ok(HashMap::new())
///     }
/// }
/// ```
#[async_trait]
pub trait ConfigCenterService: Send + Sync {
    /// Returns the normalized environment this service is scoped to.
    fn environment(&self) -> &Environment;

    /// Retrieves the document stored under `name`.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::NoConfig`](crate::domain::ConfigError::NoConfig) - nothing is
    ///   stored under `name`
    /// * [`ConfigError::Timeout`](crate::domain::ConfigError::Timeout) - the store did
    ///   not answer in time
    /// * [`ConfigError::Transport`](crate::domain::ConfigError::Transport) - the store
    ///   failed
    async fn get_config(&self, name: &str) -> Result<String>;

    /// Stores `content` under `name`, replacing any previous document.
    async fn set_config(&self, name: &str, content: &str) -> Result<()>;

    /// Removes the document stored under `name`.
    ///
    /// Removing a document that does not exist succeeds.
    async fn remove_config(&self, name: &str) -> Result<()>;

    /// Returns every document in the environment, keyed by name.
    ///
    /// An environment without documents yields an empty map rather than an error.
    async fn list_config(&self) -> Result<HashMap<String, String>>;
}
