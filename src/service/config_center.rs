// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store-backed config center.
//!
//! This module provides `ConfigCenter`, the facade that maps config names within one
//! environment onto store keys and bounds every store call with a deadline.

use crate::domain::{
    CenterOptions, ConfigCenterService, ConfigError, ConfigName, Environment, KeyLayout,
    Operation, Result,
};
use crate::ports::KvStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Config center over a shared key-value store.
///
/// Documents live at `<base>/<environment>/<name>`. The facade holds only immutable
/// state, so one instance can serve concurrent callers without locking. Each call
/// gets its own deadline; nothing is retried.
///
/// # Examples
///
/// ```rust
/// use configcenter::prelude::*;
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() -> Result<()> {
/// let center = ConfigCenter::new(Arc::new(MemoryStore::new()), "test");
///
/// center.set_config("xx125", "a=b\nc=1\n").await?;
/// assert_eq!(center.get_config("xx125").await?, "a=b\nc=1\n");
///
/// center.remove_config("xx125").await?;
/// assert!(center.get_config("xx125").await.unwrap_err().is_not_found());
/// # Ok(())
/// # }
/// ```
pub struct ConfigCenter<S: ?Sized> {
    /// Shared store handle; its connection lifecycle belongs to the caller
    store: Arc<S>,
    /// Normalized environment
    environment: Environment,
    /// Key construction and inversion
    layout: KeyLayout,
    /// Per-call deadline
    timeout: Duration,
}

impl<S: KvStore + ?Sized> ConfigCenter<S> {
    /// Creates a config center with default options.
    ///
    /// The environment is trimmed of surrounding whitespace; a blank environment
    /// becomes `"_"`. This cannot fail.
    pub fn new(store: Arc<S>, environment: &str) -> Self {
        let options = CenterOptions::default();
        Self::from_parts(store, environment, options)
    }

    /// Creates a config center with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOptions`] if `options` fail validation.
    pub fn with_options(store: Arc<S>, environment: &str, options: CenterOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::from_parts(store, environment, options))
    }

    /// Creates a builder for a config center over `store`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use configcenter::prelude::*;
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// # fn main() -> Result<()> {
    /// let center = ConfigCenter::builder(Arc::new(MemoryStore::new()))
    ///     .environment("prod")
    ///     .base_path("/services/config")
    ///     .timeout(Duration::from_secs(3))
    ///     .build()?;
    ///
    /// assert_eq!(center.config_key("db")?, "/services/config/prod/db");
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder(store: Arc<S>) -> ConfigCenterBuilder<S> {
        ConfigCenterBuilder::new(store)
    }

    fn from_parts(store: Arc<S>, environment: &str, options: CenterOptions) -> Self {
        Self {
            store,
            environment: Environment::with_sentinel(environment, &options.sentinel_environment),
            layout: KeyLayout::new(options.base_path),
            timeout: options.timeout,
        }
    }

    /// Returns the shared store handle.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Returns the key layout.
    pub fn layout(&self) -> &KeyLayout {
        &self.layout
    }

    /// Returns the deadline applied to each store call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the store key a document named `name` lives at.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidName`] if `name` is empty or contains `/`.
    pub fn config_key(&self, name: &str) -> Result<String> {
        let name = ConfigName::parse(name)?;
        Ok(self.layout.config_key(&self.environment, &name))
    }

    /// Returns the prefix shared by every key of this environment.
    pub fn environment_prefix(&self) -> String {
        self.layout.environment_prefix(&self.environment)
    }

    /// Runs one store call under the per-call deadline.
    async fn bounded<T, F>(&self, operation: Operation, key: &str, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>> + Send,
    {
        tracing::debug!(
            store = self.store.name(),
            %operation,
            key,
            "config center store call"
        );

        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    store = self.store.name(),
                    %operation,
                    key,
                    timeout = ?self.timeout,
                    "config center store call timed out"
                );
                Err(ConfigError::Timeout {
                    operation,
                    key: key.to_string(),
                    timeout: self.timeout,
                })
            }
        }
    }
}

impl<S: ?Sized> Clone for ConfigCenter<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            environment: self.environment.clone(),
            layout: self.layout.clone(),
            timeout: self.timeout,
        }
    }
}

impl<S: KvStore + ?Sized> std::fmt::Debug for ConfigCenter<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigCenter")
            .field("store", &self.store.name())
            .field("environment", &self.environment)
            .field("layout", &self.layout)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait]
impl<S: KvStore + ?Sized> ConfigCenterService for ConfigCenter<S> {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_config(&self, name: &str) -> Result<String> {
        let name = ConfigName::parse(name)?;
        let key = self.layout.config_key(&self.environment, &name);

        let kvs = self
            .bounded(Operation::Get, &key, self.store.get(&key))
            .await?;

        match kvs.into_iter().next() {
            Some(kv) => Ok(kv.value),
            None => Err(ConfigError::NoConfig {
                name: name.into_string(),
                key,
            }),
        }
    }

    async fn set_config(&self, name: &str, content: &str) -> Result<()> {
        let name = ConfigName::parse(name)?;
        let key = self.layout.config_key(&self.environment, &name);

        self.bounded(Operation::Set, &key, self.store.put(&key, content))
            .await
    }

    async fn remove_config(&self, name: &str) -> Result<()> {
        let name = ConfigName::parse(name)?;
        let key = self.layout.config_key(&self.environment, &name);

        self.bounded(Operation::Remove, &key, self.store.delete(&key))
            .await
    }

    async fn list_config(&self) -> Result<HashMap<String, String>> {
        let prefix = self.environment_prefix();

        let kvs = self
            .bounded(Operation::List, &prefix, self.store.get_prefix(&prefix))
            .await?;

        let mut configs = HashMap::with_capacity(kvs.len());
        for kv in kvs {
            match KeyLayout::name_from_key(&prefix, &kv.key) {
                Some(name) => {
                    configs.insert(name.to_string(), kv.value);
                }
                None => tracing::trace!(key = %kv.key, "skipping key without a config name"),
            }
        }

        Ok(configs)
    }
}

/// Builder for constructing a `ConfigCenter`.
///
/// This builder provides a fluent interface for choosing the environment and the
/// per-instance options. Options are validated by [`build`](Self::build).
pub struct ConfigCenterBuilder<S: ?Sized> {
    store: Arc<S>,
    environment: String,
    options: CenterOptions,
}

impl<S: KvStore + ?Sized> ConfigCenterBuilder<S> {
    /// Creates a new builder with a blank environment and default options.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            environment: String::new(),
            options: CenterOptions::default(),
        }
    }

    /// Sets the raw environment name. It is normalized by `build`.
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Replaces all options at once.
    pub fn options(mut self, options: CenterOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the base path of the keyspace.
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.options.base_path = base_path.into();
        self
    }

    /// Sets the deadline applied to each store call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    /// Sets the environment used when the configured one is blank.
    pub fn sentinel_environment(mut self, sentinel: impl Into<String>) -> Self {
        self.options.sentinel_environment = sentinel.into();
        self
    }

    /// Builds the config center.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOptions`] if the options fail validation.
    pub fn build(self) -> Result<ConfigCenter<S>> {
        ConfigCenter::with_options(self.store, &self.environment, self.options)
    }
}
