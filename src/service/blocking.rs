// SPDX-License-Identifier: MIT OR Apache-2.0

//! Blocking wrapper around an async config center.
//!
//! Callers without an async runtime of their own can use `BlockingConfigCenter`, which
//! owns a tokio runtime and drives each operation to completion on it.

use crate::domain::{ConfigCenterService, Environment, Result};
use std::collections::HashMap;
use std::future::Future;
use tokio::runtime::Runtime;

/// Blocking facade over any [`ConfigCenterService`].
///
/// Every call blocks the current thread for at most the inner service's deadline.
/// Calling these methods from inside another tokio runtime panics, as with any
/// `Runtime::block_on`.
///
/// # Examples
///
/// ```rust
/// use configcenter::prelude::*;
/// use configcenter::service::BlockingConfigCenter;
/// use std::sync::Arc;
///
/// # fn main() -> Result<()> {
/// let center = BlockingConfigCenter::new(ConfigCenter::new(
///     Arc::new(MemoryStore::new()),
///     "test",
/// ))?;
///
/// center.set_config("xx125", "a=b\n")?;
/// assert_eq!(center.get_config("xx125")?, "a=b\n");
/// # Ok(())
/// # }
/// ```
pub struct BlockingConfigCenter<T> {
    /// Declared before `runtime` so it is dropped while the runtime still exists
    inner: T,
    runtime: Runtime,
}

impl<T: ConfigCenterService> BlockingConfigCenter<T> {
    /// Wraps an already constructed service in a new runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IoError`](crate::domain::ConfigError::IoError) if the
    /// runtime cannot be created.
    pub fn new(inner: T) -> Result<Self> {
        let runtime = Runtime::new()?;
        Ok(Self { inner, runtime })
    }

    /// Creates the runtime, then builds the service on it.
    ///
    /// Use this when constructing the service spawns background work, such as
    /// connecting an etcd client, so that work runs on the runtime that outlives it.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # #[cfg(feature = "etcd")]
    /// # fn main() -> configcenter::domain::Result<()> {
    /// use configcenter::prelude::*;
    /// use configcenter::service::BlockingConfigCenter;
    /// use std::sync::Arc;
    ///
    /// let center = BlockingConfigCenter::from_async(|| async {
    ///     let store = EtcdStore::connect(vec!["localhost:2379"], None).await?;
    ///     Ok(ConfigCenter::new(Arc::new(store), "prod"))
    /// })?;
    /// let configs = center.list_config()?;
    /// # Ok(())
    /// # }
    /// # #[cfg(not(feature = "etcd"))]
    /// # fn main() {}
    /// ```
    pub fn from_async<F, Fut>(build: F) -> Result<Self>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let runtime = Runtime::new()?;
        let inner = runtime.block_on(build())?;
        Ok(Self { inner, runtime })
    }

    /// Returns the wrapped service.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Returns the normalized environment.
    pub fn environment(&self) -> &Environment {
        self.inner.environment()
    }

    /// Blocking version of [`ConfigCenterService::get_config`].
    pub fn get_config(&self, name: &str) -> Result<String> {
        self.runtime.block_on(self.inner.get_config(name))
    }

    /// Blocking version of [`ConfigCenterService::set_config`].
    pub fn set_config(&self, name: &str, content: &str) -> Result<()> {
        self.runtime.block_on(self.inner.set_config(name, content))
    }

    /// Blocking version of [`ConfigCenterService::remove_config`].
    pub fn remove_config(&self, name: &str) -> Result<()> {
        self.runtime.block_on(self.inner.remove_config(name))
    }

    /// Blocking version of [`ConfigCenterService::list_config`].
    pub fn list_config(&self) -> Result<HashMap<String, String>> {
        self.runtime.block_on(self.inner.list_config())
    }
}
