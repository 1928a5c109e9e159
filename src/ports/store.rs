// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-value store trait definition.
//!
//! This module defines the `KvStore` trait, the port through which the config center
//! talks to its backing store. Any store with linearizable point reads, prefix scans,
//! upserts and deletes over a single keyspace (etcd, or an in-memory map for tests)
//! can implement it.

use crate::domain::Result;
use async_trait::async_trait;

/// A key and the value stored under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyValue {
    /// The full store key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl KeyValue {
    /// Creates a new pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A trait for key-value stores.
///
/// Implementations report their own failures as
/// [`ConfigError::Transport`](crate::domain::ConfigError::Transport). Deadlines are
/// applied by the caller, so implementations need not time out on their own.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so that one store can be shared by many
/// concurrent callers.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use configcenter::domain::Result;
/// use configcenter::ports::{KeyValue, KvStore};
///
/// struct NullStore;
///
/// #[async_trait]
/// impl KvStore for NullStore {
///     fn name(&self) -> &str {
///         "null"
///     }
///
///     async fn get(&self, _key: &str) -> Result<Vec<KeyValue>> {
///         Ok(vec![])
///     }
///
///     async fn get_prefix(&self, _prefix: &str) -> Result<Vec<KeyValue>> {
///         Ok(vec![])
///     }
///
///     async fn put(&self, _key: &str, _value: &str) -> Result<()> {
///         Ok(())
///     }
///
///     async fn delete(&self, _key: &str) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Returns the name of this store.
    ///
    /// Used in log events and error messages, e.g. `"etcd"` or `"memory"`.
    fn name(&self) -> &str;

    /// Point lookup of `key`.
    ///
    /// Returns an empty list if the key is absent.
    async fn get(&self, key: &str) -> Result<Vec<KeyValue>>;

    /// Range scan over every key that starts with `prefix`.
    async fn get_prefix(&self, prefix: &str) -> Result<Vec<KeyValue>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<()>;
}
