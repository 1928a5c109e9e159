// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory store adapter.
//!
//! This module provides a process-local store with the same semantics as etcd for the
//! operations the config center uses. It is intended for tests, demos and offline
//! development.

use crate::domain::{ConfigError, Result};
use crate::ports::{KeyValue, KvStore};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

const STORE_NAME: &str = "memory";

/// Key-value store adapter backed by an ordered map.
///
/// Keys are kept in lexical order, so prefix scans return them sorted as etcd does.
///
/// # Examples
///
/// ```rust
/// use configcenter::adapters::MemoryStore;
/// use configcenter::ports::KvStore;
///
/// # #[tokio::main]
/// # async fn main() -> configcenter::domain::Result<()> {
/// let store = MemoryStore::new();
/// store.put("/a/b", "1").await?;
/// assert_eq!(store.get_prefix("/a/").await?.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    ///
    /// A poisoned lock still reports the entries it holds; the store operations
    /// are the ones that surface poisoning as a transport error.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn poisoned() -> ConfigError {
        ConfigError::Transport {
            store: STORE_NAME.to_string(),
            message: "store lock poisoned".to_string(),
            source: None,
        }
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    fn name(&self) -> &str {
        STORE_NAME
    }

    async fn get(&self, key: &str) -> Result<Vec<KeyValue>> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries
            .get(key)
            .map(|v| vec![KeyValue::new(key, v.as_str())])
            .unwrap_or_default())
    }

    async fn get_prefix(&self, prefix: &str) -> Result<Vec<KeyValue>> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| KeyValue::new(k.as_str(), v.as_str()))
            .collect())
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.remove(key);
        Ok(())
    }
}
