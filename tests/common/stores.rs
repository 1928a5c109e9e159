// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock stores for exercising the config center's error paths.

#![allow(dead_code)]

use async_trait::async_trait;
use configcenter::adapters::MemoryStore;
use configcenter::domain::{ConfigError, Result};
use configcenter::ports::{KeyValue, KvStore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// A store that answers every call after a fixed delay.
pub struct SlowStore {
    delay: Duration,
    inner: MemoryStore,
}

impl SlowStore {
    /// Creates a store that sleeps for `delay` before each call.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            inner: MemoryStore::new(),
        }
    }
}

#[async_trait]
impl KvStore for SlowStore {
    fn name(&self) -> &str {
        "slow"
    }

    async fn get(&self, key: &str) -> Result<Vec<KeyValue>> {
        tokio::time::sleep(self.delay).await;
        self.inner.get(key).await
    }

    async fn get_prefix(&self, prefix: &str) -> Result<Vec<KeyValue>> {
        tokio::time::sleep(self.delay).await;
        self.inner.get_prefix(prefix).await
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        self.inner.put(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        self.inner.delete(key).await
    }
}

/// A store whose every call fails with a transport error.
#[derive(Default)]
pub struct FailingStore {
    calls: AtomicUsize,
}

impl FailingStore {
    /// Creates a new failing store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many calls reached the store.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail(&self, what: &str) -> ConfigError {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ConfigError::transport(
            "failing",
            format!("{} failed", what),
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
        )
    }
}

#[async_trait]
impl KvStore for FailingStore {
    fn name(&self) -> &str {
        "failing"
    }

    async fn get(&self, _key: &str) -> Result<Vec<KeyValue>> {
        Err(self.fail("get"))
    }

    async fn get_prefix(&self, _prefix: &str) -> Result<Vec<KeyValue>> {
        Err(self.fail("get_prefix"))
    }

    async fn put(&self, _key: &str, _value: &str) -> Result<()> {
        Err(self.fail("put"))
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        Err(self.fail("delete"))
    }
}
