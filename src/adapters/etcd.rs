// SPDX-License-Identifier: MIT OR Apache-2.0

//! etcd store adapter.
//!
//! This module provides an adapter that stores configuration documents in etcd.

use crate::domain::{ConfigError, Result};
use crate::ports::{KeyValue, KvStore};
use async_trait::async_trait;
use etcd_client::{Client, ConnectOptions, GetOptions};

const STORE_NAME: &str = "etcd";

/// Key-value store adapter for etcd.
///
/// The adapter shares the underlying `etcd_client::Client`: each call works on a
/// clone of it, and clones share one gRPC channel. Closing the connection is left to
/// whoever created the client.
///
/// # Examples
///
/// ```rust,no_run
/// use configcenter::adapters::EtcdStore;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = EtcdStore::connect(vec!["localhost:2379"], None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct EtcdStore {
    /// etcd client
    client: Client,
}

impl std::fmt::Debug for EtcdStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EtcdStore").finish_non_exhaustive()
    }
}

impl EtcdStore {
    /// Connects to etcd at the given endpoints.
    ///
    /// # Arguments
    ///
    /// * `endpoints` - List of etcd endpoints (e.g., `["localhost:2379"]`)
    /// * `options` - Optional connection options (credentials, timeouts, TLS)
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use configcenter::adapters::EtcdStore;
    /// use etcd_client::ConnectOptions;
    /// use std::time::Duration;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let options = ConnectOptions::new().with_connect_timeout(Duration::from_secs(10));
    /// let store = EtcdStore::connect(vec!["localhost:2379"], Some(options)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect<S: AsRef<str>>(
        endpoints: Vec<S>,
        options: Option<ConnectOptions>,
    ) -> Result<Self> {
        let endpoints: Vec<String> = endpoints.iter().map(|s| s.as_ref().to_string()).collect();

        let client = Client::connect(&endpoints, options).await.map_err(|e| {
            ConfigError::transport(
                STORE_NAME,
                format!("Failed to connect to etcd: {}", e),
                e,
            )
        })?;

        tracing::debug!(?endpoints, "connected to etcd");
        Ok(Self { client })
    }

    /// Wraps a client the caller already connected.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Returns a handle to the underlying client.
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    async fn range(&self, key: &str, options: Option<GetOptions>) -> Result<Vec<KeyValue>> {
        let mut client = self.client.clone();

        let response = client.get(key, options).await.map_err(|e| {
            ConfigError::transport(
                STORE_NAME,
                format!("Failed to fetch '{}' from etcd: {}", key, e),
                e,
            )
        })?;

        response
            .kvs()
            .iter()
            .map(|kv| -> Result<KeyValue> {
                let key = kv.key_str().map_err(|_| ConfigError::InvalidEncoding {
                    key: String::from_utf8_lossy(kv.key()).into_owned(),
                })?;
                let value = kv.value_str().map_err(|_| ConfigError::InvalidEncoding {
                    key: key.to_string(),
                })?;
                Ok(KeyValue::new(key, value))
            })
            .collect()
    }
}

#[async_trait]
impl KvStore for EtcdStore {
    fn name(&self) -> &str {
        STORE_NAME
    }

    async fn get(&self, key: &str) -> Result<Vec<KeyValue>> {
        self.range(key, None).await
    }

    async fn get_prefix(&self, prefix: &str) -> Result<Vec<KeyValue>> {
        self.range(prefix, Some(GetOptions::new().with_prefix()))
            .await
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut client = self.client.clone();

        client.put(key, value, None).await.map_err(|e| {
            ConfigError::transport(
                STORE_NAME,
                format!("Failed to put '{}' to etcd: {}", key, e),
                e,
            )
        })?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut client = self.client.clone();

        client.delete(key, None).await.map_err(|e| {
            ConfigError::transport(
                STORE_NAME,
                format!("Failed to delete '{}' from etcd: {}", key, e),
                e,
            )
        })?;

        Ok(())
    }
}
