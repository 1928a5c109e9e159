// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-namespaced configuration documents on top of etcd.
//!
//! This crate lets callers read, write, remove and list named configuration
//! documents scoped to a deployment environment, without knowing the store's key
//! layout or talking to the store client directly.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and key layout (`Environment`, `ConfigName`,
//!   `KeyLayout`, `CenterOptions`, errors)
//! - **Ports**: Trait definitions for the backing store (`KvStore`)
//! - **Adapters**: Store implementations (etcd, in-memory)
//! - **Service**: The config center facade and its blocking wrapper
//!
//! # Key Layout
//!
//! Every document lives at `<base>/<environment>/<name>`, `/config_center/test/xx125`
//! with the default options. A blank environment is stored under `_`.
//!
//! # Feature Flags
//!
//! - `etcd`: Enable the etcd store adapter (default)
//! - `yaml`: Enable loading `CenterOptions` from YAML (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use configcenter::prelude::*;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let center = ConfigCenter::new(Arc::new(MemoryStore::new()), "test");
//!
//! center.set_config("xx125", "a=b\nc=1\n").await?;
//! let configs = center.list_config().await?;
//! assert_eq!(configs["xx125"], "a=b\nc=1\n");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        CenterOptions, ConfigCenterService, ConfigError, ConfigName, Environment, KeyLayout,
        Result,
    };
    pub use crate::ports::{KeyValue, KvStore};
    pub use crate::service::{BlockingConfigCenter, ConfigCenter};

    // Re-export adapters based on feature flags
    #[cfg(feature = "etcd")]
    pub use crate::adapters::EtcdStore;
    pub use crate::adapters::MemoryStore;
}
