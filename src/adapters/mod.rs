// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing store implementations.
//!
//! This module contains concrete implementations of the `KvStore` port defined in the
//! ports layer.

#[cfg(feature = "etcd")]
pub mod etcd;
pub mod memory;

// Re-export adapters based on feature flags
#[cfg(feature = "etcd")]
pub use etcd::EtcdStore;
pub use memory::MemoryStore;
