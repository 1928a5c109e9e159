// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the config center implementations.
//!
//! This module contains the concrete implementations of the `ConfigCenterService`
//! trait, which provides the main interface for working with configuration documents.

pub mod blocking;
pub mod config_center;

// Re-export commonly used types
pub use blocking::BlockingConfigCenter;
pub use config_center::{ConfigCenter, ConfigCenterBuilder};
