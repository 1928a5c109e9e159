// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and the key layout.
//!
//! This module contains the core domain types of the config center. It is independent
//! of any store and defines how environments and config names become store keys.

pub mod config_name;
pub mod environment;
pub mod errors;
pub mod layout;
pub mod options;
pub mod service;

// Re-export commonly used types
pub use config_name::ConfigName;
pub use environment::Environment;
pub use errors::{ConfigError, Operation, Result};
pub use layout::KeyLayout;
pub use options::CenterOptions;
pub use service::ConfigCenterService;
