//! nvxctl - NV-CONTROL based GPU control library
//!
//! This library reads and controls NVIDIA GPU attributes (temperature,
//! cooler level and speed, cooler control mode, driver version,
//! utilization, adapter name) over the NV-CONTROL X extension.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`domain`]: Domain models with validation
//! - [`error`]: Error types
//! - [`xnv`]: NV-CONTROL abstraction layer

pub mod cli;
pub mod commands;
pub mod domain;
pub mod error;
pub mod xnv;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{AppError, Result};
