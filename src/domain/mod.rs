//! Domain models for nvxctl
//!
//! This module contains all domain types with validation.
//! Types are validated on construction (fail-fast pattern).

pub mod fan;
pub mod gpu;
pub mod thermal;

pub use fan::{FanControlState, FanLevel};
pub use gpu::{DriverVersion, Utilization};
pub use thermal::Temperature;
