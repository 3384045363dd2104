//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod control;
pub mod fan;
pub mod info;
pub mod status;

pub use control::run_control;
pub use fan::run_fan;
pub use info::run_info;
pub use status::run_status;
