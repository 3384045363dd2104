//! Unified error types for nvxctl
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from NV-CONTROL operations
    #[error("NV-CONTROL error: {0}")]
    Control(#[from] ControlError),

    /// Error from domain type validation
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// IO error (output writing)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the NV-CONTROL backend
#[derive(Error, Debug)]
pub enum ControlError {
    /// libX11 or libXNVCtrl could not be loaded
    #[error("NV-CONTROL libraries not found: {0}. Is the NVIDIA driver installed?")]
    LibraryNotFound(String),

    /// A required symbol is missing from the loaded library
    #[error("Symbol not found in NV-CONTROL library: {0}")]
    SymbolNotFound(String),

    /// XOpenDisplay returned NULL
    #[error("Cannot open display {0:?}; is $DISPLAY set?")]
    DisplayOpenFailed(Option<String>),

    /// An attribute query reported failure
    #[error("Query for {attribute} on {target} {index} failed (status {status})")]
    QueryFailed {
        target: &'static str,
        index: u32,
        attribute: &'static str,
        status: i32,
    },

    /// The backend handed back a NULL string buffer
    #[error("Query for {0} returned no data")]
    EmptyStringResult(&'static str),

    /// The backend handed back a string that is not valid UTF-8
    #[error("Query for {0} returned invalid UTF-8")]
    InvalidStringResult(&'static str),
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid fan level value (must be 0-100)
    #[error("Invalid fan level: {0}% (must be 0-100)")]
    InvalidFanLevel(u8),

    /// Cooler control state other than auto (0) or manual (1)
    #[error("Unknown cooler control state: {0}")]
    UnknownControlState(i32),

    /// Utilization string does not follow the key=value format
    #[error("Malformed utilization entry: {0:?}")]
    MalformedUtilization(String),

    /// Invalid value provided
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
