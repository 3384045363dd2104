//! Fan-related domain types
//!
//! Provides validated types for cooler level and control state.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cooler level percentage (0-100)
///
/// Validated on construction to ensure the value is within valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FanLevel(u8);

impl FanLevel {
    /// Minimum valid level
    pub const MIN: u8 = 0;
    /// Maximum valid level
    pub const MAX: u8 = 100;

    /// Create a new FanLevel with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidFanLevel` if value > 100
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > Self::MAX {
            return Err(DomainError::InvalidFanLevel(value));
        }
        Ok(Self(value))
    }

    /// Build a FanLevel from a raw driver reading
    ///
    /// Readings outside 0-100 are rejected the same way as user input.
    pub fn from_raw(value: i32) -> Result<Self, DomainError> {
        u8::try_from(value)
            .map_err(|_| DomainError::InvalidValue(format!("cooler level {}", value)))
            .and_then(Self::new)
    }

    /// Get the level as a percentage value (0-100)
    #[inline]
    pub const fn as_percentage(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for FanLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for FanLevel {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FanLevel> for u8 {
    fn from(level: FanLevel) -> Self {
        level.0
    }
}

impl From<FanLevel> for i32 {
    fn from(level: FanLevel) -> Self {
        level.0 as i32
    }
}

/// Cooler control state
///
/// The discriminants are the values the driver reads and writes for the
/// manual-control attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum FanControlState {
    /// Driver controls the cooler automatically
    #[default]
    Auto = 0,
    /// Manual cooler control
    Manual = 1,
}

impl fmt::Display for FanControlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FanControlState::Auto => write!(f, "Auto"),
            FanControlState::Manual => write!(f, "Manual"),
        }
    }
}

impl TryFrom<i32> for FanControlState {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FanControlState::Auto),
            1 => Ok(FanControlState::Manual),
            other => Err(DomainError::UnknownControlState(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fan_level_valid() {
        assert!(FanLevel::new(0).is_ok());
        assert!(FanLevel::new(50).is_ok());
        assert!(FanLevel::new(100).is_ok());
    }

    #[test]
    fn test_fan_level_invalid() {
        assert!(FanLevel::new(101).is_err());
        assert!(FanLevel::new(255).is_err());
    }

    #[test]
    fn test_fan_level_from_raw() {
        assert_eq!(FanLevel::from_raw(40).unwrap().as_percentage(), 40);
        assert!(FanLevel::from_raw(-1).is_err());
        assert!(FanLevel::from_raw(150).is_err());
    }

    #[test]
    fn test_fan_level_display() {
        let level = FanLevel::new(75).unwrap();
        assert_eq!(level.to_string(), "75%");
    }

    #[test]
    fn test_control_state_from_raw() {
        assert_eq!(
            FanControlState::try_from(0).unwrap(),
            FanControlState::Auto
        );
        assert_eq!(
            FanControlState::try_from(1).unwrap(),
            FanControlState::Manual
        );
        assert!(matches!(
            FanControlState::try_from(7),
            Err(DomainError::UnknownControlState(7))
        ));
    }

    #[test]
    fn test_control_state_display() {
        assert_eq!(FanControlState::Auto.to_string(), "Auto");
        assert_eq!(FanControlState::Manual.to_string(), "Manual");
    }
}
