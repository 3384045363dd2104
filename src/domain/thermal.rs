//! Thermal domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Temperature(i32);

impl Temperature {
    /// Create a new Temperature
    pub const fn new(celsius: i32) -> Self {
        Self(celsius)
    }

    /// Get the temperature in Celsius
    #[inline]
    pub const fn as_celsius(&self) -> i32 {
        self.0
    }

    /// Check if temperature is critical (above 90°C typically)
    pub fn is_critical(&self) -> bool {
        self.0 >= 90
    }

    /// Check if temperature is high (above 80°C typically)
    pub fn is_high(&self) -> bool {
        self.0 >= 80
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

impl From<i32> for Temperature {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<Temperature> for i32 {
    fn from(temp: Temperature) -> Self {
        temp.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_display() {
        assert_eq!(Temperature::new(65).to_string(), "65°C");
    }

    #[test]
    fn test_temperature_thresholds() {
        assert!(!Temperature::new(70).is_high());
        assert!(Temperature::new(82).is_high());
        assert!(!Temperature::new(82).is_critical());
        assert!(Temperature::new(91).is_critical());
    }
}
