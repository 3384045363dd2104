//! GPU information domain types
//!
//! Driver version and the utilization record the driver reports as a
//! formatted string.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NVIDIA driver version string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverVersion(String);

impl DriverVersion {
    /// Minimum driver version with usable cooler control attributes
    pub const MINIMUM: f32 = 352.09;

    /// Wrap a raw version string
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// The raw version string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric form of the version, when it parses as one
    ///
    /// Driver versions are dotted decimals like "535.154"; the leading
    /// "major.minor" prefix is enough for ordering.
    pub fn as_f32(&self) -> Option<f32> {
        let mut parts = self.0.splitn(3, '.');
        let major = parts.next()?;
        match parts.next() {
            Some(minor) => format!("{}.{}", major, minor).parse().ok(),
            None => major.parse().ok(),
        }
    }

    /// Whether this driver meets the minimum supported version
    pub fn is_supported(&self) -> bool {
        self.as_f32().map_or(false, |v| v >= Self::MINIMUM)
    }
}

impl fmt::Display for DriverVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// GPU utilization rates in percent
///
/// Parsed from the driver's "graphics=N, memory=N, video=N, PCIe=N"
/// utilization string. Fields the driver omits stay `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Utilization {
    /// Graphics engine utilization
    pub graphics: Option<i32>,
    /// Memory bandwidth utilization
    pub memory: Option<i32>,
    /// Video engine utilization
    pub video: Option<i32>,
    /// PCIe bandwidth utilization
    pub pcie: Option<i32>,
}

impl FromStr for Utilization {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut util = Utilization::default();

        for pair in s.split(", ") {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| DomainError::MalformedUtilization(pair.to_string()))?;
            let value: i32 = value
                .trim()
                .parse()
                .map_err(|_| DomainError::MalformedUtilization(pair.to_string()))?;

            // Unknown keys are ignored; newer drivers add fields.
            match key.trim() {
                "graphics" => util.graphics = Some(value),
                "memory" => util.memory = Some(value),
                "video" => util.video = Some(value),
                "PCIe" => util.pcie = Some(value),
                _ => {}
            }
        }

        Ok(util)
    }
}

impl fmt::Display for Utilization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn pct(v: Option<i32>) -> String {
            v.map_or_else(|| "-".to_string(), |v| format!("{}%", v))
        }
        write!(
            f,
            "graphics {}, memory {}, video {}, PCIe {}",
            pct(self.graphics),
            pct(self.memory),
            pct(self.video),
            pct(self.pcie)
        )
    }
}
