//! NV-CONTROL protocol constants
//!
//! Target types and attribute ids as defined by the NV-CONTROL extension.
//! The numeric values are fixed by the protocol and must not change.

/// Status value NV-CONTROL returns on success
pub const XNV_OK: i32 = 1;

/// NV-CONTROL target type
///
/// Classifies which hardware unit an attribute applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Target {
    /// X screen, the unqualified/default target
    Screen = 0,
    /// Physical GPU
    Gpu = 1,
    /// Fan/cooler unit
    Cooler = 5,
}

impl Target {
    /// Short name used in diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            Target::Screen => "screen",
            Target::Gpu => "gpu",
            Target::Cooler => "cooler",
        }
    }
}

/// Integer attribute ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum IntAttribute {
    /// GPU core temperature in Celsius
    CoreTemperature = 60,
    /// Manual cooler control enabled flag (0 auto, 1 manual)
    CoolerManualControl = 319,
    /// Target cooler level, percentage-like unit (writable)
    ThermalCoolerLevel = 320,
    /// Cooler rotational speed in RPM
    ThermalCoolerSpeed = 405,
    /// Current cooler level as reported by the driver
    ThermalCoolerCurrentLevel = 417,
}

impl IntAttribute {
    /// Short name used in diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            IntAttribute::CoreTemperature => "core-temperature",
            IntAttribute::CoolerManualControl => "cooler-manual-control",
            IntAttribute::ThermalCoolerLevel => "thermal-cooler-level",
            IntAttribute::ThermalCoolerSpeed => "thermal-cooler-speed",
            IntAttribute::ThermalCoolerCurrentLevel => "thermal-cooler-current-level",
        }
    }
}

/// String attribute ids
///
/// These live in a separate id namespace from the integer attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum StringAttribute {
    /// Adapter product name
    ProductName = 0,
    /// NVIDIA driver version string
    DriverVersion = 3,
    /// GPU utilization as "key=value, key=value" pairs
    GpuUtilization = 53,
}

impl StringAttribute {
    /// Short name used in diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            StringAttribute::ProductName => "product-name",
            StringAttribute::DriverVersion => "driver-version",
            StringAttribute::GpuUtilization => "gpu-utilization",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_discriminants() {
        assert_eq!(Target::Screen as i32, 0);
        assert_eq!(Target::Gpu as i32, 1);
        assert_eq!(Target::Cooler as i32, 5);
    }

    #[test]
    fn test_int_attribute_discriminants() {
        assert_eq!(IntAttribute::CoreTemperature as i32, 60);
        assert_eq!(IntAttribute::CoolerManualControl as i32, 319);
        assert_eq!(IntAttribute::ThermalCoolerLevel as i32, 320);
        assert_eq!(IntAttribute::ThermalCoolerSpeed as i32, 405);
        assert_eq!(IntAttribute::ThermalCoolerCurrentLevel as i32, 417);
    }

    #[test]
    fn test_string_attribute_discriminants() {
        assert_eq!(StringAttribute::ProductName as i32, 0);
        assert_eq!(StringAttribute::DriverVersion as i32, 3);
        assert_eq!(StringAttribute::GpuUtilization as i32, 53);
    }
}
