//! Typed accessors over an attribute source
//!
//! `GpuControl` turns the raw (target, index, attribute) query surface
//! into the operations callers actually want: temperature, cooler level
//! and speed, control state, driver and adapter strings.

use crate::domain::{DriverVersion, FanControlState, FanLevel, Temperature, Utilization};
use crate::error::{AppError, ControlError};
use crate::xnv::attributes::{IntAttribute, StringAttribute, Target};
use crate::xnv::traits::AttributeSource;

/// Typed control interface for one GPU and its cooler
///
/// The attribute source is injected by the caller; production code hands
/// in a [`Session`](crate::xnv::Session), tests hand in a fake. Target
/// indices default to 0 (the first GPU and its first cooler).
pub struct GpuControl<S: AttributeSource> {
    source: S,
    gpu: u32,
    cooler: u32,
}

impl<S: AttributeSource> GpuControl<S> {
    /// Wrap an attribute source, targeting GPU 0 and cooler 0
    pub fn new(source: S) -> Self {
        Self {
            source,
            gpu: 0,
            cooler: 0,
        }
    }

    /// Recover the underlying source
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Core temperature of the GPU
    pub fn temperature(&self) -> Result<Temperature, ControlError> {
        self.source
            .query_int(Target::Screen, 0, IntAttribute::CoreTemperature)
            .map(Temperature::new)
    }

    /// Whether the cooler is under driver or manual control
    pub fn cooler_control(&self) -> Result<FanControlState, AppError> {
        let raw = self
            .source
            .query_int(Target::Gpu, self.gpu, IntAttribute::CoolerManualControl)?;
        Ok(FanControlState::try_from(raw)?)
    }

    /// Current cooler level as a percentage
    pub fn fan_level(&self) -> Result<FanLevel, AppError> {
        let raw = self.source.query_int(
            Target::Cooler,
            self.cooler,
            IntAttribute::ThermalCoolerCurrentLevel,
        )?;
        Ok(FanLevel::from_raw(raw)?)
    }

    /// Current cooler rotational speed in RPM
    pub fn fan_speed_rpm(&self) -> Result<i32, ControlError> {
        self.source.query_int(
            Target::Cooler,
            self.cooler,
            IntAttribute::ThermalCoolerSpeed,
        )
    }

    /// Switch the cooler between driver and manual control
    ///
    /// Returns the backend's raw status code unmodified (1 ok, 0 failed).
    pub fn set_cooler_control(&mut self, state: FanControlState) -> Result<i32, ControlError> {
        self.source.set_int(
            Target::Gpu,
            self.gpu,
            IntAttribute::CoolerManualControl,
            state as i32,
        )
    }

    /// Set the cooler level
    ///
    /// Takes effect only while manual control is enabled. Returns the
    /// backend's raw status code unmodified (1 ok, 0 failed).
    pub fn set_fan_level(&mut self, level: FanLevel) -> Result<i32, ControlError> {
        self.source.set_int(
            Target::Cooler,
            self.cooler,
            IntAttribute::ThermalCoolerLevel,
            level.into(),
        )
    }

    /// Installed NVIDIA driver version
    pub fn driver_version(&self) -> Result<DriverVersion, ControlError> {
        self.source
            .query_string(Target::Screen, 0, StringAttribute::DriverVersion)
            .map(DriverVersion::new)
    }

    /// GPU utilization rates
    pub fn utilization(&self) -> Result<Utilization, AppError> {
        let raw = self
            .source
            .query_string(Target::Gpu, self.gpu, StringAttribute::GpuUtilization)?;
        Ok(raw.parse::<Utilization>()?)
    }

    /// Adapter product name
    pub fn adapter_name(&self) -> Result<String, ControlError> {
        self.source
            .query_string(Target::Gpu, self.gpu, StringAttribute::ProductName)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockSource;

    fn control() -> GpuControl<MockSource> {
        GpuControl::new(MockSource::with_defaults())
    }

    #[test]
    fn test_temperature_reads_screen_target() {
        let source = MockSource::new().with_int(Target::Screen, 0, IntAttribute::CoreTemperature, 65);
        let ctrl = GpuControl::new(source);
        assert_eq!(ctrl.temperature().unwrap().as_celsius(), 65);
    }

    #[test]
    fn test_temperature_failure_propagates() {
        let ctrl = GpuControl::new(MockSource::new());
        assert!(matches!(
            ctrl.temperature(),
            Err(ControlError::QueryFailed {
                attribute: "core-temperature",
                ..
            })
        ));
    }

    #[test]
    fn test_cooler_control_maps_raw_state() {
        let ctrl = control();
        assert_eq!(ctrl.cooler_control().unwrap(), FanControlState::Auto);

        let source =
            MockSource::new().with_int(Target::Gpu, 0, IntAttribute::CoolerManualControl, 1);
        let ctrl = GpuControl::new(source);
        assert_eq!(ctrl.cooler_control().unwrap(), FanControlState::Manual);
    }

    #[test]
    fn test_cooler_control_rejects_unknown_state() {
        let source =
            MockSource::new().with_int(Target::Gpu, 0, IntAttribute::CoolerManualControl, 3);
        let ctrl = GpuControl::new(source);
        assert!(matches!(
            ctrl.cooler_control(),
            Err(AppError::Domain(
                crate::error::DomainError::UnknownControlState(3)
            ))
        ));
    }

    #[test]
    fn test_fan_level_reads_cooler_target() {
        let source = MockSource::new().with_int(
            Target::Cooler,
            0,
            IntAttribute::ThermalCoolerCurrentLevel,
            40,
        );
        let ctrl = GpuControl::new(source);
        assert_eq!(ctrl.fan_level().unwrap().as_percentage(), 40);
    }

    #[test]
    fn test_fan_speed_rpm() {
        let source =
            MockSource::new().with_int(Target::Cooler, 0, IntAttribute::ThermalCoolerSpeed, 1800);
        let ctrl = GpuControl::new(source);
        assert_eq!(ctrl.fan_speed_rpm().unwrap(), 1800);
    }

    #[test]
    fn test_set_fan_level_status_passthrough() {
        let level = FanLevel::new(60).unwrap();

        let mut ctrl = GpuControl::new(MockSource::new().with_set_status(1));
        assert_eq!(ctrl.set_fan_level(level).unwrap(), 1);

        let mut ctrl = GpuControl::new(MockSource::new().with_set_status(0));
        assert_eq!(ctrl.set_fan_level(level).unwrap(), 0);
    }

    #[test]
    fn test_set_cooler_control_status_passthrough() {
        let mut ctrl = GpuControl::new(MockSource::new().with_set_status(1));
        assert_eq!(ctrl.set_cooler_control(FanControlState::Manual).unwrap(), 1);

        let mut ctrl = GpuControl::new(MockSource::new().with_set_status(0));
        assert_eq!(ctrl.set_cooler_control(FanControlState::Auto).unwrap(), 0);
    }

    #[test]
    fn test_set_records_target_and_value() {
        let mut ctrl = control();
        ctrl.set_fan_level(FanLevel::new(55).unwrap()).unwrap();
        ctrl.set_cooler_control(FanControlState::Manual).unwrap();

        let source = ctrl.into_inner();
        let sets = source.applied_sets();
        assert_eq!(
            sets,
            vec![
                (Target::Cooler, 0, IntAttribute::ThermalCoolerLevel, 55),
                (Target::Gpu, 0, IntAttribute::CoolerManualControl, 1),
            ]
        );
    }

    #[test]
    fn test_driver_version() {
        let ctrl = control();
        let version = ctrl.driver_version().unwrap();
        assert_eq!(version.as_str(), "535.154.05");
        assert!(version.is_supported());
    }

    #[test]
    fn test_adapter_name() {
        let ctrl = control();
        assert_eq!(ctrl.adapter_name().unwrap(), "NVIDIA GeForce GTX 1080");
    }

    #[test]
    fn test_utilization_parsed_from_native_string() {
        let ctrl = control();
        let util = ctrl.utilization().unwrap();
        assert_eq!(util.graphics, Some(42));
        assert_eq!(util.memory, Some(10));
    }

    #[test]
    fn test_string_query_failure_propagates() {
        let ctrl = GpuControl::new(MockSource::new());
        assert!(matches!(
            ctrl.adapter_name(),
            Err(ControlError::QueryFailed {
                attribute: "product-name",
                ..
            })
        ));
    }
}
