//! Mock implementations for testing
//!
//! Provides a fake attribute backend so typed accessors and CLI paths can
//! be exercised without an X display or NVIDIA hardware present.

use crate::error::ControlError;
use crate::xnv::attributes::{IntAttribute, StringAttribute, Target};
use crate::xnv::traits::AttributeSource;

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

/// Fake attribute source backed by in-memory tables
///
/// Queries for attributes not present in the tables fail the way the real
/// backend does (status 0). Drop increments the optional close counter,
/// standing in for the display handle being released.
#[derive(Debug, Default)]
pub struct MockSource {
    ints: HashMap<(Target, u32, IntAttribute), i32>,
    strings: HashMap<(Target, u32, StringAttribute), String>,
    set_status: i32,
    sets: Vec<(Target, u32, IntAttribute, i32)>,
    closes: Option<Rc<Cell<usize>>>,
}

impl MockSource {
    /// Create an empty source; every query fails, sets report success
    pub fn new() -> Self {
        let mut source = Self::default();
        source.set_status = 1;
        source
    }

    /// Create a source preloaded with plausible readings
    pub fn with_defaults() -> Self {
        Self::new()
            .with_int(Target::Screen, 0, IntAttribute::CoreTemperature, 45)
            .with_int(Target::Gpu, 0, IntAttribute::CoolerManualControl, 0)
            .with_int(Target::Cooler, 0, IntAttribute::ThermalCoolerCurrentLevel, 30)
            .with_int(Target::Cooler, 0, IntAttribute::ThermalCoolerSpeed, 1500)
            .with_string(Target::Screen, 0, StringAttribute::DriverVersion, "535.154.05")
            .with_string(
                Target::Gpu,
                0,
                StringAttribute::ProductName,
                "NVIDIA GeForce GTX 1080",
            )
            .with_string(
                Target::Gpu,
                0,
                StringAttribute::GpuUtilization,
                "graphics=42, memory=10, video=0, PCIe=1",
            )
    }

    /// Builder: preload an integer attribute
    pub fn with_int(mut self, target: Target, index: u32, attr: IntAttribute, value: i32) -> Self {
        self.ints.insert((target, index, attr), value);
        self
    }

    /// Builder: preload a string attribute
    pub fn with_string(
        mut self,
        target: Target,
        index: u32,
        attr: StringAttribute,
        value: impl Into<String>,
    ) -> Self {
        self.strings.insert((target, index, attr), value.into());
        self
    }

    /// Builder: status code every set will return
    pub fn with_set_status(mut self, status: i32) -> Self {
        self.set_status = status;
        self
    }

    /// Builder: counter incremented when this source is dropped
    pub fn with_close_counter(mut self, counter: Rc<Cell<usize>>) -> Self {
        self.closes = Some(counter);
        self
    }

    /// Sets applied to this source, in order
    pub fn applied_sets(&self) -> Vec<(Target, u32, IntAttribute, i32)> {
        self.sets.clone()
    }
}

impl AttributeSource for MockSource {
    fn query_int(
        &self,
        target: Target,
        index: u32,
        attr: IntAttribute,
    ) -> Result<i32, ControlError> {
        self.ints
            .get(&(target, index, attr))
            .copied()
            .ok_or(ControlError::QueryFailed {
                target: target.name(),
                index,
                attribute: attr.name(),
                status: 0,
            })
    }

    fn query_string(
        &self,
        target: Target,
        index: u32,
        attr: StringAttribute,
    ) -> Result<String, ControlError> {
        self.strings
            .get(&(target, index, attr))
            .cloned()
            .ok_or(ControlError::QueryFailed {
                target: target.name(),
                index,
                attribute: attr.name(),
                status: 0,
            })
    }

    fn set_int(
        &mut self,
        target: Target,
        index: u32,
        attr: IntAttribute,
        value: i32,
    ) -> Result<i32, ControlError> {
        self.sets.push((target, index, attr, value));
        if self.set_status == crate::xnv::XNV_OK {
            self.ints.insert((target, index, attr), value);
        }
        Ok(self.set_status)
    }
}

impl Drop for MockSource {
    fn drop(&mut self) {
        if let Some(counter) = &self.closes {
            counter.set(counter.get() + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_queries_fail() {
        let source = MockSource::new();
        assert!(source
            .query_int(Target::Screen, 0, IntAttribute::CoreTemperature)
            .is_err());
        assert!(source
            .query_string(Target::Gpu, 0, StringAttribute::ProductName)
            .is_err());
    }

    #[test]
    fn test_defaults_are_queryable() {
        let source = MockSource::with_defaults();
        assert_eq!(
            source
                .query_int(Target::Screen, 0, IntAttribute::CoreTemperature)
                .unwrap(),
            45
        );
        assert_eq!(
            source
                .query_string(Target::Screen, 0, StringAttribute::DriverVersion)
                .unwrap(),
            "535.154.05"
        );
    }

    #[test]
    fn test_successful_set_is_visible_to_queries() {
        let mut source = MockSource::with_defaults();
        source
            .set_int(Target::Cooler, 0, IntAttribute::ThermalCoolerCurrentLevel, 80)
            .unwrap();
        assert_eq!(
            source
                .query_int(Target::Cooler, 0, IntAttribute::ThermalCoolerCurrentLevel)
                .unwrap(),
            80
        );
    }

    #[test]
    fn test_failed_set_leaves_value_untouched() {
        let mut source = MockSource::with_defaults().with_set_status(0);
        let status = source
            .set_int(Target::Cooler, 0, IntAttribute::ThermalCoolerCurrentLevel, 80)
            .unwrap();
        assert_eq!(status, 0);
        assert_eq!(
            source
                .query_int(Target::Cooler, 0, IntAttribute::ThermalCoolerCurrentLevel)
                .unwrap(),
            30
        );
    }

    #[test]
    fn test_drop_counts_one_close() {
        let closes = Rc::new(Cell::new(0));
        let source = MockSource::new().with_close_counter(closes.clone());
        drop(source);
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_replacing_source_closes_previous() {
        // Re-opening in the same slot must release the prior handle first.
        let closes = Rc::new(Cell::new(0));
        let mut slot = MockSource::new().with_close_counter(closes.clone());
        assert!(slot
            .query_int(Target::Screen, 0, IntAttribute::CoreTemperature)
            .is_err());
        assert_eq!(closes.get(), 0);

        slot = MockSource::new().with_close_counter(closes.clone());
        assert_eq!(closes.get(), 1);

        drop(slot);
        assert_eq!(closes.get(), 2);
    }
}
