//! Info command implementation
//!
//! Shows adapter name and driver version.

use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, AdapterInfo};
use crate::error::Result;
use crate::xnv::{AttributeSource, GpuControl, Session};

/// Execute the info command
pub fn run_info(display: Option<&str>, format: OutputFormat) -> Result<()> {
    let control = GpuControl::new(Session::open(display)?);
    show_info(&control, format)
}

fn show_info<S: AttributeSource>(control: &GpuControl<S>, format: OutputFormat) -> Result<()> {
    let adapter_name = control.adapter_name()?;
    let version = control.driver_version()?;

    let supported = version.is_supported();
    if !supported {
        log::warn!(
            "driver {} is older than the minimum supported version {}",
            version,
            crate::domain::DriverVersion::MINIMUM
        );
    }

    print_output(
        &AdapterInfo {
            adapter_name,
            driver_version: version.as_str().to_string(),
            driver_supported: supported,
        },
        format,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockSource;

    #[test]
    fn test_show_info_with_mock() {
        let control = GpuControl::new(MockSource::with_defaults());
        assert!(show_info(&control, OutputFormat::Compact).is_ok());
    }

    #[test]
    fn test_show_info_fails_without_backend_data() {
        let control = GpuControl::new(MockSource::new());
        assert!(show_info(&control, OutputFormat::Table).is_err());
    }
}
