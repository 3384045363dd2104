//! Status command implementation
//!
//! Shows temperature, cooler readings, control mode, and utilization.

use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, StatusReport};
use crate::error::Result;
use crate::xnv::{AttributeSource, GpuControl, Session};

/// Execute the status command
pub fn run_status(display: Option<&str>, format: OutputFormat) -> Result<()> {
    let control = GpuControl::new(Session::open(display)?);
    show_status(&control, format)
}

fn show_status<S: AttributeSource>(control: &GpuControl<S>, format: OutputFormat) -> Result<()> {
    let temperature = control.temperature()?;

    // Cooler and utilization readings are best-effort; some boards
    // expose no cooler targets at all.
    let control_mode = control
        .cooler_control()
        .map(|m| m.to_string())
        .unwrap_or_else(|_| "Unknown".to_string());
    let fan_level = control.fan_level().map(|l| l.as_percentage()).ok();
    let fan_rpm = control.fan_speed_rpm().ok();
    let utilization = control.utilization().map(|u| u.to_string()).ok();

    print_output(
        &StatusReport {
            temperature_c: temperature.as_celsius(),
            control_mode,
            fan_level,
            fan_rpm,
            utilization,
        },
        format,
    )?;

    Ok(())
}
