//! Fan command implementation
//!
//! Reads and sets the cooler level.

use crate::cli::args::{FanArgs, FanCommands, OutputFormat};
use crate::cli::output::{print_output, FanReadings, Message};
use crate::domain::FanLevel;
use crate::error::Result;
use crate::xnv::{AttributeSource, GpuControl, Session, XNV_OK};

/// Execute fan commands
pub fn run_fan(
    args: &FanArgs,
    display: Option<&str>,
    format: OutputFormat,
    dry_run: bool,
) -> Result<()> {
    let mut control = GpuControl::new(Session::open(display)?);

    match &args.command {
        FanCommands::Get => fan_get(&control, format),
        FanCommands::Set { level } => fan_set(&mut control, *level, format, dry_run),
    }
}

fn fan_get<S: AttributeSource>(control: &GpuControl<S>, format: OutputFormat) -> Result<()> {
    let level = control.fan_level()?;
    let rpm = control.fan_speed_rpm().ok();
    let control_mode = control
        .cooler_control()
        .map(|m| m.to_string())
        .unwrap_or_else(|_| "Unknown".to_string());

    print_output(
        &FanReadings {
            level: level.as_percentage(),
            rpm,
            control_mode,
        },
        format,
    )?;

    Ok(())
}

fn fan_set<S: AttributeSource>(
    control: &mut GpuControl<S>,
    level: u8,
    format: OutputFormat,
    dry_run: bool,
) -> Result<()> {
    let level = FanLevel::new(level)?;

    let (message, success) = if dry_run {
        (format!("[DRY RUN] Would set cooler level to {}", level), true)
    } else {
        let status = control.set_fan_level(level)?;
        if status == XNV_OK {
            (format!("Set cooler level to {}", level), true)
        } else {
            (
                format!(
                    "Setting cooler level to {} failed (status {}); is manual control enabled?",
                    level, status
                ),
                false,
            )
        }
    };

    print_output(&Message { message, success }, format)?;

    Ok(())
}
