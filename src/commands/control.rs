//! Control mode command implementation
//!
//! Reads and sets the cooler control mode (auto/manual).

use crate::cli::args::{ControlArgs, ControlCommands, ControlModeArg, OutputFormat};
use crate::cli::output::{print_output, Message};
use crate::domain::FanControlState;
use crate::error::Result;
use crate::xnv::{AttributeSource, GpuControl, Session, XNV_OK};

/// Execute control mode commands
pub fn run_control(
    args: &ControlArgs,
    display: Option<&str>,
    format: OutputFormat,
    dry_run: bool,
) -> Result<()> {
    let mut control = GpuControl::new(Session::open(display)?);

    match &args.command {
        ControlCommands::Get => control_get(&control, format),
        ControlCommands::Set { mode } => control_set(&mut control, *mode, format, dry_run),
    }
}

fn control_get<S: AttributeSource>(control: &GpuControl<S>, format: OutputFormat) -> Result<()> {
    let mode = control.cooler_control()?;

    print_output(
        &Message {
            message: format!("Cooler control mode: {}", mode),
            success: true,
        },
        format,
    )?;

    Ok(())
}

fn control_set<S: AttributeSource>(
    control: &mut GpuControl<S>,
    mode: ControlModeArg,
    format: OutputFormat,
    dry_run: bool,
) -> Result<()> {
    let state = match mode {
        ControlModeArg::Auto => FanControlState::Auto,
        ControlModeArg::Manual => FanControlState::Manual,
    };

    let (message, success) = if dry_run {
        (
            format!("[DRY RUN] Would set cooler control mode to {}", state),
            true,
        )
    } else {
        let status = control.set_cooler_control(state)?;
        if status == XNV_OK {
            (format!("Set cooler control mode to {}", state), true)
        } else {
            (
                format!(
                    "Setting cooler control mode to {} failed (status {})",
                    state, status
                ),
                false,
            )
        }
    };

    print_output(&Message { message, success }, format)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockSource;
    use crate::xnv::attributes::{IntAttribute, Target};

    #[test]
    fn test_control_get_with_mock() {
        let control = GpuControl::new(MockSource::with_defaults());
        assert!(control_get(&control, OutputFormat::Compact).is_ok());
    }

    #[test]
    fn test_control_set_applies_mode() {
        let mut control = GpuControl::new(MockSource::with_defaults());
        control_set(
            &mut control,
            ControlModeArg::Manual,
            OutputFormat::Compact,
            false,
        )
        .unwrap();

        let sets = control.into_inner().applied_sets();
        assert_eq!(
            sets,
            vec![(Target::Gpu, 0, IntAttribute::CoolerManualControl, 1)]
        );
    }

    #[test]
    fn test_control_set_dry_run_applies_nothing() {
        let mut control = GpuControl::new(MockSource::with_defaults());
        control_set(
            &mut control,
            ControlModeArg::Auto,
            OutputFormat::Compact,
            true,
        )
        .unwrap();

        assert!(control.into_inner().applied_sets().is_empty());
    }
}
