//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// NV-CONTROL based GPU control tool
///
/// Read and control NVIDIA GPU temperature, cooler level, and cooler
/// control mode over the X display connection.
#[derive(Parser, Debug)]
#[command(name = "nvxctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// X display to connect to (defaults to $DISPLAY)
    #[arg(short, long, global = true, env = "DISPLAY")]
    pub display: Option<String>,

    /// Dry run mode - don't actually apply changes
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show adapter name and driver version
    Info,

    /// Show temperature, cooler, and utilization readings
    Status,

    /// Read or set the cooler level
    Fan(FanArgs),

    /// Read or set the cooler control mode
    Control(ControlArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for fan commands
#[derive(Parser, Debug)]
pub struct FanArgs {
    #[command(subcommand)]
    pub command: FanCommands,
}

/// Fan subcommands
#[derive(Subcommand, Debug)]
pub enum FanCommands {
    /// Show current cooler level and speed
    Get,

    /// Set the cooler level (requires manual control mode)
    Set {
        /// Cooler level percentage (0-100)
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        level: u8,
    },
}

/// Arguments for control mode commands
#[derive(Parser, Debug)]
pub struct ControlArgs {
    #[command(subcommand)]
    pub command: ControlCommands,
}

/// Control mode subcommands
#[derive(Subcommand, Debug)]
pub enum ControlCommands {
    /// Show the current cooler control mode
    Get,

    /// Set the cooler control mode
    Set {
        /// Mode to set
        #[arg(value_enum)]
        mode: ControlModeArg,
    },
}

/// Cooler control mode argument
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ControlModeArg {
    /// Driver-controlled cooler (default)
    Auto,
    /// Manual cooler control
    Manual,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
