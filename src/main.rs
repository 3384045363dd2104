//! nvxctl - NV-CONTROL based GPU control tool
//!
//! A command-line tool for reading NVIDIA GPU temperature and cooler
//! state and switching the cooler between driver and manual control.

use clap::Parser;
use nvxctl::cli::args::{generate_completions, Cli, Commands};
use nvxctl::commands::{run_control, run_fan, run_info, run_status};
use nvxctl::error::AppError;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let display = cli.display.as_deref();

    match &cli.command {
        Commands::Info => run_info(display, cli.format),

        Commands::Status => run_status(display, cli.format),

        Commands::Fan(args) => run_fan(args, display, cli.format, cli.dry_run),

        Commands::Control(args) => run_control(args, display, cli.format, cli.dry_run),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Control(nvxctl::error::ControlError::LibraryNotFound(_)) => {
            eprintln!();
            eprintln!("Hint: Make sure the NVIDIA driver is installed.");
            eprintln!("      On Linux, install the libxnvctrl package.");
        }
        AppError::Control(nvxctl::error::ControlError::DisplayOpenFailed(_)) => {
            eprintln!();
            eprintln!("Hint: This tool needs a running X server.");
            eprintln!("      Check that $DISPLAY points at it, or pass --display.");
        }
        _ => {}
    }
}
