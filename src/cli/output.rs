//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Adapter info display
#[derive(Debug, Clone, Serialize)]
pub struct AdapterInfo {
    pub adapter_name: String,
    pub driver_version: String,
    pub driver_supported: bool,
}

impl TableDisplay for AdapterInfo {
    fn to_table(&self) -> String {
        let mut output = format!("Adapter: {}\n", self.adapter_name);
        output.push_str(&format!("Driver Version: {}", self.driver_version));
        if !self.driver_supported {
            output.push_str(" (below minimum supported version)");
        }
        output
    }

    fn to_compact(&self) -> String {
        format!("{} ({})", self.adapter_name, self.driver_version)
    }
}

/// Full status display
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub temperature_c: i32,
    pub control_mode: String,
    pub fan_level: Option<u8>,
    pub fan_rpm: Option<i32>,
    pub utilization: Option<String>,
}

impl TableDisplay for StatusReport {
    fn to_table(&self) -> String {
        let mut output = format!("Temperature: {}°C\n", self.temperature_c);
        output.push_str(&format!("Cooler Control: {}\n", self.control_mode));

        match self.fan_level {
            Some(level) => output.push_str(&format!("Cooler Level: {}%\n", level)),
            None => output.push_str("Cooler Level: Unavailable\n"),
        }
        match self.fan_rpm {
            Some(rpm) => output.push_str(&format!("Cooler Speed: {} RPM\n", rpm)),
            None => output.push_str("Cooler Speed: Unavailable\n"),
        }
        if let Some(util) = &self.utilization {
            output.push_str(&format!("Utilization: {}\n", util));
        }

        output
    }

    fn to_compact(&self) -> String {
        format!(
            "{}°C, {} at {}",
            self.temperature_c,
            self.control_mode,
            self.fan_level
                .map_or_else(|| "-".to_string(), |l| format!("{}%", l))
        )
    }
}

/// Cooler readings display
#[derive(Debug, Clone, Serialize)]
pub struct FanReadings {
    pub level: u8,
    pub rpm: Option<i32>,
    pub control_mode: String,
}

impl TableDisplay for FanReadings {
    fn to_table(&self) -> String {
        let mut output = format!("Cooler Level: {}% ({})\n", self.level, self.control_mode);
        match self.rpm {
            Some(rpm) => output.push_str(&format!("Cooler Speed: {} RPM", rpm)),
            None => output.push_str("Cooler Speed: Unavailable"),
        }
        output
    }

    fn to_compact(&self) -> String {
        format!("{}% ({})", self.level, self.control_mode)
    }
}

/// Simple message output
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message: String,
    pub success: bool,
}

impl TableDisplay for Message {
    fn to_table(&self) -> String {
        if self.success {
            format!("✓ {}", self.message)
        } else {
            format!("✗ {}", self.message)
        }
    }
}
