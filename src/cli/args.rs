//! Command-line argument definitions for the propulsion analyzer
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::config::MotorOverrides;
use crate::constants::DEFAULT_SAMPLE_PATH;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the propulsion analyzer
///
/// Combines APC propeller performance reports with a brushless-motor
/// electrical model to derive per-operating-point electrical quantities.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "prop-analyzer",
    version,
    about = "Combine APC propeller performance reports with a brushless motor model",
    long_about = "Parses an APC performance report (.dat text or the PDF rendering) into RPM \
                  blocks of operating points, then derives motor current draw, required \
                  terminal voltage, electrical power, efficiency, and feasibility for every \
                  point from a motor electrical specification."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the propulsion analyzer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Derive motor electrical operating points for one RPM block
    Analyze(AnalyzeArgs),
    /// Parse a report and describe its structure without analysis
    Inspect(InspectArgs),
}

/// Arguments for the analyze command (main analysis)
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Performance report to analyze (.dat text or PDF)
    ///
    /// If not specified, the bundled APC 17x8 sample report is used.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Motor velocity constant in RPM per volt
    #[arg(long = "kv", value_name = "RPM_PER_VOLT")]
    pub kv: Option<f64>,

    /// Winding resistance in ohms
    #[arg(long = "resistance", value_name = "OHM")]
    pub resistance: Option<f64>,

    /// Supply voltage ceiling in volts
    #[arg(long = "voltage", value_name = "VOLT")]
    pub voltage: Option<f64>,

    /// No-load current in amps
    #[arg(long = "no-load-current", value_name = "AMP")]
    pub no_load_current: Option<f64>,

    /// Maximum continuous current in amps
    #[arg(
        long = "max-current",
        value_name = "AMP",
        conflicts_with = "no_current_limit"
    )]
    pub max_current: Option<f64>,

    /// Do not enforce any current limit
    #[arg(long = "no-current-limit")]
    pub no_current_limit: bool,

    /// JSON motor spec file
    ///
    /// Explicit flags override the file's values. Without this flag, a user
    /// spec at ~/.config/prop-analyzer/motor.json is picked up when present.
    #[arg(short = 'm', long = "motor-file", value_name = "FILE")]
    pub motor_file: Option<PathBuf>,

    /// RPM block to display
    ///
    /// If not specified, the highest RPM set point in the report is used.
    #[arg(long = "rpm", value_name = "RPM")]
    pub rpm: Option<u32>,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command (parse-only structure report)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Performance report to inspect (.dat text or PDF)
    ///
    /// If not specified, the bundled APC 17x8 sample report is used.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format for the structure report
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl AnalyzeArgs {
    /// Validate the analyze command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    input.display()
                )));
            }
        }

        if let Some(motor_file) = &self.motor_file {
            if !motor_file.exists() {
                return Err(Error::configuration(format!(
                    "Motor spec file does not exist: {}",
                    motor_file.display()
                )));
            }
        }

        Ok(())
    }

    /// The report to analyze: the given file, or the bundled sample
    pub fn resolve_input(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAMPLE_PATH))
    }

    /// Map the motor flags onto config-layer overrides
    pub fn overrides(&self) -> MotorOverrides {
        MotorOverrides {
            kv_rpm_per_volt: self.kv,
            resistance_ohm: self.resistance,
            voltage: self.voltage,
            no_load_current: self.no_load_current,
            max_current: self.max_current,
            no_current_limit: self.no_current_limit,
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl InspectArgs {
    /// The report to inspect: the given file, or the bundled sample
    pub fn resolve_input(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAMPLE_PATH))
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level(0, false), "warn");
        assert_eq!(log_level(1, false), "info");
        assert_eq!(log_level(2, false), "debug");
        assert_eq!(log_level(3, false), "trace");
        assert_eq!(log_level(2, true), "error");
    }

    #[test]
    fn test_analyze_defaults_to_bundled_sample() {
        let args = Args::parse_from(["prop-analyzer", "analyze"]);
        let Commands::Analyze(analyze) = args.get_command() else {
            panic!("expected analyze command");
        };
        assert_eq!(analyze.resolve_input(), PathBuf::from(DEFAULT_SAMPLE_PATH));
    }

    #[test]
    fn test_motor_flags_map_to_overrides() {
        let args = Args::parse_from([
            "prop-analyzer",
            "analyze",
            "--kv",
            "900",
            "--voltage",
            "14.8",
            "--no-current-limit",
        ]);
        let Commands::Analyze(analyze) = args.get_command() else {
            panic!("expected analyze command");
        };

        let overrides = analyze.overrides();
        assert_eq!(overrides.kv_rpm_per_volt, Some(900.0));
        assert_eq!(overrides.voltage, Some(14.8));
        assert_eq!(overrides.resistance_ohm, None);
        assert!(overrides.no_current_limit);
    }

    #[test]
    fn test_max_current_conflicts_with_no_current_limit() {
        let result = Args::try_parse_from([
            "prop-analyzer",
            "analyze",
            "--max-current",
            "60",
            "--no-current-limit",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_missing_input() {
        let args = Args::parse_from(["prop-analyzer", "analyze", "/nonexistent/report.dat"]);
        let Commands::Analyze(analyze) = args.get_command() else {
            panic!("expected analyze command");
        };
        assert!(analyze.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_existing_input() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "PROP RPM = 1000").unwrap();

        let args = Args::parse_from([
            "prop-analyzer",
            "analyze",
            file.path().to_str().unwrap(),
        ]);
        let Commands::Analyze(analyze) = args.get_command() else {
            panic!("expected analyze command");
        };
        assert!(analyze.validate().is_ok());
    }
}
