//! Shared components for CLI commands
//!
//! This module contains the logging setup and formatting helpers used
//! across command implementations.

use crate::Result;
use colored::Colorize;
use tracing::debug;

/// Set up structured logging at the given level
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("prop_analyzer={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Format an efficiency ratio as a percentage, or "n/a" when undefined
pub fn format_efficiency(efficiency: f64) -> String {
    if efficiency.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.1}%", efficiency * 100.0)
    }
}

/// Render a feasibility flag as a colored yes/no mark
pub fn feasibility_mark(feasible: bool) -> String {
    if feasible {
        format!("{}", "yes".green())
    } else {
        format!("{}", "no".red())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_efficiency() {
        assert_eq!(format_efficiency(0.817), "81.7%");
        assert_eq!(format_efficiency(0.0), "0.0%");
        assert_eq!(format_efficiency(f64::NAN), "n/a");
    }

    #[test]
    fn test_feasibility_mark_text() {
        // Color codes may or may not be present depending on the terminal
        assert!(feasibility_mark(true).contains("yes"));
        assert!(feasibility_mark(false).contains("no"));
    }
}
