//! Motor-spec configuration loading
//!
//! The analyzer resolves its motor spec in layers: built-in defaults, then
//! an optional JSON spec file (explicit `--motor-file`, or the user spec at
//! `~/.config/prop-analyzer/motor.json` when present), then explicit CLI
//! flag overrides.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::models::MotorSpec;
use crate::constants::{CONFIG_DIR_NAME, MOTOR_SPEC_FILENAME};
use crate::{Error, Result};

/// Default location of the user motor spec file
pub fn default_motor_spec_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(MOTOR_SPEC_FILENAME))
}

/// Load and validate a motor spec from a JSON file
pub fn load_motor_spec(path: &Path) -> Result<MotorSpec> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read motor spec {}", path.display()), e))?;

    let spec: MotorSpec = serde_json::from_str(&content).map_err(|e| {
        Error::configuration(format!(
            "invalid motor spec file {}: {}",
            path.display(),
            e
        ))
    })?;

    spec.validate()?;
    Ok(spec)
}

/// Field-level CLI overrides applied on top of a base spec
#[derive(Debug, Clone, Default)]
pub struct MotorOverrides {
    pub kv_rpm_per_volt: Option<f64>,
    pub resistance_ohm: Option<f64>,
    pub voltage: Option<f64>,
    pub no_load_current: Option<f64>,
    pub max_current: Option<f64>,
    /// Drop the current limit entirely; wins over `max_current`
    pub no_current_limit: bool,
}

impl MotorOverrides {
    fn apply(&self, spec: &mut MotorSpec) {
        if let Some(kv) = self.kv_rpm_per_volt {
            spec.kv_rpm_per_volt = kv;
        }
        if let Some(resistance) = self.resistance_ohm {
            spec.resistance_ohm = resistance;
        }
        if let Some(voltage) = self.voltage {
            spec.voltage = voltage;
        }
        if let Some(no_load) = self.no_load_current {
            spec.no_load_current = no_load;
        }
        if self.no_current_limit {
            spec.max_current = None;
        } else if let Some(limit) = self.max_current {
            spec.max_current = Some(limit);
        }
    }
}

/// Resolve the motor spec with the layered approach (defaults -> file -> flags)
pub fn resolve_motor_spec(file: Option<&Path>, overrides: &MotorOverrides) -> Result<MotorSpec> {
    let mut spec = match file {
        Some(path) => load_motor_spec(path)?,
        None => match default_motor_spec_path() {
            Some(path) if path.exists() => {
                debug!("Using user motor spec: {}", path.display());
                load_motor_spec(&path)?
            }
            _ => MotorSpec::default(),
        },
    };

    overrides.apply(&mut spec);
    spec.validate()?;

    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_spec_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_motor_spec_valid() {
        let file = write_spec_file(
            r#"{"kv_rpm_per_volt": 880.0, "resistance_ohm": 0.03, "voltage": 14.8, "no_load_current": 1.1, "max_current": 45.0}"#,
        );

        let spec = load_motor_spec(file.path()).unwrap();
        assert_eq!(spec.kv_rpm_per_volt, 880.0);
        assert_eq!(spec.max_current, Some(45.0));
    }

    #[test]
    fn test_load_motor_spec_rejects_bad_json() {
        let file = write_spec_file("{ not json");
        assert!(matches!(
            load_motor_spec(file.path()),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_load_motor_spec_rejects_out_of_range_fields() {
        let file = write_spec_file(
            r#"{"kv_rpm_per_volt": -720.0, "resistance_ohm": 0.05, "voltage": 22.2}"#,
        );
        assert!(matches!(
            load_motor_spec(file.path()),
            Err(Error::InvalidSpec { .. })
        ));
    }

    #[test]
    fn test_load_motor_spec_missing_file() {
        assert!(matches!(
            load_motor_spec(Path::new("/nonexistent/motor.json")),
            Err(Error::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_overrides_apply_on_top_of_file() {
        let file = write_spec_file(
            r#"{"kv_rpm_per_volt": 880.0, "resistance_ohm": 0.03, "voltage": 14.8, "max_current": 45.0}"#,
        );

        let overrides = MotorOverrides {
            voltage: Some(22.2),
            ..Default::default()
        };

        let spec = resolve_motor_spec(Some(file.path()), &overrides).unwrap();
        assert_eq!(spec.kv_rpm_per_volt, 880.0);
        assert_eq!(spec.voltage, 22.2);
    }

    #[test]
    fn test_no_current_limit_wins_over_limit_value() {
        let overrides = MotorOverrides {
            max_current: Some(80.0),
            no_current_limit: true,
            ..Default::default()
        };

        let mut spec = MotorSpec::default();
        overrides.apply(&mut spec);
        assert_eq!(spec.max_current, None);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let overrides = MotorOverrides {
            kv_rpm_per_volt: Some(0.0),
            ..Default::default()
        };

        // No file: defaults underneath, but the override breaks the spec
        let result = resolve_motor_spec(None, &overrides);
        assert!(matches!(result, Err(Error::InvalidSpec { .. })));
    }
}
