//! Routine parameter resolution: built-in presets or a TOML file.

use std::fs;
use std::path::Path;

use autoseq_routines::RoutineConfig;
use autoseq_types::AutoError;

/// Resolve a routine: `--config <file>` wins; otherwise `name` must be one
/// of the built-in presets.
///
/// # Errors
///
/// [`AutoError::Config`] for an unreadable or malformed file, or an unknown
/// preset name.
pub fn load(name: &str, file: Option<&Path>) -> Result<RoutineConfig, AutoError> {
    if let Some(path) = file {
        let text = fs::read_to_string(path)
            .map_err(|e| AutoError::Config(format!("cannot read {}: {e}", path.display())))?;
        return toml::from_str(&text)
            .map_err(|e| AutoError::Config(format!("cannot parse {}: {e}", path.display())));
    }

    match name {
        "net-high" => Ok(RoutineConfig::net_high()),
        "chamber" => Ok(RoutineConfig::chamber()),
        other => Err(AutoError::Config(format!(
            "unknown routine preset '{other}' (expected 'net-high' or 'chamber')"
        ))),
    }
}
