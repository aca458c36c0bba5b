//! Config file loading and validation.
//!
//! Any problem found here is fatal: the run stops before a single route is
//! listed or scanned.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use super::schema::{AuditConfig, CONFIG_KEY};
use crate::error::{AuditError, Result};

/// Fields that must be YAML sequences of strings when present.
const SEQUENCE_FIELDS: &[&str] = &[
    "exclude_all_routes_that_start_with",
    "exclude_full_routes",
    "security_requirement",
    "router_command",
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load, parse, and validate the config file at `path`.
pub fn load_config(path: &Path) -> Result<AuditConfig> {
    if !path.exists() {
        return Err(AuditError::Config(format!(
            "The config file '{}' does not exist.",
            path.display()
        )));
    }

    let contents = std::fs::read_to_string(path)?;
    let config = parse_config(&contents, path)?;
    validate_config(&config)?;

    tracing::info!(
        config = %path.display(),
        project = %config.project_path,
        "configuration loaded"
    );
    Ok(config)
}

/// Parse a YAML document into an [`AuditConfig`] without touching the
/// filesystem. `origin` is only used in error messages.
pub fn parse_config(contents: &str, origin: &Path) -> Result<AuditConfig> {
    let document: Value = serde_yaml::from_str(contents).map_err(|e| {
        AuditError::Config(format!(
            "The config file '{}' is not valid YAML: {}",
            origin.display(),
            e
        ))
    })?;

    let section = document.get(CONFIG_KEY).ok_or_else(|| {
        AuditError::Config(format!(
            "The config file '{}' does not contain the key '{}'.",
            origin.display(),
            CONFIG_KEY
        ))
    })?;

    // `route-audit:` with nothing under it means "all defaults".
    if section.is_null() {
        return Ok(AuditConfig::default());
    }

    let Some(mapping) = section.as_mapping() else {
        return Err(AuditError::Config(format!(
            "The '{}' key in '{}' must be a mapping.",
            CONFIG_KEY,
            origin.display()
        )));
    };

    // A key with no value falls back to its default, same as a missing key.
    let section: Mapping = mapping
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    for field in SEQUENCE_FIELDS {
        if let Some(value) = section.get(*field) {
            if !is_string_sequence(value) {
                return Err(AuditError::Config(format!(
                    "The {field} config is not a list of strings."
                )));
            }
        }
    }

    Ok(serde_yaml::from_value(Value::Mapping(section))?)
}

/// Check the semantic constraints that serde cannot express.
pub fn validate_config(config: &AuditConfig) -> Result<()> {
    if config.security_requirement.is_empty() {
        return Err(AuditError::Config(
            "The security_requirement config must contain at least one pattern.".to_string(),
        ));
    }
    if config.router_command.is_empty() {
        return Err(AuditError::Config(
            "The router_command config must name a program.".to_string(),
        ));
    }

    if !config.project_root().exists() {
        return Err(AuditError::Config(format!(
            "The project path '{}' does not exist.",
            config.project_path
        )));
    }
    if !config.controllers_root().exists() {
        return Err(AuditError::Config(format!(
            "The controllers path '{}' does not exist.",
            config.controllers_root().display()
        )));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn is_string_sequence(value: &Value) -> bool {
    value
        .as_sequence()
        .map(|items| items.iter().all(Value::is_string))
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
