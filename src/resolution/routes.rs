//! Route listing — where raw route records come from.
//!
//! The production source runs the application's router introspection command
//! (Symfony's `debug:router --format=json` by default) and parses its JSON
//! output. Tests and embedders can feed records directly through
//! [`StaticRouteSource`].

use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

use crate::error::{AuditError, Result};
use crate::types::RouteRecord;

/// Anything that can produce the application's route table.
pub trait RouteSource {
    fn fetch(&self) -> Result<Vec<RouteRecord>>;
}

// ---------------------------------------------------------------------------
// ConsoleRouteSource
// ---------------------------------------------------------------------------

/// Runs an external command inside the project directory and parses its
/// stdout as a JSON route table.
pub struct ConsoleRouteSource {
    project_dir: PathBuf,
    command: Vec<String>,
}

impl ConsoleRouteSource {
    pub fn new(project_dir: impl Into<PathBuf>, command: Vec<String>) -> Self {
        Self {
            project_dir: project_dir.into(),
            command,
        }
    }

    fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

impl RouteSource for ConsoleRouteSource {
    fn fetch(&self) -> Result<Vec<RouteRecord>> {
        let (program, args) = self.command.split_first().ok_or_else(|| {
            AuditError::RouteSource("no router command configured".to_string())
        })?;

        tracing::debug!(
            command = %self.command_line(),
            dir = %self.project_dir.display(),
            "listing routes"
        );

        let output = Command::new(program)
            .args(args)
            .current_dir(&self.project_dir)
            .output()
            .map_err(|e| {
                AuditError::RouteSource(format!(
                    "The command '{}' could not be started: {e}",
                    self.command_line()
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AuditError::RouteSource(format!(
                "The command '{}' failed: {}",
                self.command_line(),
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_route_records(&stdout)
    }
}

// ---------------------------------------------------------------------------
// StaticRouteSource
// ---------------------------------------------------------------------------

/// A fixed, in-memory route table.
#[derive(Debug, Clone, Default)]
pub struct StaticRouteSource {
    records: Vec<RouteRecord>,
}

impl StaticRouteSource {
    pub fn new(records: Vec<RouteRecord>) -> Self {
        Self { records }
    }
}

impl RouteSource for StaticRouteSource {
    fn fetch(&self) -> Result<Vec<RouteRecord>> {
        Ok(self.records.clone())
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse router JSON output into route records.
///
/// Accepts an object keyed by route name (what `debug:router` emits) or a
/// plain array of routes. Routes without a string `defaults._controller`
/// yield a record whose `controller` is `None`.
pub fn parse_route_records(raw: &str) -> Result<Vec<RouteRecord>> {
    let document: Value = serde_json::from_str(raw).map_err(|e| {
        AuditError::RouteSource(format!("route listing is not valid JSON: {e}"))
    })?;

    match document {
        Value::Object(routes) => Ok(routes
            .into_iter()
            .map(|(name, route)| RouteRecord {
                name: Some(name),
                controller: controller_of(&route),
            })
            .collect()),
        Value::Array(routes) => Ok(routes
            .iter()
            .map(|route| RouteRecord {
                name: route
                    .get("name")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                controller: controller_of(route),
            })
            .collect()),
        other => Err(AuditError::RouteSource(format!(
            "route listing must be a JSON object or array, got {}",
            json_kind(&other)
        ))),
    }
}

fn controller_of(route: &Value) -> Option<String> {
    route
        .get("defaults")
        .and_then(|d| d.get("_controller"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
