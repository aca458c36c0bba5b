//! Configuration data structures for route-audit.
//!
//! Mirrors the YAML section under [`CONFIG_KEY`]. Every field is optional in
//! the file; missing fields fall back to the defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The single recognized top-level key of the config document.
pub const CONFIG_KEY: &str = "route-audit";

/// Config filename looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "route-audit.yaml";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Immutable settings for one audit run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Root of the audited application. The router command runs here.
    #[serde(default = "default_project_path")]
    pub project_path: String,

    /// Controllers directory, relative to `project_path`.
    #[serde(default = "default_controllers_path")]
    pub controllers_path: String,

    /// Controller references starting with any of these are skipped.
    #[serde(default = "default_excluded_prefixes")]
    pub exclude_all_routes_that_start_with: Vec<String>,

    /// Controller references equal to any of these are skipped.
    #[serde(default = "default_excluded_routes")]
    pub exclude_full_routes: Vec<String>,

    /// Call expressions accepted as an access-control check.
    #[serde(default = "default_security_requirement")]
    pub security_requirement: Vec<String>,

    /// Namespace prefix that maps onto `controllers_path`.
    #[serde(default = "default_root_namespace")]
    pub root_namespace: String,

    /// Extension appended to resolved class paths.
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// Program and arguments that print the route table as JSON.
    #[serde(default = "default_router_command")]
    pub router_command: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            project_path: default_project_path(),
            controllers_path: default_controllers_path(),
            exclude_all_routes_that_start_with: default_excluded_prefixes(),
            exclude_full_routes: default_excluded_routes(),
            security_requirement: default_security_requirement(),
            root_namespace: default_root_namespace(),
            file_extension: default_file_extension(),
            router_command: default_router_command(),
        }
    }
}

impl AuditConfig {
    pub fn project_root(&self) -> &Path {
        Path::new(&self.project_path)
    }

    /// `project_path` joined with `controllers_path`.
    pub fn controllers_root(&self) -> PathBuf {
        self.project_root().join(&self.controllers_path)
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_project_path() -> String {
    "./".to_string()
}

fn default_controllers_path() -> String {
    "src/".to_string()
}

fn default_excluded_prefixes() -> Vec<String> {
    vec!["web_profiler".to_string(), "twig".to_string()]
}

fn default_excluded_routes() -> Vec<String> {
    vec!["error_controller::preview".to_string()]
}

fn default_security_requirement() -> Vec<String> {
    vec![
        "$this->denyAccessUnlessGranted".to_string(),
        "!$this->isGranted".to_string(),
    ]
}

fn default_root_namespace() -> String {
    "App\\".to_string()
}

fn default_file_extension() -> String {
    ".php".to_string()
}

fn default_router_command() -> Vec<String> {
    ["php", "bin/console", "debug:router", "--show-controllers", "--format=json"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
