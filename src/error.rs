//! Unified error type for route-audit.
//!
//! Only fatal conditions live here. Per-route problems (missing handler file,
//! malformed controller reference) are `CheckOutcome` values, not errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Pattern error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Route listing failed: {0}")]
    RouteSource(String),
}

pub type Result<T> = std::result::Result<T, AuditError>;
