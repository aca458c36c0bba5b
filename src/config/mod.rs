//! Configuration system — YAML config file, defaults, validation.

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config, validate_config};
pub use schema::{AuditConfig, CONFIG_KEY, DEFAULT_CONFIG_FILE};
