//! route-audit — static access-control audit for web application routes.
//!
//! Lists an application's routes, maps each controller reference to its
//! source file and method, and flags methods whose source does not contain a
//! configured security call after the signature.

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod report;
pub mod resolution;
pub mod security;
pub mod types;

pub use audit::AuditPipeline;
pub use config::AuditConfig;
pub use error::{AuditError, Result};
pub use report::{AuditReport, RunSummary};
pub use types::{CheckOutcome, ResolvedHandler, RouteCheck, RouteRecord};
