//! Audit orchestration — runs the full route check for one configuration.

pub mod pipeline;

pub use pipeline::AuditPipeline;
