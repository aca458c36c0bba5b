//! Reporting — fold per-route outcomes into a summary and surface them.
//!
//! Passing routes are silent. Failures, skips, and malformed references are
//! reported individually, followed by a final summary.

pub mod console;
pub mod json;

use serde::Serialize;

use crate::types::{CheckOutcome, RouteCheck};

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Exit status when no unsecured route was found.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status when at least one route lacks a security check.
pub const EXIT_UNSECURED_ROUTES: i32 = 1;
/// Exit status for fatal errors (configuration, route listing).
pub const EXIT_FATAL: i32 = 2;

// ---------------------------------------------------------------------------
// RunSummary
// ---------------------------------------------------------------------------

/// Counters accumulated over one run.
///
/// `checked` only counts routes that were actually scanned (passed or failed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub checked: usize,
    pub no_security: usize,
    pub skipped: usize,
    pub malformed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &CheckOutcome) {
        match outcome {
            CheckOutcome::Passed => self.checked += 1,
            CheckOutcome::Failed => {
                self.checked += 1;
                self.no_security += 1;
            }
            CheckOutcome::SkippedMissingFile { .. } | CheckOutcome::SkippedUnreadable { .. } => {
                self.skipped += 1
            }
            CheckOutcome::Malformed { .. } => self.malformed += 1,
        }
    }

    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a CheckOutcome>) -> Self {
        outcomes.into_iter().fold(Self::default(), |mut summary, o| {
            summary.record(o);
            summary
        })
    }

    pub fn is_success(&self) -> bool {
        self.no_security == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            EXIT_SUCCESS
        } else {
            EXIT_UNSECURED_ROUTES
        }
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} routes checked, {} without security check ({} skipped, {} malformed)",
            self.checked, self.no_security, self.skipped, self.malformed
        )
    }
}

// ---------------------------------------------------------------------------
// AuditReport
// ---------------------------------------------------------------------------

/// Everything a finished run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Raw records returned by the route source.
    pub total_routes: usize,
    pub summary: RunSummary,
    pub checks: Vec<RouteCheck>,
}

// ---------------------------------------------------------------------------
// Reporter
// ---------------------------------------------------------------------------

/// Receives pipeline progress as it happens.
pub trait Reporter {
    /// The route source returned `total` raw records.
    fn routes_listed(&mut self, _total: usize) {}

    /// `count` unique controller references survived filtering.
    fn routes_selected(&mut self, _count: usize) {}

    fn route_checked(&mut self, check: &RouteCheck);

    fn finish(&mut self, report: &AuditReport);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
