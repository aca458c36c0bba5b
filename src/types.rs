//! Core types shared by every stage of the audit.
//!
//! Data flows one way: [`RouteRecord`] → controller reference string →
//! [`ResolvedHandler`] → [`CheckOutcome`]. Everything is built fresh per run.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

// ---------------------------------------------------------------------------
// RouteRecord
// ---------------------------------------------------------------------------

/// One raw entry from the route listing.
///
/// Either field may be absent; the filter stage silently drops records that
/// carry no usable controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRecord {
    /// Route name as registered in the router, when known.
    pub name: Option<String>,
    /// Controller reference (`Namespace\Class::method`) from `defaults._controller`.
    pub controller: Option<String>,
}

impl RouteRecord {
    pub fn new(name: impl Into<String>, controller: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            controller: Some(controller.into()),
        }
    }

    /// A record without a controller (redirects, closures, etc.).
    pub fn without_controller(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            controller: None,
        }
    }
}

// ---------------------------------------------------------------------------
// ResolvedHandler
// ---------------------------------------------------------------------------

/// Source location of a controller action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedHandler {
    /// File path relative to the project root.
    pub file_path: PathBuf,
    /// Method name, taken verbatim from the controller reference.
    pub function_name: String,
}

// ---------------------------------------------------------------------------
// CheckOutcome
// ---------------------------------------------------------------------------

/// Result of auditing a single controller reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// A security requirement was found after the function signature.
    Passed,
    /// The function was scanned and no security requirement was found.
    Failed,
    /// The resolved handler file does not exist.
    SkippedMissingFile { path: PathBuf },
    /// The handler file exists but could not be read.
    SkippedUnreadable { path: PathBuf, reason: String },
    /// The controller reference could not be turned into a handler.
    Malformed { reason: String },
}

impl CheckOutcome {
    /// Whether this outcome counts towards the checked total.
    pub fn is_checked(&self) -> bool {
        matches!(self, CheckOutcome::Passed | CheckOutcome::Failed)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            CheckOutcome::SkippedMissingFile { .. } | CheckOutcome::SkippedUnreadable { .. }
        )
    }

    /// Canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckOutcome::Passed => "passed",
            CheckOutcome::Failed => "failed",
            CheckOutcome::SkippedMissingFile { .. } => "skipped_missing_file",
            CheckOutcome::SkippedUnreadable { .. } => "skipped_unreadable",
            CheckOutcome::Malformed { .. } => "malformed",
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RouteCheck
// ---------------------------------------------------------------------------

/// A controller reference paired with its audit outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteCheck {
    pub controller: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<ResolvedHandler>,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}
