//! Access-control scanner — textual search for a security call in a handler.
//!
//! This is a heuristic, not a parser. For a method `show`, the pattern is
//!
//! ```text
//! (?s)public function show\([^{]*\{\s.*(?:<requirement>|<requirement>...)
//! ```
//!
//! The match starts at the signature, runs to the first `{` after the
//! parameter list, then `.*` spans the *rest of the file*. A requirement call
//! in a later method of the same class therefore also counts. Nested braces,
//! control flow, and reachability are not considered, and a same-named
//! signature inside a comment can be picked up before the real one.
//!
//! The wildcard spans run with Unicode disabled so that stray non-UTF-8 bytes
//! in a controller file do not stop the match.

use std::path::Path;

use regex::bytes::Regex;

use crate::error::{AuditError, Result};
use crate::types::{CheckOutcome, ResolvedHandler};

// ---------------------------------------------------------------------------
// SecurityRequirement
// ---------------------------------------------------------------------------

/// Ordered list of call expressions accepted as an access-control check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityRequirement {
    patterns: Vec<String>,
}

impl SecurityRequirement {
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.is_empty() {
            return Err(AuditError::Config(
                "at least one security requirement pattern is needed".to_string(),
            ));
        }
        Ok(Self { patterns })
    }

    /// Regex alternation of the literal patterns, e.g.
    /// `\$this->denyAccessUnlessGranted|!\$this->isGranted`.
    pub fn alternation(&self) -> String {
        self.patterns
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|")
    }
}

// ---------------------------------------------------------------------------
// SecurityScanner
// ---------------------------------------------------------------------------

/// Checks handler methods for a [`SecurityRequirement`].
#[derive(Debug, Clone)]
pub struct SecurityScanner {
    requirement: SecurityRequirement,
    alternation: String,
}

impl SecurityScanner {
    pub fn new(requirement: SecurityRequirement) -> Self {
        let alternation = requirement.alternation();
        Self {
            requirement,
            alternation,
        }
    }

    pub fn requirement(&self) -> &SecurityRequirement {
        &self.requirement
    }

    /// Build the signature-anchored search pattern for `function_name`.
    pub fn pattern_for(&self, function_name: &str) -> Result<Regex> {
        let pattern = format!(
            r"(?s)public function {}\((?-u:[^{{])*\{{\s(?-u:.)*(?:{})",
            regex::escape(function_name),
            self.alternation
        );
        Ok(Regex::new(&pattern)?)
    }

    /// Whether `source` contains `function_name` followed by a requirement call.
    pub fn has_security_check(&self, source: &[u8], function_name: &str) -> Result<bool> {
        Ok(self.pattern_for(function_name)?.is_match(source))
    }

    /// Read the handler file under `project_root` and classify it.
    pub fn check(&self, project_root: &Path, handler: &ResolvedHandler) -> CheckOutcome {
        let path = project_root.join(&handler.file_path);

        if !path.exists() {
            return CheckOutcome::SkippedMissingFile { path };
        }

        let source = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                return CheckOutcome::SkippedUnreadable {
                    path,
                    reason: e.to_string(),
                }
            }
        };

        match self.has_security_check(&source, &handler.function_name) {
            Ok(true) => CheckOutcome::Passed,
            Ok(false) => CheckOutcome::Failed,
            Err(e) => CheckOutcome::Malformed {
                reason: format!(
                    "cannot build a search pattern for '{}': {e}",
                    handler.function_name
                ),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
