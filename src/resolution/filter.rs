//! Route filtering — dedup controller references and apply exclusion rules.
//!
//! Records without a controller, or whose controller has no `::` separator,
//! are dropped silently. They are data-hygiene noise, not findings.

use std::collections::HashSet;

use crate::config::AuditConfig;
use crate::types::RouteRecord;

/// Separator between class path and method name in a controller reference.
pub const METHOD_SEPARATOR: &str = "::";

/// Prefix and exact-match exclusions, fixed for the duration of a run.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRules {
    prefixes: Vec<String>,
    exact_matches: HashSet<String>,
}

impl ExclusionRules {
    pub fn new<P, E>(prefixes: P, exact_matches: E) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
            exact_matches: exact_matches.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &AuditConfig) -> Self {
        Self::new(
            config.exclude_all_routes_that_start_with.iter().cloned(),
            config.exclude_full_routes.iter().cloned(),
        )
    }

    /// True if `reference` equals an exact entry or starts with any prefix.
    pub fn is_excluded(&self, reference: &str) -> bool {
        self.exact_matches.contains(reference)
            || self
                .prefixes
                .iter()
                .any(|prefix| reference.starts_with(prefix.as_str()))
    }
}

/// Reduce raw route records to the ordered list of unique controller
/// references that should be audited.
///
/// First-occurrence order is preserved.
pub fn filter_routes(records: &[RouteRecord], rules: &ExclusionRules) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut controllers = Vec::new();

    for record in records {
        let Some(controller) = record.controller.as_deref() else {
            continue;
        };
        if !controller.contains(METHOD_SEPARATOR) || rules.is_excluded(controller) {
            continue;
        }
        if seen.insert(controller) {
            controllers.push(controller.to_string());
        }
    }

    controllers
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
