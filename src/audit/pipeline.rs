//! Audit pipeline — list → filter → resolve → scan → report.
//!
//! One synchronous pass. A route source failure aborts the run; everything
//! that goes wrong for an individual route becomes a [`CheckOutcome`] and the
//! loop moves on.

use std::path::PathBuf;
use std::time::Instant;

use crate::config::AuditConfig;
use crate::error::Result;
use crate::report::{AuditReport, Reporter, RunSummary};
use crate::resolution::{filter_routes, ExclusionRules, HandlerResolver, RouteSource};
use crate::security::{SecurityRequirement, SecurityScanner};
use crate::types::{CheckOutcome, RouteCheck};

/// The components of one audit, built from an [`AuditConfig`].
pub struct AuditPipeline {
    project_root: PathBuf,
    rules: ExclusionRules,
    resolver: HandlerResolver,
    scanner: SecurityScanner,
}

impl AuditPipeline {
    pub fn new(config: &AuditConfig) -> Result<Self> {
        let requirement = SecurityRequirement::new(config.security_requirement.clone())?;
        Ok(Self {
            project_root: config.project_root().to_path_buf(),
            rules: ExclusionRules::from_config(config),
            resolver: HandlerResolver::from_config(config),
            scanner: SecurityScanner::new(requirement),
        })
    }

    /// Audit every route `source` yields, streaming progress to `reporter`.
    pub fn run(
        &self,
        source: &dyn RouteSource,
        reporter: &mut dyn Reporter,
    ) -> Result<AuditReport> {
        let start = Instant::now();

        let records = source.fetch()?;
        reporter.routes_listed(records.len());

        let controllers = filter_routes(&records, &self.rules);
        tracing::info!(
            total = records.len(),
            selected = controllers.len(),
            "routes filtered"
        );
        reporter.routes_selected(controllers.len());

        let mut checks = Vec::with_capacity(controllers.len());
        for controller in controllers {
            let check = self.check_controller(controller);
            reporter.route_checked(&check);
            checks.push(check);
        }

        let summary = RunSummary::from_outcomes(checks.iter().map(|c| &c.outcome));
        let report = AuditReport {
            total_routes: records.len(),
            summary,
            checks,
        };

        tracing::info!(
            %summary,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "audit finished"
        );
        reporter.finish(&report);
        Ok(report)
    }

    /// Resolve and scan a single controller reference.
    pub fn check_controller(&self, controller: String) -> RouteCheck {
        let handler = match self.resolver.resolve(&controller) {
            Ok(handler) => handler,
            Err(malformed) => {
                tracing::warn!(%controller, "malformed controller reference");
                return RouteCheck {
                    controller,
                    handler: None,
                    outcome: CheckOutcome::Malformed {
                        reason: malformed.to_string(),
                    },
                };
            }
        };

        tracing::debug!(
            %controller,
            file = %handler.file_path.display(),
            function = %handler.function_name,
            "resolved handler"
        );

        let outcome = self.scanner.check(&self.project_root, &handler);
        if outcome.is_skipped() {
            tracing::warn!(%controller, %outcome, "route not checked");
        }

        RouteCheck {
            controller,
            handler: Some(handler),
            outcome,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
