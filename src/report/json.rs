//! Machine-readable reporter (`--json`).

use std::io::Write;

use super::{AuditReport, Reporter};
use crate::types::RouteCheck;

/// Writes the whole [`AuditReport`] as one JSON document when the run ends.
pub struct JsonReporter<W: Write> {
    out: W,
}

impl JsonReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn route_checked(&mut self, check: &RouteCheck) {
        tracing::debug!(controller = %check.controller, outcome = %check.outcome, "route checked");
    }

    fn finish(&mut self, report: &AuditReport) {
        let written = serde_json::to_writer_pretty(&mut self.out, report)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(self.out));
        if let Err(e) = written {
            tracing::error!(error = %e, "failed to write JSON report");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RunSummary;
    use crate::types::{CheckOutcome, ResolvedHandler};
    use std::path::PathBuf;

    #[test]
    fn writes_summary_and_checks() {
        let report = AuditReport {
            total_routes: 5,
            summary: RunSummary {
                checked: 1,
                no_security: 1,
                skipped: 1,
                malformed: 0,
            },
            checks: vec![
                RouteCheck {
                    controller: "App\\Controller\\Foo::bar".into(),
                    handler: Some(ResolvedHandler {
                        file_path: PathBuf::from("src/Controller/Foo.php"),
                        function_name: "bar".into(),
                    }),
                    outcome: CheckOutcome::Failed,
                },
                RouteCheck {
                    controller: "App\\Controller\\Gone::x".into(),
                    handler: None,
                    outcome: CheckOutcome::SkippedMissingFile {
                        path: PathBuf::from("src/Controller/Gone.php"),
                    },
                },
            ],
        };

        let mut buf = Vec::new();
        JsonReporter::new(&mut buf).finish(&report);
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["total_routes"], 5);
        assert_eq!(value["summary"]["no_security"], 1);
        assert_eq!(value["checks"][0]["status"], "failed");
        assert_eq!(value["checks"][0]["handler"]["function_name"], "bar");
        assert_eq!(value["checks"][1]["status"], "skipped_missing_file");
        assert_eq!(value["checks"][1]["path"], "src/Controller/Gone.php");
    }
}
