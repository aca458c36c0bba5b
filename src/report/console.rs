//! Human-readable terminal reporter.

use indicatif::ProgressBar;

use super::{AuditReport, Reporter};
use crate::cli::output;
use crate::types::{CheckOutcome, RouteCheck};

/// Prints warnings and errors as routes are checked, with an optional
/// progress bar, then a final summary.
pub struct ConsoleReporter {
    show_progress: bool,
    progress: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new(show_progress: bool) -> Self {
        Self {
            show_progress,
            progress: None,
        }
    }

    /// Print through the progress bar so its line is redrawn afterwards.
    fn emit(&self, print: impl FnOnce()) {
        match &self.progress {
            Some(pb) => pb.suspend(print),
            None => print(),
        }
    }
}

/// The message shown for a non-passing route, if any.
pub fn describe(check: &RouteCheck) -> Option<String> {
    let route = &check.controller;
    match &check.outcome {
        CheckOutcome::Passed => None,
        CheckOutcome::Failed => Some(format!("No security check for function '{route}'")),
        CheckOutcome::SkippedMissingFile { path } => Some(format!(
            "The route '{route}' has not been checked.\nBecause the file '{}' does not exist.",
            path.display()
        )),
        CheckOutcome::SkippedUnreadable { path, reason } => Some(format!(
            "The route '{route}' has not been checked.\nBecause the file '{}' could not be read: {reason}",
            path.display()
        )),
        CheckOutcome::Malformed { reason } => Some(format!(
            "The route '{route}' has not been checked.\n{reason}"
        )),
    }
}

impl Reporter for ConsoleReporter {
    fn routes_listed(&mut self, total: usize) {
        output::print_step(&format!("{total} total routes found on the project.\n"));
        output::print_step("Filtering and formatting routes ...");
    }

    fn routes_selected(&mut self, count: usize) {
        output::print_step(&format!("{count} routes will be checked.\n"));
        output::print_step("Checking routes ...");
        if self.show_progress && count > 0 {
            self.progress = Some(output::create_check_progress(count as u64));
        }
    }

    fn route_checked(&mut self, check: &RouteCheck) {
        if let Some(message) = describe(check) {
            if check.outcome == CheckOutcome::Failed {
                self.emit(|| output::print_error(&message));
            } else {
                self.emit(|| output::print_warning(&message));
            }
        }
        if let Some(pb) = &self.progress {
            pb.inc(1);
        }
    }

    fn finish(&mut self, report: &AuditReport) {
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }

        let summary = &report.summary;
        output::print_step(&format!(
            "Finished, {} routes have been checked.",
            summary.checked
        ));

        let message = format!(
            "{} routes without security check have been found.",
            summary.no_security
        );
        if summary.is_success() {
            output::print_success(&message);
        } else {
            output::print_error(&message);
        }
    }
}
