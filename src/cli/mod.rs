//! Command implementations behind the `route-audit` binary.

pub mod output;

use std::path::Path;

use crate::audit::AuditPipeline;
use crate::config::load_config;
use crate::error::Result;
use crate::report::{ConsoleReporter, JsonReporter, Reporter};
use crate::resolution::ConsoleRouteSource;

/// How `check` presents its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    pub json: bool,
    pub progress: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            json: false,
            progress: true,
        }
    }
}

/// Run `route-audit check` and return the process exit code.
///
/// Fatal errors are returned as `Err`; unsecured routes are reported through
/// the exit code.
pub fn run_check(config_path: &Path, options: CheckOptions) -> Result<i32> {
    if !options.json {
        output::print_banner();
    }

    let config = load_config(config_path)?;
    let pipeline = AuditPipeline::new(&config)?;
    let source = ConsoleRouteSource::new(config.project_root(), config.router_command.clone());

    let mut reporter: Box<dyn Reporter> = if options.json {
        Box::new(JsonReporter::stdout())
    } else {
        output::print_step("Generating list of routes ...");
        Box::new(ConsoleReporter::new(options.progress))
    };

    let report = pipeline.run(&source, reporter.as_mut())?;
    Ok(report.summary.exit_code())
}
