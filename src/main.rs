use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use route_audit::cli::{run_check, CheckOptions};
use route_audit::config::DEFAULT_CONFIG_FILE;
use route_audit::observability::init_logging;
use route_audit::report::EXIT_FATAL;

#[derive(Parser)]
#[command(name = "route-audit")]
#[command(version, about = "Find controller actions that lack an access-control check")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check access control for each route
    #[command(alias = "security:check-access-control")]
    Check {
        /// Path to the config file
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Print the report as JSON instead of styled text
        #[arg(long)]
        json: bool,
        /// Disable the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            config,
            json,
            no_progress,
        } => {
            let options = CheckOptions {
                json,
                progress: !no_progress,
            };
            let code = run_check(&config, options).unwrap_or_else(|e| {
                if json {
                    eprintln!("Error: {}", e);
                } else {
                    route_audit::cli::output::print_error(&e.to_string());
                }
                EXIT_FATAL
            });
            process::exit(code);
        }
    }
}
