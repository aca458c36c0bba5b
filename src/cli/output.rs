//! Console styling for `route-audit check` — banner, status blocks, progress.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Print the route-audit banner.
pub fn print_banner() {
    let banner = r#"
   ____              __            ___             ___ __
  / __ \____  __  __/ /____       /   | __  ______/ (_) /_
 / /_/ / __ \/ / / / __/ _ \_____/ /| |/ / / / __  / / __/
/ _, _/ /_/ / /_/ / /_/  __/____/ ___ / /_/ / /_/ / / /_
/_/ |_|\____/\__,_/\__/\___/    /_/  |_\__,_/\__,_/_/\__/
"#;

    println!("{}", style(banner).cyan().bold());
    println!(
        "  {} {} {}",
        style("Route Access Control Checker").white().bold(),
        style("·").dim(),
        style("controller actions without a security check").dim()
    );
    println!();
}

/// Plain progress line, e.g. "Checking routes ...".
pub fn print_step(message: &str) {
    println!("{}", message);
}

/// Yellow warning block.
pub fn print_warning(message: &str) {
    println!();
    for line in message.lines() {
        println!(" {} {}", style("[WARNING]").yellow().bold(), line);
    }
    println!();
}

/// Red error block.
pub fn print_error(message: &str) {
    println!();
    for line in message.lines() {
        println!(" {} {}", style("[ERROR]").red().bold(), line);
    }
    println!();
}

/// Green success block.
pub fn print_success(message: &str) {
    println!();
    for line in message.lines() {
        println!(" {} {}", style("[OK]").green().bold(), line);
    }
    println!();
}

/// Create a styled progress bar over the routes being checked.
pub fn create_check_progress(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  {spinner:.cyan} [{bar:40.cyan/dim}] {pos}/{len} routes {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
