//! Integration tests for the full audit pipeline.
//!
//! These run against the `symfony-app` fixture: a handful of controllers, a
//! router dump, and configs wired to `cat routes.json` instead of PHP.

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use route_audit::config::load_config;
use route_audit::report::{AuditReport, Reporter, RunSummary};
use route_audit::resolution::{parse_route_records, ConsoleRouteSource, StaticRouteSource};
use route_audit::{AuditConfig, AuditPipeline, CheckOutcome, RouteCheck, RouteRecord};

const FIXTURE: &str = "tests/fixtures/symfony-app";

/// Reporter that swallows everything.
struct Silent;

impl Reporter for Silent {
    fn route_checked(&mut self, _check: &RouteCheck) {}
    fn finish(&mut self, _report: &AuditReport) {}
}

fn fixture_config() -> AuditConfig {
    AuditConfig {
        project_path: format!("{FIXTURE}/"),
        ..Default::default()
    }
}

fn fixture_records() -> Vec<RouteRecord> {
    let raw = std::fs::read_to_string(PathBuf::from(FIXTURE).join("routes.json")).unwrap();
    parse_route_records(&raw).unwrap()
}

fn run(config: &AuditConfig, records: Vec<RouteRecord>) -> AuditReport {
    AuditPipeline::new(config)
        .unwrap()
        .run(&StaticRouteSource::new(records), &mut Silent)
        .unwrap()
}

fn outcome_of<'a>(report: &'a AuditReport, controller: &str) -> &'a CheckOutcome {
    &report
        .checks
        .iter()
        .find(|c| c.controller == controller)
        .unwrap_or_else(|| panic!("{controller} was not checked"))
        .outcome
}

#[test]
fn fixture_project_full_run() {
    let report = run(&fixture_config(), fixture_records());

    assert_eq!(report.total_routes, 12);
    assert_eq!(
        report.summary,
        RunSummary {
            checked: 4,
            no_security: 1,
            skipped: 1,
            malformed: 1,
        }
    );
    assert!(!report.summary.is_success());

    let order: Vec<&str> = report.checks.iter().map(|c| c.controller.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "App\\Controller\\HomeController::index",
            "App\\Controller\\PostController::list",
            "App\\Controller\\PostController::edit",
            "App\\Controller\\Admin\\UserController::index",
            "App\\Controller\\LegacyController::export",
            "App\\Controller\\WeirdController::a::b",
        ]
    );
}

#[test]
fn fixture_outcomes_per_route() {
    let report = run(&fixture_config(), fixture_records());

    assert_eq!(
        outcome_of(&report, "App\\Controller\\HomeController::index"),
        &CheckOutcome::Failed
    );
    assert_eq!(
        outcome_of(&report, "App\\Controller\\PostController::edit"),
        &CheckOutcome::Passed
    );
    assert_eq!(
        outcome_of(&report, "App\\Controller\\Admin\\UserController::index"),
        &CheckOutcome::Passed
    );
    assert!(matches!(
        outcome_of(&report, "App\\Controller\\LegacyController::export"),
        CheckOutcome::SkippedMissingFile { .. }
    ));
    assert!(matches!(
        outcome_of(&report, "App\\Controller\\WeirdController::a::b"),
        CheckOutcome::Malformed { .. }
    ));
}

#[test]
fn file_wide_scan_credits_later_guard() {
    // `list` has no guard; `edit`, further down the same file, does. The scan
    // runs from the signature to the end of the file, so `list` passes.
    let report = run(&fixture_config(), fixture_records());
    assert_eq!(
        outcome_of(&report, "App\\Controller\\PostController::list"),
        &CheckOutcome::Passed
    );
}

#[test]
fn zero_routes_is_success() {
    let report = run(&fixture_config(), vec![]);
    assert_eq!(report.summary, RunSummary::default());
    assert_eq!(report.summary.exit_code(), 0);
}

#[test]
fn route_excluded_by_prefix_is_never_checked() {
    let report = run(
        &fixture_config(),
        vec![RouteRecord::new(
            "_wdt",
            "web_profiler.controller.profiler::toolbarAction",
        )],
    );
    assert!(report.checks.is_empty());
    assert_eq!(report.summary.checked, 0);
}

#[test]
fn missing_handler_file_is_skipped_and_run_succeeds() {
    let report = run(
        &fixture_config(),
        vec![RouteRecord::new(
            "legacy",
            "App\\Controller\\LegacyController::export",
        )],
    );
    assert_eq!(report.summary.checked, 0);
    assert_eq!(report.summary.skipped, 1);
    assert_eq!(report.summary.exit_code(), 0);
}

#[test]
fn unsecured_route_fails_the_run() {
    let report = run(
        &fixture_config(),
        vec![RouteRecord::new(
            "app_home",
            "App\\Controller\\HomeController::index",
        )],
    );
    assert_eq!(report.summary.no_security, 1);
    assert_eq!(report.summary.checked, 1);
    assert_ne!(report.summary.exit_code(), 0);
}

#[test]
fn pipeline_is_idempotent() {
    let config = fixture_config();
    let first = run(&config, fixture_records());
    let second = run(&config, fixture_records());
    assert_eq!(first.summary, second.summary);
    assert_eq!(first, second);
}

#[test]
fn console_route_source_with_loaded_config() {
    let config = load_config(&PathBuf::from(FIXTURE).join("route-audit.yaml")).unwrap();
    let source = ConsoleRouteSource::new(config.project_root(), config.router_command.clone());

    let report = AuditPipeline::new(&config)
        .unwrap()
        .run(&source, &mut Silent)
        .unwrap();
    assert_eq!(report.summary.checked, 4);
    assert_eq!(report.summary.no_security, 1);
}

#[test]
fn broken_router_command_is_fatal() {
    let config =
        load_config(&PathBuf::from(FIXTURE).join("route-audit-broken-router.yaml")).unwrap();
    let source = ConsoleRouteSource::new(config.project_root(), config.router_command.clone());

    let result = AuditPipeline::new(&config).unwrap().run(&source, &mut Silent);
    assert!(result.is_err());
}
