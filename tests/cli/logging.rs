use crate::cli::support::stepsearch;
use predicates::prelude::*;

// ============================================================================
// Logging flags
// ============================================================================

#[test]
fn test_verbose_shows_debug_messages() {
    stepsearch()
        .args(["--verbose", "run", "A", "C"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    stepsearch()
        .args(["--log-level", "warn", "run", "A", "C"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_log_json_emits_structured_lines() {
    stepsearch()
        .args(["--log-level", "debug", "--log-json", "run", "A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"dispatch\""));
}

#[test]
fn test_log_env_var_overrides_flag() {
    stepsearch()
        .env("STEPSEARCH_LOG", "stepsearch=debug")
        .args(["run", "A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("dispatch"));
}
