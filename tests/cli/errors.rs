//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_shows_usage() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vaultlayer"));
}

#[test]
fn test_missing_options_file() {
    let t = Test::new();

    t.cmd()
        .args(["paths", "--options", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read options file"));
}

#[test]
fn test_malformed_options_file() {
    let t = Test::with_options("this is not valid toml { [ }");

    let output = t.paths();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse options");
}

#[test]
fn test_verbose_flag_logs_debug() {
    let t = Test::with_options(SINGLE_PATH_OPTIONS);
    t.write_secret("secret", "services/billing/api", r#"{"ENV_A": "1"}"#);

    let output = t.load_json(&["--verbose"]);
    assert_success(&output);
    assert_stderr_contains(&output, "secrets merged");
}

#[test]
fn test_default_no_debug_output() {
    let t = Test::with_options(SINGLE_PATH_OPTIONS);
    t.write_secret("secret", "services/billing/api", r#"{"ENV_A": "1"}"#);

    let output = t.load_json(&[]);
    assert_success(&output);
    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "Default mode should not show debug/trace output"
    );
}

#[test]
fn test_log_env_var() {
    let t = Test::with_options(SINGLE_PATH_OPTIONS);
    t.write_secret("secret", "services/billing/api", r#"{"ENV_A": "1"}"#);

    let output = t
        .cmd()
        .env("VAULTLAYER_LOG", "vaultlayer=debug")
        .args(["load", "-o", "vault.toml", "-s", "secrets", "--json"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "computed secret paths");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_vaultlayer") || out.contains("complete"));
}
