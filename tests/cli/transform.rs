//! Tests for `vaultlayer transform`.

use crate::support::*;

#[test]
fn test_transform_default_options() {
    let t = Test::new();

    let output = t.transform("ENV_Database__Host");
    assert_success(&output);
    assert_stdout_contains(&output, "Database:Host");
    assert_stdout_contains(&output, "allowed");
}

#[test]
fn test_transform_reports_blocked_key() {
    let t = Test::new();

    let output = t.transform("ENV_Logging__LogLevel__Default");
    assert_success(&output);
    assert_stdout_contains(&output, "Logging:LogLevel:Default");
    assert_stdout_contains(&output, "blocked");
}

#[test]
fn test_transform_with_options() {
    let t = Test::with_options(
        r#"
SecretsSubPaths = ["app"]
ExceptKeys = ["Database"]
RequiredKeys = ["Database:Password"]
"#,
    );

    let output = t
        .cmd()
        .args(["transform", "ENV_Database__Password", "--options", "vault.toml"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "allowed");

    let output = t
        .cmd()
        .args(["transform", "ENV_Database__Host", "--options", "vault.toml"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "blocked");
}
