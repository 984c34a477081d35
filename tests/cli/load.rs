//! Tests for `vaultlayer load`.

use crate::support::*;

#[test]
fn test_load_merges_secrets_over_base() {
    let t = Test::with_options(SINGLE_PATH_OPTIONS);
    t.write("appsettings.json", BASE_CONFIG);
    t.write_secret("secret", "services/billing/api", API_SECRETS);

    let output = t.load_json(&["--base", "appsettings.json"]);
    assert_success(&output);

    let config = stdout_json(&output);
    assert_eq!(config["Database:Password"], "vault-password");
    assert_eq!(config["FeatureFlags:Beta"], "true");
    assert_eq!(config["Database:Host"], "localhost");
    // default except keys
    assert_eq!(config["Logging:LogLevel:Default"], "Information");
    assert_eq!(config["Kestrel"], "http://0.0.0.0:8080");
}

#[test]
fn test_load_later_paths_win() {
    let t = Test::with_options(LAYERED_OPTIONS);
    t.write_secret(
        "secret",
        "services/billing/common",
        r#"{"ENV_Queue__Url": "amqp://common", "ENV_Region": "eu-west-1"}"#,
    );
    t.write_secret("secret", "services/billing/api", r#"{"ENV_Queue__Url": "amqp://api"}"#);
    t.write_secret("secret", "services/billing/worker", r#"{"ENV_Queue__Url": "amqp://worker"}"#);

    let output = t.load_json(&[]);
    assert_success(&output);

    let config = stdout_json(&output);
    assert_eq!(config["Queue:Url"], "amqp://worker");
    assert_eq!(config["Region"], "eu-west-1");
}

#[test]
fn test_load_missing_secrets_fails() {
    let t = Test::with_options(SINGLE_PATH_OPTIONS);
    t.write("appsettings.json", BASE_CONFIG);

    let output = t.load_json(&["--base", "appsettings.json"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "error occurred while trying to get configuration from vault");
    assert_stderr_contains(&output, "--optional");
}

#[test]
fn test_load_optional_keeps_base() {
    let t = Test::with_options(SINGLE_PATH_OPTIONS);
    t.write("appsettings.json", BASE_CONFIG);

    let output = t.load_json(&["--base", "appsettings.json", "--optional"]);
    assert_success(&output);

    let config = stdout_json(&output);
    assert_eq!(config["Database:Password"], "local");
    assert_stderr_contains(&output, "optional secret provider failed");
}

#[test]
fn test_load_non_string_secret_fails() {
    let t = Test::with_options(SINGLE_PATH_OPTIONS);
    t.write_secret("secret", "services/billing/api", r#"{"ENV_Port": 8080}"#);

    let output = t.load_json(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "ENV_Port is not a string value");
}

#[test]
fn test_load_custom_mount_point() {
    let t = Test::with_options(
        r#"
MountPoint = "kv"
SecretsSubPaths = ["app"]
UseSecretsCommonPath = false
"#,
    );
    t.write_secret("kv", "app", r#"{"ENV_Name": "from-kv"}"#);

    let output = t.load_json(&[]);
    assert_success(&output);
    assert_eq!(stdout_json(&output)["Name"], "from-kv");
}

#[test]
fn test_load_plain_output() {
    let t = Test::with_options(SINGLE_PATH_OPTIONS);
    t.write_secret("secret", "services/billing/api", r#"{"ENV_Api__Key": "sk-live"}"#);

    let output = t
        .cmd()
        .args(["load", "-o", "vault.toml", "-s", "secrets"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Configuration");
    assert_stdout_contains(&output, "Api:Key = sk-live");
}
