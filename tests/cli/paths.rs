//! Tests for `vaultlayer paths`.

use crate::support::*;

#[test]
fn test_paths_lists_common_first() {
    let t = Test::with_options(LAYERED_OPTIONS);

    let output = t.paths();
    assert_success(&output);

    let out = stdout(&output);
    let common = out.find("services/billing/common").expect("common path missing");
    let api = out.find("services/billing/api").expect("api path missing");
    let worker = out.find("services/billing/worker").expect("worker path missing");
    assert!(common < api && api < worker);
    assert!(out.contains("mount: secret"));
}

#[test]
fn test_paths_requires_sub_paths() {
    let t = Test::with_options("SecretsBasePath = \"services\"\n");

    let output = t.paths();
    assert_failure(&output);
    assert_stderr_contains(&output, "SecretsSubPaths");
}

#[test]
fn test_paths_reads_json_options() {
    let t = Test::new();
    t.write(
        "vault.json",
        r#"{"SecretsSubPaths": ["orders/api"], "UseSecretsCommonPath": false}"#,
    );

    let output = t
        .cmd()
        .args(["paths", "--options", "vault.json"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "orders/api");
}

#[test]
fn test_paths_options_from_env() {
    let t = Test::with_options(LAYERED_OPTIONS);

    let output = t
        .cmd()
        .env("VAULTLAYER_OPTIONS", "vault.toml")
        .arg("paths")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "services/billing/common");
}
