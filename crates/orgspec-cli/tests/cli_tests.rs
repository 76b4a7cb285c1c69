//! Integration tests for the orgspec binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command for the orgspec binary, isolated from any user or project config.
fn orgspec_cmd(root: &TempDir, global: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("orgspec").expect("Failed to find orgspec binary");
    cmd.current_dir(root.path())
        .env("ORGSPEC_CONFIG_DIR", global.path())
        .env_remove("ORGSPEC_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn dirs() -> (TempDir, TempDir) {
    (TempDir::new().unwrap(), TempDir::new().unwrap())
}

// ============================================================================
// show
// ============================================================================

#[test]
fn test_no_command_shows_all_organisations() {
    let (root, global) = dirs();
    orgspec_cmd(&root, &global)
        .assert()
        .success()
        .stdout(predicate::str::contains("Organisation 1 Specification"))
        .stdout(predicate::str::contains("Organisation 2 Specification"))
        .stdout(predicate::str::contains("Org 1 (org1)"))
        .stdout(predicate::str::contains("Org 2 (org2)"));
}

#[test]
fn test_show_single_organisation_text() {
    let (root, global) = dirs();
    orgspec_cmd(&root, &global)
        .args(["show", "org1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dev1 [DEV]"))
        .stdout(predicate::str::contains("foo: Org 1/dev1"))
        .stdout(predicate::str::contains("vault:atl/dev1#ATL_DB_PASSWORD"))
        .stdout(predicate::str::contains("Org 2").not());
}

#[test]
fn test_show_single_organisation_keeps_its_number() {
    let (root, global) = dirs();
    orgspec_cmd(&root, &global)
        .args(["show", "org2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Organisation 2 Specification"))
        .stdout(predicate::str::contains("Organisation 1 Specification").not());
}

#[test]
fn test_show_json_is_resolved() {
    let (root, global) = dirs();
    let output = orgspec_cmd(&root, &global)
        .args(["show", "org2", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["short_name"], "org2");
    let envs = value["environments"].as_array().unwrap();
    assert_eq!(envs.len(), 4);
    assert_eq!(envs[3]["name"], "prd");
    assert_eq!(envs[3]["db_config"]["db_user"], "ATL_ENTERPRISE_OWNER");
    assert_eq!(envs[3]["db_config"]["db_password"]["path"], "atl/prd");
}

#[test]
fn test_show_all_yaml() {
    let (root, global) = dirs();
    orgspec_cmd(&root, &global)
        .args(["show", "-f", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("organisations:"))
        .stdout(predicate::str::contains("short_name: org1"));
}

#[test]
fn test_show_unknown_organisation_fails() {
    let (root, global) = dirs();
    orgspec_cmd(&root, &global)
        .args(["show", "org9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Organisation not found: org9"));
}

#[test]
fn test_show_invalid_format_fails() {
    let (root, global) = dirs();
    orgspec_cmd(&root, &global)
        .args(["show", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid output format: xml"));
}

// ============================================================================
// list / env
// ============================================================================

#[test]
fn test_list_shows_environment_counts() {
    let (root, global) = dirs();
    orgspec_cmd(&root, &global)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Org 1 (2 environments)"))
        .stdout(predicate::str::contains("Org 2 (4 environments)"));
}

#[test]
fn test_env_lookup() {
    let (root, global) = dirs();
    orgspec_cmd(&root, &global)
        .args(["env", "org2", "stg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stg [STG]"))
        .stdout(predicate::str::contains("vault:atl/stg#ATL_DB_PASSWORD"));
}

#[test]
fn test_env_missing_fails() {
    let (root, global) = dirs();
    orgspec_cmd(&root, &global)
        .args(["env", "org1", "prd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Environment not found: org1/prd"));
}

// ============================================================================
// configuration
// ============================================================================

#[test]
fn test_project_manifest_adds_organisation() {
    let (root, global) = dirs();
    fs::write(
        root.path().join("orgspec.toml"),
        r#"
[[organisations]]
name = "Org 3"
short_name = "org3"

[[organisations.environments]]
name = "tst"
env_type = "TST"
db_user = "ORG3_OWNER"
"#,
    )
    .unwrap();

    orgspec_cmd(&root, &global)
        .args(["env", "org3", "tst"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ORG3_OWNER (password: vault:atl/tst#ATL_DB_PASSWORD)"));
}

#[test]
fn test_manifest_default_format() {
    let (root, global) = dirs();
    fs::write(global.path().join("config.toml"), "[output]\nformat = \"json\"\n").unwrap();

    let output = orgspec_cmd(&root, &global)
        .args(["env", "org1", "dev"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "dev");
    assert_eq!(value["components"][0]["component_type"], "COMPONENT1");
}

#[test]
fn test_missing_explicit_config_fails() {
    let (root, global) = dirs();
    orgspec_cmd(&root, &global)
        .args(["--config", "absent.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let (root, global) = dirs();
    orgspec_cmd(&root, &global)
        .args(["-v", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Organisations"))
        .stderr(predicate::str::contains("Built specification"));
}
