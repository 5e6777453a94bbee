//! CLI smoke tests. None of these touch the network: invalid input is
//! rejected before any lookup, and the other commands are local.

use assert_cmd::Command;
use predicates::prelude::*;

fn mailproof() -> Command {
    Command::cargo_bin("mailproof").expect("binary builds")
}

#[test]
fn help_lists_subcommands() {
    mailproof()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("selectors"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn scan_rejects_empty_domain() {
    mailproof()
        .args(["scan", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid domain"));
}

#[test]
fn scan_rejects_url_input() {
    mailproof()
        .args(["scan", "https://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid domain"));
}

#[test]
fn scan_rejects_out_of_range_timeout() {
    mailproof()
        .args(["scan", "example.com", "--timeout", "99"])
        .assert()
        .failure();
}

#[test]
fn selectors_lists_builtin_names() {
    mailproof()
        .args(["selectors", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default"))
        .stdout(predicate::str::contains("selector1"));
}

#[test]
fn selectors_json_output_is_parseable() {
    let output = mailproof()
        .args(["selectors", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: Vec<String> = serde_json::from_slice(&output).expect("valid JSON array");
    assert!(parsed.contains(&"default".to_string()));
}

#[test]
fn config_path_prints_a_toml_location() {
    mailproof()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_rejects_unknown_keys() {
    mailproof()
        .args(["config", "get", "nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}
