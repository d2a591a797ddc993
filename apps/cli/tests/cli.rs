//! End-to-end tests for the `gatekeep` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RULES_TOML: &str = r#"
[[fields]]
field = "id"
rules = "required"

[[fields]]
field = "age"
rules = "min:18|max:200"
messages = { min = "Whooah! Too young.", max = "Whooah! Too old." }
"#;

fn gatekeep(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gatekeep").unwrap();
    cmd.current_dir(dir)
        .env_remove("GATEKEEP_OUTPUT")
        .env_remove("GATEKEEP_FAIL_EXIT_CODE")
        .env_remove("GATEKEEP_LOG_LEVEL")
        .env_remove("GATEKEEP_LOG_FORMAT")
        .env_remove("GATEKEEP_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn workspace(data: &str, rules: &str, rules_name: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.json"), data).unwrap();
    fs::write(dir.path().join(rules_name), rules).unwrap();
    dir
}

#[test]
fn rules_lists_registered_rules() {
    let dir = TempDir::new().unwrap();
    gatekeep(dir.path())
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha-num"))
        .stdout(predicate::str::contains("Field is required!"))
        .stdout(predicate::str::contains("Value must be a decimal!"));
}

#[test]
fn demo_prints_sample_report() {
    let dir = TempDir::new().unwrap();
    gatekeep(dir.path())
        .args(["demo", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""success": false"#))
        .stdout(predicate::str::contains("Whooah! Too old."))
        .stdout(predicate::str::contains("height").not());
}

#[test]
fn check_accepts_valid_data() {
    let dir = workspace(r#"{ "id": 1, "age": 30 }"#, RULES_TOML, "rules.toml");
    gatekeep(dir.path())
        .args(["check", "--data", "data.json", "--rules", "rules.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid: all fields passed"));
}

#[test]
fn check_rejects_invalid_data() {
    let dir = workspace(r#"{ "age": 1000 }"#, RULES_TOML, "rules.toml");
    gatekeep(dir.path())
        .args(["check", "--data", "data.json", "--rules", "rules.toml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("id: Field is required!"))
        .stdout(predicate::str::contains("age: Whooah! Too old."));
}

#[test]
fn check_reads_json_rules() {
    let rules = r#"{ "fields": [ { "field": "name", "rules": "required|alpha" } ] }"#;
    let dir = workspace(r#"{ "name": "bobby1" }"#, rules, "rules.json");
    gatekeep(dir.path())
        .args(["check", "--data", "data.json", "--rules", "rules.json", "--output", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Value must contain only alphabetic characters!",
        ));
}

#[test]
fn fail_exit_code_from_environment() {
    let dir = workspace(r#"{}"#, RULES_TOML, "rules.toml");
    gatekeep(dir.path())
        .env("GATEKEEP_FAIL_EXIT_CODE", "3")
        .args(["check", "--data", "data.json", "--rules", "rules.toml"])
        .assert()
        .code(3);
}

#[test]
fn fail_exit_code_from_config_file() {
    let dir = workspace(r#"{}"#, RULES_TOML, "rules.toml");
    fs::write(dir.path().join("gatekeep.toml"), "fail_exit_code = 4\n").unwrap();
    gatekeep(dir.path())
        .args(["check", "--data", "data.json", "--rules", "rules.toml"])
        .assert()
        .code(4);
}

#[test]
fn unknown_rule_is_a_configuration_error() {
    let rules = r#"{ "fields": [ { "field": "name", "rules": "required|between:1:2" } ] }"#;
    let dir = workspace(r#"{ "name": "x" }"#, rules, "rules.json");
    gatekeep(dir.path())
        .args(["check", "--data", "data.json", "--rules", "rules.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown rule `between`"));
}

#[test]
fn data_must_be_an_object() {
    let dir = workspace("[1, 2]", RULES_TOML, "rules.toml");
    gatekeep(dir.path())
        .args(["check", "--data", "data.json", "--rules", "rules.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must contain a JSON object"));
}

#[test]
fn missing_files_are_errors() {
    let dir = TempDir::new().unwrap();
    gatekeep(dir.path())
        .args(["check", "--data", "nope.json", "--rules", "nope.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read data file"));

    gatekeep(dir.path())
        .args(["--config", "missing.toml", "rules"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}
