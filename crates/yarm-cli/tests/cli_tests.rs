//! Integration tests for the `yarm` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the to-json and
//! to-yaml subcommands through the actual binary, including stdin/stdout
//! piping, file I/O, flag handling, and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn yarm() -> Command {
    Command::cargo_bin("yarm").unwrap()
}

/// Run `yarm` with the given args and parse stdout as JSON.
fn json_output(args: &[&str], stdin: Option<&str>) -> serde_json::Value {
    let mut cmd = yarm();
    cmd.args(args);
    if let Some(input) = stdin {
        cmd.write_stdin(input);
    }
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout must be valid JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// to-json subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn to_json_stdin_to_stdout() {
    yarm()
        .arg("to-json")
        .write_stdin("name: Alice\nage: 30\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Alice\""))
        .stdout(predicate::str::contains("\"age\": 30"));
}

#[test]
fn to_json_strips_root_x_yarm_keys_by_default() {
    let value = json_output(&["to-json", "-i", &fixture("openapi.yaml")], None);

    assert!(value.get("x-yarm").is_none());
    assert!(value.get("x-yarm-generator").is_none());
    assert_eq!(value["info"]["x-yarm-owner"], "pets-team");
    assert_eq!(value["paths"]["/pets"]["get"]["operationId"], "listPets");
}

#[test]
fn to_json_keep_x_yarm() {
    let value = json_output(
        &["to-json", "-i", &fixture("openapi.yaml"), "--keep-x-yarm"],
        None,
    );

    assert_eq!(value["x-yarm"]["build"], 42);
    assert_eq!(value["x-yarm-generator"], "yarm");
}

#[test]
fn to_json_recursive() {
    let value = json_output(
        &["to-json", "-i", &fixture("openapi.yaml"), "--recursive"],
        None,
    );

    assert!(value.get("x-yarm").is_none());
    assert!(value["info"].get("x-yarm-owner").is_none());
    assert_eq!(value["info"]["title"], "Petstore");
}

#[test]
fn recursive_conflicts_with_keep_x_yarm() {
    yarm()
        .args(["to-json", "--keep-x-yarm", "--recursive"])
        .write_stdin("a: 1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn to_json_compact() {
    yarm()
        .args(["to-json", "--compact"])
        .write_stdin("a: 1\nb: [x, y]\n")
        .assert()
        .success()
        .stdout(r#"{"a":1,"b":["x","y"]}"#);
}

#[test]
fn to_json_file_to_file() {
    let dir = std::env::temp_dir().join(format!("yarm-cli-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("openapi.json");

    yarm()
        .args([
            "to-json",
            "-i",
            &fixture("openapi.yaml"),
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["openapi"], "3.0.1");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn to_json_invalid_yaml_fails() {
    yarm()
        .args(["to-json", "-i", &fixture("invalid.yaml")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to convert YAML to JSON (line "))
        .stderr(predicate::str::contains("invalid YAML format"));
}

#[test]
fn to_json_colliding_keys_fail_without_line() {
    yarm()
        .args(["to-json", "--keep-x-yarm"])
        .write_stdin("1: int\n'1': string\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to convert YAML to JSON\n"))
        .stderr(predicate::str::contains("duplicate key `1` after rendering"));
}

#[test]
fn to_json_blank_input_is_empty_output() {
    yarm()
        .arg("to-json")
        .write_stdin("   \n\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_input_file_fails() {
    yarm()
        .args(["to-json", "-i", "/nonexistent/openapi.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// to-yaml subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn to_yaml_file_to_stdout() {
    yarm()
        .args(["to-yaml", "-i", &fixture("petstore.json")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("openapi: 3.0.1\n"))
        .stdout(predicate::str::contains("x-yarm-owner: pets-team"))
        .stdout(predicate::str::contains("- pets"));
}

#[test]
fn to_yaml_invalid_json_fails() {
    yarm()
        .arg("to-yaml")
        .write_stdin(r#"{"key1":"value1","key2":2"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to convert JSON to YAML (line 1)"))
        .stderr(predicate::str::contains("invalid JSON format"));
}

#[test]
fn to_yaml_blank_input_is_empty_output() {
    yarm()
        .arg("to-yaml")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Roundtrip and logging
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn yaml_json_yaml_roundtrip_through_binary() {
    let json = yarm()
        .args(["to-json", "--keep-x-yarm", "-i", &fixture("openapi.yaml")])
        .output()
        .unwrap();
    assert!(json.status.success());

    let yaml = yarm()
        .arg("to-yaml")
        .write_stdin(json.stdout)
        .output()
        .unwrap();
    assert!(yaml.status.success());

    let original = std::fs::read_to_string(fixture("openapi.yaml")).unwrap();
    assert_eq!(String::from_utf8(yaml.stdout).unwrap(), original);
}

#[test]
fn verbose_logs_go_to_stderr() {
    yarm()
        .args(["-vv", "to-json", "--compact"])
        .env_remove("RUST_LOG")
        .write_stdin("a: 1\n")
        .assert()
        .success()
        .stdout(r#"{"a":1}"#)
        .stderr(predicate::str::contains("converting YAML to JSON"));
}

#[test]
fn help_lists_subcommands() {
    yarm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("to-json"))
        .stdout(predicate::str::contains("to-yaml"));
}
