//! Binary-level tests for the confweave CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const INDEX_JSON: &str = r#"{
    "declarations": [
        {
            "name": "com.acme.App",
            "kind": "class"
        },
        {
            "name": "com.acme.Server",
            "kind": "interface",
            "annotations": [
                {
                    "name": "org.eclipse.microprofile.config.inject.ConfigProperties",
                    "values": { "prefix": "server" }
                }
            ],
            "members": ["port"]
        }
    ],
    "injection_points": [
        {
            "declaring_type": "com.acme.App",
            "site": { "field": { "name": "retries" } },
            "type": "int",
            "qualifier": { "name": "app.retries" }
        },
        {
            "declaring_type": "com.acme.App",
            "site": { "field": { "name": "timeout" } },
            "type": "long",
            "qualifier": { "default_value": "30" }
        }
    ]
}"#;

fn write_index(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("index.json");
    fs::write(&path, INDEX_JSON).unwrap();
    path
}

fn confweave() -> Command {
    Command::cargo_bin("confweave").unwrap()
}

#[test]
fn test_emit_artifacts_writes_json_file() {
    let dir = TempDir::new().unwrap();
    let index = write_index(&dir);
    let out = dir.path().join("artifacts.json");

    confweave()
        .arg("--index")
        .arg(&index)
        .arg("--emit-artifacts")
        .arg(&out)
        .assert()
        .success();

    let raw = fs::read_to_string(&out).unwrap();
    assert!(raw.ends_with('\n'));
    let artifacts: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let requests = artifacts["property_requests"].as_array().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        artifacts["discovery_exclusions"][0]["type"],
        "com.acme.Server"
    );
}

#[test]
fn test_emit_artifacts_to_stdout() {
    let dir = TempDir::new().unwrap();
    let index = write_index(&dir);

    confweave()
        .arg("--index")
        .arg(&index)
        .arg("--emit-artifacts")
        .arg("-")
        .assert()
        .success()
        .stdout(predicate::str::contains("app.retries"));
}

#[test]
fn test_emit_requests_only() {
    let dir = TempDir::new().unwrap();
    let index = write_index(&dir);
    let out = dir.path().join("requests.json");

    confweave()
        .arg("--index")
        .arg(&index)
        .arg("--emit-requests")
        .arg(&out)
        .assert()
        .success();

    let requests: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let keys: Vec<&str> = requests
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["app.retries", "com.acme.App.timeout"]);
}

#[test]
fn test_sanity_line_on_stderr() {
    let dir = TempDir::new().unwrap();
    let index = write_index(&dir);

    confweave()
        .arg("--index")
        .arg(&index)
        .arg("--sanity")
        .assert()
        .success()
        .stderr(predicate::str::contains("sanity:").and(predicate::str::contains("requests=2")));
}

#[test]
fn test_missing_index_file_fails_with_context() {
    confweave()
        .arg("--index")
        .arg("/nonexistent/index.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("read index snapshot"));
}

#[test]
fn test_malformed_index_fails_with_context() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("index.json");
    fs::write(&path, "{ not json").unwrap();

    confweave()
        .arg("--index")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse index snapshot"));
}

#[test]
fn test_start_validation_reports_missing_key() {
    let dir = TempDir::new().unwrap();
    let index = write_index(&dir);
    let props = dir.path().join("app.properties");
    fs::write(&props, "# no keys defined\n").unwrap();

    confweave()
        .arg("--index")
        .arg(&index)
        .arg("--properties")
        .arg(&props)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("app.retries")
                .and(predicate::str::contains("com.acme.App#retries")),
        );
}

#[test]
fn test_start_validation_passes_with_resolved_keys() {
    let dir = TempDir::new().unwrap();
    let index = write_index(&dir);
    let props = dir.path().join("app.properties");
    fs::write(&props, "app.retries=5\n").unwrap();

    confweave()
        .arg("--index")
        .arg(&index)
        .arg("--properties")
        .arg(&props)
        .assert()
        .success();
}
