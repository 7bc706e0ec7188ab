//! Integration tests for --format json output
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

mod utils;

use predicates::prelude::*;

#[test]
fn test_json_output_valid_format() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = utils::write_dataset(dir.path());
    let history = utils::write_history(dir.path(), "cd /tmp\n");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("attackmap");
    cmd.arg("-f")
        .arg(&history)
        .arg("--data")
        .arg(&dataset)
        .arg("--offline")
        .arg("--format")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"version\":"))
        .stdout(predicate::str::contains("\"format\": \"attackmap-json-v1\""))
        .stdout(predicate::str::contains("\"commands\":"))
        .stdout(predicate::str::contains("\"summary\":"));
}

#[test]
fn test_json_output_parses() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = utils::write_dataset(dir.path());
    let history = utils::write_history(dir.path(), "cd /tmp; clear; whoami\nfrobnicate\n");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("attackmap");
    cmd.arg("-f")
        .arg(&history)
        .arg("--data")
        .arg(&dataset)
        .arg("--offline")
        .arg("--format")
        .arg("json");

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let json_start = stdout.find('{').unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();

    assert_eq!(parsed["format"], "attackmap-json-v1");
    assert!(parsed["commands"].is_array());
    // clear dropped: cd, whoami, frobnicate remain
    assert_eq!(parsed["summary"]["total_commands"], 3);
    assert_eq!(parsed["summary"]["unknown_commands"], 1);
}

#[test]
fn test_json_preserves_command_order() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = utils::write_dataset(dir.path());
    let history = utils::write_history(dir.path(), "whoami\ncd /etc\ncat passwd\n");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("attackmap");
    cmd.arg("-f")
        .arg(&history)
        .arg("--data")
        .arg(&dataset)
        .arg("--offline")
        .arg("--format")
        .arg("json");

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json_start = stdout.find('{').unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();

    let commands: Vec<&str> = parsed["commands"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["command"].as_str().unwrap())
        .collect();
    assert_eq!(commands, vec!["whoami", "cd /etc", "cat passwd"]);
}

#[test]
fn test_json_technique_ids_and_solutions() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = utils::write_dataset(dir.path());
    let history = utils::write_history(dir.path(), "cat /etc/sudoers\n");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("attackmap");
    cmd.arg("-f")
        .arg(&history)
        .arg("--data")
        .arg(&dataset)
        .arg("--offline")
        .arg("--format")
        .arg("json");

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json_start = stdout.find('{').unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();

    let techniques = parsed["commands"][0]["techniques"].as_array().unwrap();
    let ids: Vec<&str> = techniques
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["T1005", "T1087"]);

    for technique in techniques {
        assert!(!technique["solutions"].as_array().unwrap().is_empty());
    }
}
