//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Minimal ATT&CK-shaped STIX bundle covering the techniques the rule table
/// can emit
pub const SAMPLE_DATASET: &str = r#"{
    "objects": [
        {
            "type": "attack-pattern",
            "name": "File and Directory Discovery",
            "description": "Adversaries may enumerate files and directories.",
            "external_references": [{"source_name": "mitre-attack", "external_id": "T1083"}]
        },
        {
            "type": "attack-pattern",
            "name": "Data from Local System",
            "description": "Adversaries may search local system sources.",
            "external_references": [{"source_name": "mitre-attack", "external_id": "T1005"}]
        },
        {
            "type": "attack-pattern",
            "name": "Account Discovery",
            "description": "Adversaries may list local or domain accounts.",
            "external_references": [{"source_name": "mitre-attack", "external_id": "T1087"}]
        },
        {
            "type": "attack-pattern",
            "name": "Valid Accounts",
            "description": "Adversaries may abuse legitimate credentials.",
            "external_references": [{"source_name": "mitre-attack", "external_id": "T1078"}]
        },
        {
            "type": "attack-pattern",
            "name": "Command and Scripting Interpreter",
            "description": "Adversaries may abuse command interpreters.",
            "external_references": [{"source_name": "mitre-attack", "external_id": "T1059"}]
        },
        {
            "type": "attack-pattern",
            "name": "Indicator Removal",
            "description": "Adversaries may delete or modify artifacts.",
            "external_references": [{"source_name": "mitre-attack", "external_id": "T1070"}]
        },
        {
            "type": "attack-pattern",
            "name": "Ingress Tool Transfer",
            "description": "Adversaries may transfer tools into a network.",
            "external_references": [{"source_name": "mitre-attack", "external_id": "T1105"}]
        }
    ]
}"#;

/// Write the sample dataset into `dir` and return its path
pub fn write_dataset(dir: &Path) -> PathBuf {
    let path = dir.join("enterprise-attack.json");
    fs::write(&path, SAMPLE_DATASET).unwrap();
    path
}

/// Write a history log into `dir` and return its path
pub fn write_history(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("history");
    fs::write(&path, contents).unwrap();
    path
}
