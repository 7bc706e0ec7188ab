//! JSON output format for analysis results
//!
//! `--format json` counterpart to the plain-text console report, for machine
//! parsing and pipeline use.

use crate::analyzer::ClassifiedCommand;
use crate::attack_data::UNKNOWN_TECHNIQUE_NAME;
use serde::{Deserialize, Serialize};

/// A resolved technique attached to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonTechnique {
    /// Technique identifier (e.g., "T1083", or "Unknown" for the sentinel)
    pub id: String,
    pub name: String,
    pub description: String,
    /// Remediation guidance; never empty
    pub solutions: Vec<String>,
}

/// A single classified command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonCommand {
    pub command: String,
    pub techniques: Vec<JsonTechnique>,
}

/// Summary statistics for the analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    /// Commands present in the result set
    pub total_commands: u64,
    /// Technique attributions across all commands
    pub total_techniques: u64,
    /// Commands that matched no rule and carry the placeholder record
    pub unknown_commands: u64,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Classified commands, in log order
    pub commands: Vec<JsonCommand>,
    /// Summary statistics
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Create an empty JSON output structure
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "attackmap-json-v1".to_string(),
            commands: Vec::new(),
            summary: JsonSummary {
                total_commands: 0,
                total_techniques: 0,
                unknown_commands: 0,
            },
        }
    }

    /// Build the full output from an analysis result set
    pub fn from_results(results: &[ClassifiedCommand]) -> Self {
        let mut output = Self::new();
        for result in results {
            output.add_command(result);
        }
        output
    }

    /// Add a classified command to the output
    pub fn add_command(&mut self, result: &ClassifiedCommand) {
        self.summary.total_commands += 1;
        self.summary.total_techniques += result.techniques.len() as u64;
        if result
            .techniques
            .iter()
            .any(|t| t.name == UNKNOWN_TECHNIQUE_NAME)
        {
            self.summary.unknown_commands += 1;
        }
        self.commands.push(JsonCommand {
            command: result.command.clone(),
            techniques: result
                .techniques
                .iter()
                .map(|t| JsonTechnique {
                    id: t.id.clone(),
                    name: t.name.clone(),
                    description: t.description.clone(),
                    solutions: t.solutions.clone(),
                })
                .collect(),
        });
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}
