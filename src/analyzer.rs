//! History log analysis
//!
//! Thin orchestration over the classifier and the technique index: split the
//! log into individual commands, classify each one, attach metadata, and
//! collect the results in log order.
//!
//! Splitting is line-based, then `;`-based within a line. Commands that
//! classify to an empty technique list (`clear`) are omitted from the result.
//! Whitespace-only fragments from stray semicolons are NOT filtered out; they
//! fall through to the "Unknown" sentinel and appear in the result, matching
//! the upstream behavior this tool reproduces.

use crate::attack_data::{TechniqueIndex, TechniqueRecord};
use crate::classifier;

/// A single command together with its resolved techniques.
///
/// `techniques` is never empty; commands with no techniques are dropped
/// before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCommand {
    pub command: String,
    pub techniques: Vec<TechniqueRecord>,
}

/// Analyze a history log against a loaded technique index.
///
/// Pure and idempotent: identical input and dataset produce structurally
/// identical results.
pub fn analyze(log_text: &str, index: &TechniqueIndex) -> Vec<ClassifiedCommand> {
    let mut results = Vec::new();
    for line in log_text.lines() {
        for fragment in line.trim().split(';') {
            let command = fragment.trim();
            let ids = classifier::classify(command);
            if ids.is_empty() {
                tracing::debug!(command, "dropping non-actionable command");
                continue;
            }
            let techniques = ids.iter().map(|id| index.resolve(id)).collect();
            results.push(ClassifiedCommand {
                command: command.to_string(),
                techniques,
            });
        }
    }
    results
}
