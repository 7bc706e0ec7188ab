//! Command classification against an ordered ATT&CK rule table
//!
//! Maps a single shell command string to zero or more MITRE ATT&CK technique
//! identifiers. The rule table is an explicit ordered list of anchored
//! patterns evaluated top to bottom with first-match-wins semantics: rule
//! order is part of the contract, not an implementation detail.
//!
//! Patterns match only a command's leading verb (plus argument content for a
//! small set of verbs). A verb appearing mid-string does not match.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel identifier emitted for commands no rule recognizes.
///
/// Not a real technique id; the resolver maps it to a placeholder record.
pub const UNKNOWN_TECHNIQUE: &str = "Unknown";

/// Outcome of a matched rule
#[derive(Debug)]
enum Outcome {
    /// Emit these technique identifiers, in order
    Emit(&'static [&'static str]),
    /// Disambiguate on argument content: first matching secondary predicate
    /// wins, otherwise fall back to `default`
    Refine {
        cases: Vec<(Regex, &'static [&'static str])>,
        default: &'static [&'static str],
    },
    /// Explicitly non-actionable command; emits no techniques at all
    Drop,
}

/// A single (predicate, outcome) entry in the rule table
#[derive(Debug)]
struct Rule {
    pattern: Regex,
    outcome: Outcome,
}

fn rule(pattern: &str, outcome: Outcome) -> Rule {
    Rule {
        // Patterns are compile-time literals; a failure here is a bug in the
        // rule table itself, not an input error.
        pattern: Regex::new(pattern).expect("rule table pattern must compile"),
        outcome,
    }
}

fn refinement(pattern: &str, ids: &'static [&'static str]) -> (Regex, &'static [&'static str]) {
    (
        Regex::new(pattern).expect("refinement pattern must compile"),
        ids,
    )
}

/// The ordered rule table. Evaluation order is load-bearing: `cat` must be
/// checked before the generic fallback, `clear` must short-circuit to an
/// empty result, and so on.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // Navigation / listing
        rule(r"^\s*cd(\s+.*)?$", Outcome::Emit(&["T1083"])),
        rule(r"^\s*ls(\s+.*)?$", Outcome::Emit(&["T1083"])),
        // File reads; credential and privilege-config files additionally
        // indicate account discovery
        rule(
            r"^\s*cat\s+.*$",
            Outcome::Refine {
                cases: vec![
                    refinement(r"\bpasswd\b", &["T1005", "T1087"]),
                    refinement(r"\bsudoers\b", &["T1005", "T1087"]),
                ],
                default: &["T1005"],
            },
        ),
        // Redirecting echo into the shell history file
        rule(
            r"^\s*echo\s+.*>\s*\.zsh_history\s*$",
            Outcome::Emit(&["T1070"]),
        ),
        rule(r"^\s*whoami\s*$", Outcome::Emit(&["T1078"])),
        // Screen clear carries no signal and is dropped from results entirely
        rule(r"^\s*clear\s*$", Outcome::Drop),
        rule(r"^\s*uname(\s+.*)?$", Outcome::Emit(&["T1005"])),
        rule(r"^\s*sudo(\s+.*)?$", Outcome::Emit(&["T1078"])),
        rule(r"^\s*history(\s+.*)?$", Outcome::Emit(&["T1059"])),
        rule(r"^\s*(poweroff|reboot)\s*$", Outcome::Emit(&["T1086"])),
        rule(r"^\s*(wget|curl)\s+.*$", Outcome::Emit(&["T1105"])),
        rule(r"^\s*(netstat|ss)(\s+.*)?$", Outcome::Emit(&["T1049"])),
        rule(r"^\s*(chmod|chown)\s+.*$", Outcome::Emit(&["T1070"])),
        rule(r"^\s*(find|grep)\s+.*$", Outcome::Emit(&["T1083"])),
        // Kept as-is from the upstream mapping table even though T1060 does
        // not line up with the current public taxonomy; see DESIGN.md.
        rule(r"^\s*systemctl\s+.*$", Outcome::Emit(&["T1060"])),
        rule(r"^\s*(ps|top)(\s+.*)?$", Outcome::Emit(&["T1083"])),
        rule(r"^\s*(traceroute|ping)\s+.*$", Outcome::Emit(&["T1069"])),
    ]
});

fn emit(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_string()).collect()
}

/// Classify a single command string into technique identifiers.
///
/// Returns an empty vector only for explicitly non-actionable commands
/// (`clear`); anything that matches no rule yields the [`UNKNOWN_TECHNIQUE`]
/// sentinel, so callers can rely on "empty means drop".
pub fn classify(command: &str) -> Vec<String> {
    for rule in RULES.iter() {
        if rule.pattern.is_match(command) {
            return match &rule.outcome {
                Outcome::Emit(ids) => emit(ids),
                Outcome::Refine { cases, default } => cases
                    .iter()
                    .find(|(predicate, _)| predicate.is_match(command))
                    .map_or_else(|| emit(default), |(_, ids)| emit(ids)),
                Outcome::Drop => Vec::new(),
            };
        }
    }
    vec![UNKNOWN_TECHNIQUE.to_string()]
}
