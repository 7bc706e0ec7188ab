//! Attackmap - Shell history analyzer mapping commands to MITRE ATT&CK
//!
//! This library provides the core functionality for classifying shell
//! commands against an ordered rule table of ATT&CK technique identifiers,
//! enriching matches with metadata from the enterprise ATT&CK dataset, and
//! emitting console, JSON, and PDF reports.

pub mod analyzer;
pub mod attack_data;
pub mod cache;
pub mod classifier;
pub mod cli;
pub mod json_output;
pub mod pdf_report;
pub mod report;
