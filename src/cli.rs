//! CLI argument parsing for Attackmap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "attackmap")]
#[command(version)]
#[command(about = "Analyze shell history and map commands to MITRE ATT&CK techniques", long_about = None)]
pub struct Cli {
    /// Path to the shell history file to analyze
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: PathBuf,

    /// Output PDF file name (optional; console report only if omitted)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Console output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Location of the cached ATT&CK dataset
    #[arg(long = "data", value_name = "PATH", default_value = "enterprise-attack.json")]
    pub data: PathBuf,

    /// Re-download the dataset when the cached copy is older than this many days
    #[arg(long = "max-age-days", value_name = "DAYS", default_value = "90")]
    pub max_age_days: u64,

    /// Never touch the network; require an existing cached dataset
    #[arg(long = "offline")]
    pub offline: bool,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
