use anyhow::{Context, Result};
use attackmap::cli::{Cli, OutputFormat};
use attackmap::{analyzer, attack_data, cache, json_output, pdf_report, report};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    // Reference data must be fully loaded before any classification happens
    let max_age = chrono::Duration::days(args.max_age_days as i64);
    cache::ensure_dataset(&args.data, max_age, args.offline)?;
    let index = attack_data::TechniqueIndex::load(&args.data)?;
    tracing::debug!(techniques = index.len(), "reference dataset loaded");

    let log_text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read history file: {}", args.file.display()))?;

    let results = analyzer::analyze(&log_text, &index);

    match args.format {
        OutputFormat::Text => report::print_report(&results)?,
        OutputFormat::Json => {
            let output = json_output::JsonOutput::from_results(&results);
            println!("{}", output.to_json()?);
        }
    }

    if let Some(output_path) = &args.output {
        pdf_report::render_pdf(&results, output_path)?;
        eprintln!("PDF report generated: {}", output_path.display());
    }

    Ok(())
}
