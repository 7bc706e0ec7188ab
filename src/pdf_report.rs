//! PDF report generation
//!
//! Renders the analysis result set as a paginated document: a title, then per
//! command a heading followed by each technique's name, description, and
//! bulleted solutions. Rendering uses `genpdf` (pure Rust, no external
//! binaries); fonts are discovered from common system font directories.

use crate::analyzer::ClassifiedCommand;
use anyhow::{anyhow, Context, Result};
use genpdf::elements::{Break, Paragraph};
use genpdf::style::Style;
use genpdf::{fonts, Document, Element, SimplePageDecorator};
use std::path::Path;

const REPORT_TITLE: &str = "MITRE ATT&CK Mapping Report";

/// Font directories to search on different platforms
const FONT_DIRS: &[&str] = &[
    "./fonts",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/liberation-sans",
    "/System/Library/Fonts",
    "/Library/Fonts",
];

fn command_heading(command: &str) -> String {
    format!("Command: {}", command)
}

fn solution_bullet(solution: &str) -> String {
    format!("  \u{2022} {}", solution)
}

/// Locate a usable TrueType font family.
///
/// Fonts must be embedded (no builtin fallback) so the report renders the
/// same everywhere.
fn load_font_family() -> Result<fonts::FontFamily<fonts::FontData>> {
    FONT_DIRS
        .iter()
        .filter(|dir| Path::new(dir).exists())
        .find_map(|dir| fonts::from_files(dir, "LiberationSans", None).ok())
        .ok_or_else(|| {
            anyhow!(
                "no usable font family found; searched {:?}. Install the Liberation fonts.",
                FONT_DIRS
            )
        })
}

/// Assemble the report document from the result set
fn build_document(results: &[ClassifiedCommand]) -> Result<Document> {
    let font_family = load_font_family()?;

    let mut doc = Document::new(font_family);
    doc.set_title(REPORT_TITLE);
    doc.set_minimal_conformance();
    doc.set_line_spacing(1.25);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(15);
    doc.set_page_decorator(decorator);

    doc.push(Paragraph::new(REPORT_TITLE).styled(Style::new().bold().with_font_size(18)));
    doc.push(Break::new(1.0));

    for result in results {
        doc.push(
            Paragraph::new(command_heading(&result.command))
                .styled(Style::new().bold().with_font_size(13)),
        );
        doc.push(Break::new(0.3));

        for technique in &result.techniques {
            doc.push(
                Paragraph::new(format!("Technique: {}", technique.name))
                    .styled(Style::new().with_font_size(11)),
            );
            doc.push(
                Paragraph::new(format!("Description: {}", technique.description))
                    .styled(Style::new().with_font_size(11)),
            );
            doc.push(Paragraph::new("Solutions:").styled(Style::new().with_font_size(11)));
            for solution in &technique.solutions {
                doc.push(
                    Paragraph::new(solution_bullet(solution))
                        .styled(Style::new().with_font_size(10)),
                );
            }
            doc.push(Break::new(0.8));
        }
    }

    Ok(doc)
}

/// Render the result set to a PDF file at `output_path`
pub fn render_pdf<P: AsRef<Path>>(results: &[ClassifiedCommand], output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let doc = build_document(results)?;

    let mut buffer = Vec::new();
    doc.render(&mut buffer)
        .map_err(|e| anyhow!("failed to render PDF report: {}", e))?;

    std::fs::write(output_path, &buffer)
        .with_context(|| format!("Failed to write PDF report: {}", output_path.display()))?;

    tracing::debug!(
        bytes = buffer.len(),
        path = %output_path.display(),
        "PDF report written"
    );
    Ok(())
}
