//! Console report output
//!
//! Renders the analysis result set as plain text: each command followed by
//! its techniques with name, description, and bulleted solutions. Writes to
//! any `io::Write` so the exact output is testable.

use crate::analyzer::ClassifiedCommand;
use std::io::{self, Write};

/// Print the report to stdout
pub fn print_report(results: &[ClassifiedCommand]) -> io::Result<()> {
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), results)
}

/// Write the report to an arbitrary writer
pub fn write_report<W: Write>(out: &mut W, results: &[ClassifiedCommand]) -> io::Result<()> {
    writeln!(out, "Analysis Results:")?;
    for result in results {
        writeln!(out, "Command: {}", result.command)?;
        for technique in &result.techniques {
            writeln!(out, "  Technique: {}", technique.name)?;
            writeln!(out, "  Description: {}", technique.description)?;
            if !technique.solutions.is_empty() {
                writeln!(out, "  Solutions:")?;
                for solution in &technique.solutions {
                    writeln!(out, "    * {}", solution)?;
                }
            }
        }
    }
    Ok(())
}
