//! JSON output formatter.
//!
//! Formats validation errors as machine-readable JSON for tooling integration.

use super::ReportFormatter;
use crate::config::ValidationError;
use serde::Serialize;
use std::io::Write;

/// Formats validation errors as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    valid: bool,
    errors: &'a [ValidationError],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, errors: &[ValidationError], writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            valid: errors.is_empty(),
            errors,
            summary: JsonSummary {
                total: errors.len(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
