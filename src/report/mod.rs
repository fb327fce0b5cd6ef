//! Validation report formatters.
//!
//! This module renders the errors returned by
//! [`validate_config`](crate::config::validate_config) in different formats
//! (human-readable, JSON).

pub mod human;
pub mod json;

use crate::config::ValidationError;
use std::io::Write;

/// Output format for validation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting validation reports.
pub trait ReportFormatter {
    /// Format errors to the given writer.
    fn format<W: Write>(&self, errors: &[ValidationError], writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Render errors in the requested format.
pub fn render(format: OutputFormat, errors: &[ValidationError]) -> std::io::Result<String> {
    let mut output = Vec::new();
    match format {
        OutputFormat::Human => HumanFormatter::new().format(errors, &mut output)?,
        OutputFormat::Json => JsonFormatter::new().format(errors, &mut output)?,
    }
    String::from_utf8(output).map_err(std::io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{validate_config, Configuration};

    #[test]
    fn render_human_lists_every_error() {
        let errors = validate_config(&Configuration::default());
        let output = render(OutputFormat::Human, &errors).unwrap();
        assert!(output.contains("missing task definition"));
        assert!(output.contains("missing file definition"));
    }

    #[test]
    fn render_json_is_parseable() {
        let errors = validate_config(&Configuration::default());
        let output = render(OutputFormat::Json, &errors).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["summary"]["total"], 2);
    }
}
