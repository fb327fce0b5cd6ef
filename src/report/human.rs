//! Human-readable output formatter.

use super::ReportFormatter;
use crate::config::ValidationError;
use crate::ui::EmitsTheme;
use std::io::Write;

/// Formats validation errors for terminal display.
#[derive(Debug, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, errors: &[ValidationError], writer: &mut W) -> std::io::Result<()> {
        let theme = EmitsTheme::plain();
        for error in errors {
            writeln!(writer, "{}", theme.format_diagnostic(error))?;
        }

        if !errors.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "{}", summary(errors.len()))?;
        }

        Ok(())
    }
}

/// Closing line of a report with `count` errors.
pub fn summary(count: usize) -> String {
    format!("Found {} error(s)", count)
}
