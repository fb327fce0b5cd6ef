//! Visual theme and styling.
//!
//! Diagnostics render as `error[rule]: subject: message`. The plain theme
//! produces exactly the text of the human report, so styled and unstyled
//! output only differ in escape codes.

use console::Style;

use crate::config::ValidationError;

/// Emits' visual theme.
#[derive(Debug, Clone)]
pub struct EmitsTheme {
    /// The `error` label of a diagnostic.
    pub severity: Style,
    /// The `[rule-id]` of a diagnostic.
    pub rule: Style,
    /// The entity a diagnostic or listing row is about.
    pub subject: Style,
    /// Confirmation that the document passed.
    pub success: Style,
    /// Hints that something needs attention.
    pub warning: Style,
    /// Section headers in listings.
    pub header: Style,
}

impl Default for EmitsTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl EmitsTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            severity: Style::new().red().bold(),
            rule: Style::new().cyan(),
            subject: Style::new().bold(),
            success: Style::new().green(),
            warning: Style::new().yellow(),
            header: Style::new().bold().underlined(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            severity: Style::new(),
            rule: Style::new(),
            subject: Style::new(),
            success: Style::new(),
            warning: Style::new(),
            header: Style::new(),
        }
    }

    /// Format one validation error.
    pub fn format_diagnostic(&self, error: &ValidationError) -> String {
        format!(
            "{}{}: {}: {}",
            self.severity.apply_to("error"),
            self.rule.apply_to(format!("[{}]", error.rule)),
            self.subject.apply_to(&error.subject),
            error.message
        )
    }

    /// Format an unclassified failure, e.g. an unreadable document.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}: {}", self.severity.apply_to("error"), msg)
    }

    /// Format a listing row: an indented name followed by its detail.
    pub fn format_entry(&self, name: &str, detail: &str) -> String {
        format!("  {}: {}", self.subject.apply_to(name), detail)
    }

    pub fn format_success(&self, msg: &str) -> String {
        self.success.apply_to(msg).to_string()
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}: {}", self.warning.apply_to("warning"), msg)
    }

    pub fn format_header(&self, title: &str) -> String {
        self.header.apply_to(title).to_string()
    }
}

/// Whether output should be colored.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}
