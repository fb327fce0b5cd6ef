//! Recording UI for command tests.
//!
//! Diagnostics are kept as [`ValidationError`] values and listing rows as
//! name/detail pairs, so tests assert on rules and entities rather than on
//! rendered text. Output-mode filtering matches the terminal UI.

use super::{OutputMode, UserInterface};
use crate::config::{Rule, ValidationError};

#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    diagnostics: Vec<ValidationError>,
    entries: Vec<(String, String)>,
    headers: Vec<String>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Validation errors in the order they were shown.
    pub fn diagnostics(&self) -> &[ValidationError] {
        &self.diagnostics
    }

    /// Listing rows as `(name, detail)` pairs.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Whether a diagnostic for `rule` was shown.
    pub fn has_rule(&self, rule: Rule) -> bool {
        self.diagnostics.iter().any(|d| d.rule == rule)
    }

    /// Number of diagnostics shown for `rule`.
    pub fn rule_count(&self, rule: Rule) -> usize {
        self.diagnostics.iter().filter(|d| d.rule == rule).count()
    }

    /// Detail of the first listing row for `name`.
    pub fn entry(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, detail)| detail.as_str())
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.successes.push(msg.to_string());
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.warnings.push(msg.to_string());
        }
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn diagnostic(&mut self, error: &ValidationError) {
        self.diagnostics.push(error.clone());
    }

    fn entry(&mut self, name: &str, detail: &str) {
        self.entries.push((name.to_string(), detail.to_string()));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            self.headers.push(title.to_string());
        }
    }
}
