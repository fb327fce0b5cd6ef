//! Terminal UI.
//!
//! Reports and listings go to stdout so they can be piped; write failures
//! (a closed pipe) are ignored.

use console::Term;
use std::io::Write;

use super::{EmitsTheme, OutputMode, UserInterface};
use crate::config::ValidationError;

/// Terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: EmitsTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, use_colors: bool) -> Self {
        let theme = if use_colors {
            EmitsTheme::new()
        } else {
            EmitsTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }

    fn line(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }

    fn status_line(&mut self, text: &str) {
        if self.mode.shows_status() {
            self.line(text);
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.line(msg);
    }

    fn success(&mut self, msg: &str) {
        let text = self.theme.format_success(msg);
        self.status_line(&text);
    }

    fn warning(&mut self, msg: &str) {
        let text = self.theme.format_warning(msg);
        self.status_line(&text);
    }

    fn error(&mut self, msg: &str) {
        let text = self.theme.format_error(msg);
        self.line(&text);
    }

    fn diagnostic(&mut self, error: &ValidationError) {
        let text = self.theme.format_diagnostic(error);
        self.line(&text);
    }

    fn entry(&mut self, name: &str, detail: &str) {
        let text = self.theme.format_entry(name, detail);
        self.line(&text);
    }

    fn show_header(&mut self, title: &str) {
        let text = self.theme.format_header(title);
        self.status_line(&text);
    }
}

/// Create the UI for the given output mode.
pub fn create_ui(mode: OutputMode, use_colors: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, use_colors))
}
