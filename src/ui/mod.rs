//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use emits::config::{validate_config, Configuration, Rule};
//! use emits::ui::{MockUI, OutputMode, UserInterface};
//!
//! let mut ui = MockUI::with_mode(OutputMode::Quiet);
//! ui.success("Configuration is valid!");
//! for error in validate_config(&Configuration::default()) {
//!     ui.diagnostic(&error);
//! }
//! assert!(ui.successes().is_empty());
//! assert!(ui.has_rule(Rule::MissingTask));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, EmitsTheme};

use crate::config::ValidationError;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Display one validation error. Shown in every output mode.
    fn diagnostic(&mut self, error: &ValidationError);

    /// Display a listing row for a named task, script, or file rule.
    fn entry(&mut self, name: &str, detail: &str);

    /// Display a section header.
    fn show_header(&mut self, title: &str);
}
