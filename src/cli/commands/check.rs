//! Check command implementation.
//!
//! The `emits check` command loads the build document and reports every
//! validation error at once.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::{load_config_file, validate_config};
use crate::error::{EmitsError, Result};
use crate::report::{human, render, OutputFormat};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code when the document has validation errors.
pub const EXIT_INVALID: i32 = 1;

/// Exit code when the document is missing or unparsable.
pub const EXIT_UNREADABLE: i32 = 2;

/// The check command implementation.
pub struct CheckCommand {
    document: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(document: &Path, args: CheckArgs) -> Self {
        Self {
            document: document.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config_file(&self.document) {
            Ok(c) => c,
            Err(EmitsError::ConfigNotFound { path }) => {
                ui.error(&format!(
                    "No configuration found at {}. Run 'emits init' first.",
                    path.display()
                ));
                return Ok(CommandResult::failure(EXIT_UNREADABLE));
            }
            Err(EmitsError::ConfigParseError { path, message }) => {
                ui.error(&format!("Parse error in {}: {}", path.display(), message));
                return Ok(CommandResult::failure(EXIT_UNREADABLE));
            }
            Err(e) => return Err(e),
        };

        let errors = validate_config(&config);

        match self.args.format {
            OutputFormat::Json => ui.message(render(OutputFormat::Json, &errors)?.trim_end()),
            OutputFormat::Human if errors.is_empty() => ui.success("Configuration is valid!"),
            OutputFormat::Human => {
                for error in &errors {
                    ui.diagnostic(error);
                }
                ui.message("");
                ui.message(&human::summary(errors.len()));
            }
        }

        if errors.is_empty() {
            Ok(CommandResult::success())
        } else {
            tracing::warn!(
                "{} has {} validation error(s)",
                self.document.display(),
                errors.len()
            );
            Ok(CommandResult::failure(EXIT_INVALID))
        }
    }
}
