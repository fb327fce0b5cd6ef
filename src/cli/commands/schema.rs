//! Schema command implementation.
//!
//! The `emits schema` command prints the JSON Schema of `emits.json` for
//! editor completion and external validation.

use anyhow::Context;

use crate::config::Configuration;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = schemars::schema_for!(Configuration);
        let output =
            serde_json::to_string_pretty(&schema).context("failed to render JSON schema")?;
        ui.message(&output);
        Ok(CommandResult::success())
    }
}
