//! List command implementation.
//!
//! The `emits list` command shows the tasks, scripts, and file definitions
//! of the build document, resolving each script to the tasks it runs.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::config::{load_config_file, Configuration, File, Script, Task};
use crate::error::{EmitsError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    document: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(document: &Path, args: ListArgs) -> Self {
        Self {
            document: document.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn show_script(&self, config: &Configuration, script: &Script, ui: &mut dyn UserInterface) {
        let tasks = config.script_tasks(&script.name).unwrap_or_default();
        let names: Vec<&str> = tasks.iter().map(|t| t.name.as_str()).collect();
        ui.entry(&script.name, &names.join(" -> "));

        if tasks.len() < script.tasks.len() {
            ui.warning(&format!(
                "script `{}` references unknown tasks; run 'emits check'",
                script.name
            ));
        }
    }
}

fn describe_task(task: &Task) -> String {
    let Some(path) = &task.path else {
        return "(no path)".to_string();
    };
    let include = path.include.as_deref().unwrap_or_default().join(", ");
    if path.exclude.is_empty() {
        include
    } else {
        format!("{} (excluding {})", include, path.exclude.join(", "))
    }
}

fn describe_file(file: &File) -> String {
    let mut markers = Vec::new();
    if let Some(comment) = file.parse.as_ref().and_then(|p| p.comment.as_ref()) {
        if !comment.line.is_empty() {
            markers.push(comment.line.clone());
        }
        if let Some(block) = &comment.block {
            markers.push(format!("{} {}", block.start, block.end));
        }
    }
    let transforms = file
        .modify
        .as_ref()
        .map(|m| m.plugins.len() + m.regex.len())
        .unwrap_or(0);

    format!("comments [{}], {} transform(s)", markers.join(" | "), transforms)
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config_file(&self.document)?;

        if let Some(name) = &self.args.script {
            let script = config
                .find_script(name)
                .ok_or_else(|| EmitsError::UnknownScript { name: name.clone() })?;
            ui.show_header("Script");
            self.show_script(&config, script, ui);
            for task in config.script_tasks(name).unwrap_or_default() {
                ui.entry(&task.name, &describe_task(task));
            }
            return Ok(CommandResult::success());
        }

        ui.show_header("Tasks");
        for task in &config.tasks {
            ui.entry(&task.name, &describe_task(task));
        }

        ui.show_header("Scripts");
        for script in &config.scripts {
            self.show_script(&config, script, ui);
        }

        ui.show_header("Files");
        for file in &config.files {
            ui.entry(&file.label(), &describe_file(file));
        }

        Ok(CommandResult::success())
    }
}
