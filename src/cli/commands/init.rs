//! Init command implementation.
//!
//! The `emits init` command writes a starter build document.

use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::config::{write_config_file, Configuration, File, Parse, Path as TaskPath, Script, Task};
use crate::error::{EmitsError, Result};
use crate::shared::Comment;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    document: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, document: &Path, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            document: document.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InitArgs {
        &self.args
    }

    fn project_name(&self) -> String {
        if let Some(name) = &self.args.name {
            return name.clone();
        }
        self.project_root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("MyProject")
            .to_string()
    }

    /// Build the starter configuration.
    fn create_config(&self) -> Configuration {
        Configuration {
            name: Some(self.project_name()),
            version: Some("0.1.0".to_string()),
            tasks: vec![Task {
                name: "source".to_string(),
                path: Some(TaskPath {
                    include: Some(vec!["src/**".to_string()]),
                    exclude: vec!["**/target/**".to_string()],
                }),
            }],
            scripts: vec![Script::new("default", ["source"])],
            files: vec![File {
                types: vec!["rs".to_string()],
                parse: Some(Parse {
                    comment: Some(Comment {
                        line: "///".to_string(),
                        ..Comment::block("/**", "*/")
                    }),
                    source: false,
                }),
                modify: None,
            }],
            ..Default::default()
        }
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.document.exists() && !self.args.force {
            return Err(EmitsError::ConfigExists {
                path: self.document.clone(),
            });
        }

        write_config_file(&self.create_config(), &self.document)?;
        ui.success(&format!("Created {}", self.document.display()));
        ui.message("Run 'emits check' after editing to validate it.");

        Ok(CommandResult::success())
    }
}
