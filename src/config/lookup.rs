//! Name-indexed search over configuration entities.
//!
//! Scripts refer to tasks by name. These lookups resolve such references
//! against the current state of a [`Configuration`]; nothing is cached. A miss
//! is a normal outcome and callers decide whether it matters.

use crate::config::schema::{Configuration, File, Script, Task};

impl Configuration {
    /// Find the first task with exactly this name.
    pub fn find_task(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.name == name)
    }

    /// Find the first script with exactly this name.
    pub fn find_script(&self, name: &str) -> Option<&Script> {
        self.scripts.iter().find(|script| script.name == name)
    }

    /// Find the first file definition handling this type identifier.
    pub fn find_file(&self, file_type: &str) -> Option<&File> {
        self.files
            .iter()
            .find(|file| file.types.iter().any(|t| t == file_type))
    }

    /// Resolve the tasks of a script, in reference order.
    ///
    /// Returns `None` when no script has this name. References that don't
    /// resolve are skipped; validation reports them.
    pub fn script_tasks(&self, name: &str) -> Option<Vec<&Task>> {
        let script = self.find_script(name)?;
        Some(
            script
                .tasks
                .iter()
                .filter_map(|reference| self.find_task(reference))
                .collect(),
        )
    }
}
