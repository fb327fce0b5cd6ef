//! Configuration validation rules.
//!
//! This module validates a build document for completeness and consistency:
//! - At least one task and one file definition must exist
//! - Tasks must have a name and a path with include patterns
//! - File definitions must declare types and a usable comment syntax
//! - Scripts must reference existing tasks, each at most once
//!
//! Every violated rule becomes one [`ValidationError`]; validation never stops
//! early. Anonymous entities are given positional placeholder names
//! (`task[0]`, `file[1]`, `script[2]`) so that messages stay identifiable.
//! The input is never mutated: [`amend`] returns an amended copy alongside
//! the errors.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::config::loader::DOCUMENT_FILE;
use crate::config::schema::{Configuration, File, Parse, Script, Task};
use crate::error::{EmitsError, Result};

/// Identifier of a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    MissingTask,
    MissingFile,
    MissingTaskName,
    MissingPath,
    MissingPathInclude,
    EmptyPathInclude,
    EmptyPathExclude,
    MissingFileType,
    MissingParse,
    MissingParseComment,
    MissingBlockStart,
    MissingBlockEnd,
    EmptyPluginPath,
    EmptyRegexFind,
    MissingScriptName,
    MissingScriptTask,
    DuplicateTaskReference,
    UnknownTaskReference,
}

impl Rule {
    /// Kebab-case identifier used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::MissingTask => "missing-task",
            Rule::MissingFile => "missing-file",
            Rule::MissingTaskName => "missing-task-name",
            Rule::MissingPath => "missing-path",
            Rule::MissingPathInclude => "missing-path-include",
            Rule::EmptyPathInclude => "empty-path-include",
            Rule::EmptyPathExclude => "empty-path-exclude",
            Rule::MissingFileType => "missing-file-type",
            Rule::MissingParse => "missing-parse",
            Rule::MissingParseComment => "missing-parse-comment",
            Rule::MissingBlockStart => "missing-block-start",
            Rule::MissingBlockEnd => "missing-block-end",
            Rule::EmptyPluginPath => "empty-plugin-path",
            Rule::EmptyRegexFind => "empty-regex-find",
            Rule::MissingScriptName => "missing-script-name",
            Rule::MissingScriptTask => "missing-script-task",
            Rule::DuplicateTaskReference => "duplicate-task-reference",
            Rule::UnknownTaskReference => "unknown-task-reference",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The entity a validation error is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum Subject {
    /// The document as a whole
    Document,
    /// A task, by name or placeholder
    Task(String),
    /// A file definition, by its joined types or placeholder
    File(String),
    /// A script, by name or placeholder
    Script(String),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Document => write!(f, "`{}`", DOCUMENT_FILE),
            Subject::Task(label) => write!(f, "task `{}`", label),
            Subject::File(label) => write!(f, "file `{}`", label),
            Subject::Script(label) => write!(f, "script `{}`", label),
        }
    }
}

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: Rule,
    /// Entity the error is about
    pub subject: Subject,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: Rule, subject: &Subject, message: impl Into<String>) -> Self {
        Self {
            rule,
            subject: subject.clone(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Outcome of validating a configuration.
#[derive(Debug, Clone)]
pub struct Validation {
    /// Copy of the input with placeholder names assigned to anonymous entities
    pub config: Configuration,
    /// Every violated rule, in check order
    pub errors: Vec<ValidationError>,
}

impl Validation {
    /// Whether no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
/// An empty result means the configuration is valid.
pub fn validate_config(config: &Configuration) -> Vec<ValidationError> {
    amend(config).errors
}

/// Validate a configuration, returning an amended copy and all errors.
///
/// Checks run in a fixed order: task presence, file presence, each task,
/// each file, then each script.
pub fn amend(config: &Configuration) -> Validation {
    let mut amended = config.clone();
    let mut errors = Vec::new();

    if config.tasks.is_empty() {
        errors.push(ValidationError::new(
            Rule::MissingTask,
            &Subject::Document,
            "missing task definition",
        ));
    }

    if config.files.is_empty() {
        errors.push(ValidationError::new(
            Rule::MissingFile,
            &Subject::Document,
            "missing file definition",
        ));
    }

    for (index, task) in amended.tasks.iter_mut().enumerate() {
        errors.extend(validate_task(index, task));
    }

    for (index, file) in amended.files.iter_mut().enumerate() {
        errors.extend(validate_file(index, file));
    }

    // References resolve against the amended tasks, placeholders included.
    for (index, script) in amended.scripts.iter_mut().enumerate() {
        errors.extend(validate_script(index, script, &amended.tasks));
    }

    tracing::debug!("Validation finished with {} error(s)", errors.len());

    Validation {
        config: amended,
        errors,
    }
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &Configuration) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.to_string()).collect();
        Err(EmitsError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

impl Configuration {
    /// Validate this configuration and return all errors.
    pub fn validate(&self) -> Vec<ValidationError> {
        validate_config(self)
    }
}

fn placeholder(kind: &str, index: usize) -> String {
    format!("{}[{}]", kind, index)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate a single task definition.
fn validate_task(index: usize, task: &mut Task) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if task.name.is_empty() {
        task.name = placeholder("task", index);
        errors.push(ValidationError::new(
            Rule::MissingTaskName,
            &Subject::Task(task.name.clone()),
            "missing name definition",
        ));
    }

    let subject = Subject::Task(task.name.clone());

    let Some(path) = &task.path else {
        errors.push(ValidationError::new(
            Rule::MissingPath,
            &subject,
            "missing path definition",
        ));
        return errors;
    };

    // Only an absent include list is missing; an empty one selects nothing.
    match &path.include {
        Some(include) => {
            for (i, pattern) in include.iter().enumerate() {
                if is_blank(pattern) {
                    errors.push(ValidationError::new(
                        Rule::EmptyPathInclude,
                        &subject,
                        format!("empty include definition at index {}", i),
                    ));
                }
            }
        }
        None => {
            errors.push(ValidationError::new(
                Rule::MissingPathInclude,
                &subject,
                "missing path include definition",
            ));
        }
    }

    for (i, pattern) in path.exclude.iter().enumerate() {
        if is_blank(pattern) {
            errors.push(ValidationError::new(
                Rule::EmptyPathExclude,
                &subject,
                format!("empty exclude definition at index {}", i),
            ));
        }
    }

    errors
}

/// Validate a single file definition.
fn validate_file(index: usize, file: &mut File) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if file.types.is_empty() {
        file.types = vec![placeholder("file", index)];
        errors.push(ValidationError::new(
            Rule::MissingFileType,
            &Subject::File(file.label()),
            "missing type definition",
        ));
    }

    let subject = Subject::File(file.label());

    match &file.parse {
        Some(parse) => errors.extend(validate_parse(parse, &subject)),
        None => errors.push(ValidationError::new(
            Rule::MissingParse,
            &subject,
            "missing parse definition",
        )),
    }

    if let Some(modify) = &file.modify {
        for (i, plugin) in modify.plugins.iter().enumerate() {
            if plugin.path.is_empty() {
                errors.push(ValidationError::new(
                    Rule::EmptyPluginPath,
                    &subject,
                    format!("empty plugin path definition at index {}", i),
                ));
            }
        }

        for (i, regex) in modify.regex.iter().enumerate() {
            if regex.find.is_empty() {
                errors.push(ValidationError::new(
                    Rule::EmptyRegexFind,
                    &subject,
                    format!("empty find definition at index {}", i),
                ));
            }
        }
    }

    errors
}

/// Validate the comment syntax of a file definition.
///
/// A line marker alone is enough. A block marker needs both ends; each
/// missing end is reported on its own.
fn validate_parse(parse: &Parse, subject: &Subject) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let Some(comment) = &parse.comment else {
        errors.push(ValidationError::new(
            Rule::MissingParseComment,
            subject,
            "missing parse comment definition",
        ));
        return errors;
    };

    if comment.line.is_empty() && comment.block.is_none() {
        errors.push(ValidationError::new(
            Rule::MissingParseComment,
            subject,
            "missing parse comment definition",
        ));
    }

    if let Some(block) = &comment.block {
        if block.start.is_empty() {
            errors.push(ValidationError::new(
                Rule::MissingBlockStart,
                subject,
                "missing parse block comment start definition",
            ));
        }
        if block.end.is_empty() {
            errors.push(ValidationError::new(
                Rule::MissingBlockEnd,
                subject,
                "missing parse block comment end definition",
            ));
        }
    }

    errors
}

/// Validate a single script and its task references.
fn validate_script(index: usize, script: &mut Script, tasks: &[Task]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if script.name.is_empty() {
        script.name = placeholder("script", index);
        errors.push(ValidationError::new(
            Rule::MissingScriptName,
            &Subject::Script(script.name.clone()),
            "missing name definition",
        ));
    }

    let subject = Subject::Script(script.name.clone());

    if script.tasks.is_empty() {
        errors.push(ValidationError::new(
            Rule::MissingScriptTask,
            &subject,
            "must contain at least one task definition",
        ));
        return errors;
    }

    let mut seen = HashSet::new();
    for reference in &script.tasks {
        if !seen.insert(reference.as_str()) {
            errors.push(ValidationError::new(
                Rule::DuplicateTaskReference,
                &subject,
                format!("duplicate `{}` task definition", reference),
            ));
        }

        if !tasks.iter().any(|task| task.name == *reference) {
            errors.push(ValidationError::new(
                Rule::UnknownTaskReference,
                &subject,
                format!("unknown `{}` task definition", reference),
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{Modify, Path, Plugin};
    use crate::shared::{Comment, CommentBlock, RegularExpression};

    fn go_file() -> File {
        File {
            types: vec!["go".into()],
            parse: Some(Parse {
                comment: Some(Comment::line("//")),
                source: false,
            }),
            modify: None,
        }
    }

    fn valid_config() -> Configuration {
        Configuration {
            tasks: vec![Task::new("t", ["*"])],
            scripts: vec![Script::new("s", ["t"])],
            files: vec![go_file()],
            ..Default::default()
        }
    }

    fn rules(errors: &[ValidationError]) -> Vec<Rule> {
        errors.iter().map(|e| e.rule).collect()
    }

    fn file_with_comment(comment: Option<Comment>) -> File {
        File {
            parse: Some(Parse {
                comment,
                source: false,
            }),
            ..go_file()
        }
    }

    #[test]
    fn valid_config_has_no_errors() {
        let errors = validate_config(&valid_config());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn empty_config_reports_missing_task_and_file() {
        let errors = validate_config(&Configuration::default());
        assert_eq!(rules(&errors), vec![Rule::MissingTask, Rule::MissingFile]);
        assert_eq!(errors[0].message, "missing task definition");
        assert_eq!(errors[0].subject, Subject::Document);
        assert_eq!(errors[1].message, "missing file definition");
    }

    #[test]
    fn missing_tasks_reported_even_with_files() {
        let config = Configuration {
            files: vec![go_file()],
            ..Default::default()
        };
        assert_eq!(rules(&validate_config(&config)), vec![Rule::MissingTask]);
    }

    #[test]
    fn anonymous_task_gets_positional_placeholder() {
        let config = Configuration {
            tasks: vec![Task::new("a", ["*"]), Task::new("", ["*"])],
            files: vec![go_file()],
            ..Default::default()
        };

        let validation = amend(&config);
        assert_eq!(validation.errors.len(), 1);
        assert_eq!(validation.errors[0].rule, Rule::MissingTaskName);
        assert_eq!(validation.errors[0].subject, Subject::Task("task[1]".into()));
        assert_eq!(validation.config.tasks[1].name, "task[1]");
        // the input is left untouched
        assert_eq!(config.tasks[1].name, "");
    }

    #[test]
    fn task_without_path() {
        let config = Configuration {
            tasks: vec![Task {
                name: "docs".into(),
                path: None,
            }],
            files: vec![go_file()],
            ..Default::default()
        };

        let errors = validate_config(&config);
        assert_eq!(rules(&errors), vec![Rule::MissingPath]);
        assert_eq!(errors[0].to_string(), "task `docs`: missing path definition");
    }

    #[test]
    fn anonymous_task_without_path_reports_both() {
        let config = Configuration {
            tasks: vec![Task::default()],
            files: vec![go_file()],
            ..Default::default()
        };

        let errors = validate_config(&config);
        assert_eq!(rules(&errors), vec![Rule::MissingTaskName, Rule::MissingPath]);
        assert_eq!(errors[1].subject, Subject::Task("task[0]".into()));
    }

    #[test]
    fn path_without_include() {
        let task = Task {
            name: "docs".into(),
            path: Some(Path {
                include: None,
                exclude: vec!["".into()],
            }),
        };
        let config = Configuration {
            tasks: vec![task],
            files: vec![go_file()],
            ..Default::default()
        };

        let errors = validate_config(&config);
        assert_eq!(
            rules(&errors),
            vec![Rule::MissingPathInclude, Rule::EmptyPathExclude]
        );
        assert_eq!(errors[1].message, "empty exclude definition at index 0");
    }

    #[test]
    fn empty_include_list_is_not_missing() {
        let mut config = valid_config();
        config.tasks[0].path = Some(Path {
            include: Some(Vec::new()),
            exclude: Vec::new(),
        });

        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn blank_patterns_are_indexed() {
        let mut config = valid_config();
        config.tasks[0].path = Some(Path {
            include: Some(vec!["src/**".into(), "".into(), "   ".into()]),
            exclude: vec!["target".into(), "\t".into()],
        });

        let errors = validate_config(&config);
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "empty include definition at index 1",
                "empty include definition at index 2",
                "empty exclude definition at index 1",
            ]
        );
    }

    #[test]
    fn file_without_type_gets_placeholder() {
        let mut config = valid_config();
        config.files[0].types.clear();

        let validation = amend(&config);
        assert_eq!(rules(&validation.errors), vec![Rule::MissingFileType]);
        assert_eq!(validation.errors[0].subject, Subject::File("file[0]".into()));
        assert_eq!(validation.config.files[0].types, vec!["file[0]"]);
    }

    #[test]
    fn file_without_parse() {
        let mut config = valid_config();
        config.files[0].parse = None;

        let errors = validate_config(&config);
        assert_eq!(rules(&errors), vec![Rule::MissingParse]);
        assert_eq!(errors[0].to_string(), "file `go`: missing parse definition");
    }

    #[test]
    fn parse_without_comment() {
        let mut config = valid_config();
        config.files[0] = file_with_comment(None);
        assert_eq!(
            rules(&validate_config(&config)),
            vec![Rule::MissingParseComment]
        );

        config.files[0] = file_with_comment(Some(Comment::default()));
        assert_eq!(
            rules(&validate_config(&config)),
            vec![Rule::MissingParseComment]
        );
    }

    #[test]
    fn block_comment_alone_is_enough() {
        let mut config = valid_config();
        config.files[0] = file_with_comment(Some(Comment::block("/*", "*/")));
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn block_comment_without_end() {
        let mut config = valid_config();
        config.files[0] = file_with_comment(Some(Comment {
            line: String::new(),
            block: Some(CommentBlock {
                start: "/*".into(),
                end: String::new(),
            }),
        }));

        let errors = validate_config(&config);
        assert_eq!(rules(&errors), vec![Rule::MissingBlockEnd]);
        assert_eq!(
            errors[0].message,
            "missing parse block comment end definition"
        );
    }

    #[test]
    fn block_comment_without_start() {
        let mut config = valid_config();
        config.files[0] = file_with_comment(Some(Comment::block("", "*/")));
        assert_eq!(
            rules(&validate_config(&config)),
            vec![Rule::MissingBlockStart]
        );
    }

    #[test]
    fn empty_block_reports_both_ends() {
        let mut config = valid_config();
        config.files[0] = file_with_comment(Some(Comment::block("", "")));
        assert_eq!(
            rules(&validate_config(&config)),
            vec![Rule::MissingBlockStart, Rule::MissingBlockEnd]
        );
    }

    #[test]
    fn modify_entries_are_indexed() {
        let mut config = valid_config();
        config.files[0].modify = Some(Modify {
            plugins: vec![
                Plugin {
                    path: "./ok.js".into(),
                },
                Plugin {
                    path: String::new(),
                },
            ],
            regex: vec![
                RegularExpression {
                    find: String::new(),
                    replace: "x".into(),
                },
                RegularExpression {
                    find: "TODO".into(),
                    replace: String::new(),
                },
            ],
        });

        let errors = validate_config(&config);
        assert_eq!(
            rules(&errors),
            vec![Rule::EmptyPluginPath, Rule::EmptyRegexFind]
        );
        assert_eq!(errors[0].message, "empty plugin path definition at index 1");
        assert_eq!(errors[1].message, "empty find definition at index 0");
    }

    #[test]
    fn duplicate_types_across_files_are_tolerated() {
        let mut config = valid_config();
        config.files.push(go_file());
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn script_without_tasks() {
        let mut config = valid_config();
        config.scripts = vec![Script::new("build", Vec::<String>::new())];

        let errors = validate_config(&config);
        assert_eq!(rules(&errors), vec![Rule::MissingScriptTask]);
        assert_eq!(
            errors[0].to_string(),
            "script `build`: must contain at least one task definition"
        );
    }

    #[test]
    fn anonymous_script_gets_placeholder() {
        let mut config = valid_config();
        config.scripts.push(Script::new("", ["t"]));

        let validation = amend(&config);
        assert_eq!(rules(&validation.errors), vec![Rule::MissingScriptName]);
        assert_eq!(
            validation.errors[0].subject,
            Subject::Script("script[1]".into())
        );
        assert_eq!(validation.config.scripts[1].name, "script[1]");
    }

    #[test]
    fn duplicate_reference_reported_once_per_repeat() {
        let mut config = valid_config();
        config.tasks = vec![Task::new("a", ["*"])];
        config.scripts = vec![Script::new("s", ["a", "a"])];

        let errors = validate_config(&config);
        assert_eq!(rules(&errors), vec![Rule::DuplicateTaskReference]);
        assert_eq!(errors[0].message, "duplicate `a` task definition");

        config.scripts = vec![Script::new("s", ["a", "a", "a"])];
        assert_eq!(
            rules(&validate_config(&config)),
            vec![Rule::DuplicateTaskReference, Rule::DuplicateTaskReference]
        );
    }

    #[test]
    fn unknown_reference() {
        let mut config = valid_config();
        config.scripts = vec![Script::new("s", ["missing"])];

        let errors = validate_config(&config);
        assert_eq!(rules(&errors), vec![Rule::UnknownTaskReference]);
        assert_eq!(errors[0].message, "unknown `missing` task definition");
    }

    #[test]
    fn empty_reference_does_not_match_anonymous_task() {
        let config = Configuration {
            tasks: vec![Task::new("", ["*"])],
            scripts: vec![Script::new("s", [""])],
            files: vec![go_file()],
            ..Default::default()
        };

        let validation = amend(&config);
        assert_eq!(
            rules(&validation.errors),
            vec![Rule::MissingTaskName, Rule::UnknownTaskReference]
        );
        assert_eq!(validation.errors[1].message, "unknown `` task definition");

        let again = amend(&validation.config);
        assert_eq!(rules(&again.errors), vec![Rule::UnknownTaskReference]);
    }

    #[test]
    fn placeholder_name_resolves_anonymous_task() {
        let config = Configuration {
            tasks: vec![Task::new("", ["*"])],
            scripts: vec![Script::new("s", ["task[0]"])],
            files: vec![go_file()],
            ..Default::default()
        };

        assert_eq!(
            rules(&validate_config(&config)),
            vec![Rule::MissingTaskName]
        );
    }

    #[test]
    fn duplicate_unknown_reference_reports_both() {
        let mut config = valid_config();
        config.scripts = vec![Script::new("s", ["no", "no"])];

        assert_eq!(
            rules(&validate_config(&config)),
            vec![
                Rule::UnknownTaskReference,
                Rule::DuplicateTaskReference,
                Rule::UnknownTaskReference,
            ]
        );
    }

    #[test]
    fn checks_run_in_fixed_order() {
        let config = Configuration {
            tasks: vec![Task::default()],
            scripts: vec![Script::default()],
            files: vec![File::default()],
            ..Default::default()
        };

        assert_eq!(
            rules(&validate_config(&config)),
            vec![
                Rule::MissingTaskName,
                Rule::MissingPath,
                Rule::MissingFileType,
                Rule::MissingParse,
                Rule::MissingScriptName,
                Rule::MissingScriptTask,
            ]
        );
    }

    #[test]
    fn validation_is_repeatable() {
        let config = Configuration {
            tasks: vec![Task::default()],
            scripts: vec![Script::new("", ["x", "x"])],
            files: vec![File::default()],
            ..Default::default()
        };

        let first = validate_config(&config);
        let second = validate_config(&config);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn validate_folds_errors_into_one() {
        let err = validate(&Configuration::default()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("missing task definition"));
        assert!(msg.contains("missing file definition"));
    }

    #[test]
    fn method_matches_free_function() {
        let config = Configuration::default();
        assert_eq!(config.validate(), validate_config(&config));
    }

    #[test]
    fn rule_serializes_as_kebab_case() {
        let json = serde_json::to_string(&Rule::DuplicateTaskReference).unwrap();
        assert_eq!(json, "\"duplicate-task-reference\"");
        assert_eq!(Rule::MissingBlockEnd.to_string(), "missing-block-end");
    }

    #[test]
    fn subject_serializes_with_kind_and_label() {
        let json = serde_json::to_value(Subject::Task("docs".into())).unwrap();
        assert_eq!(json["kind"], "task");
        assert_eq!(json["label"], "docs");

        let json = serde_json::to_value(Subject::Document).unwrap();
        assert_eq!(json["kind"], "document");
    }
}
