//! Build document schema definitions.
//!
//! This module contains the struct definitions that map to the `emits.json`
//! document format. No invariant is enforced at construction time; absent
//! values are meaningful and are reported by the [validator](super::validator).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::shared::{Comment, RegularExpression};

/// Root configuration structure for emits.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Configuration {
    /// Project name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Project version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Project description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Project author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Project license
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Task definitions
    #[serde(rename = "task", skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,

    /// Script definitions
    #[serde(rename = "script", skip_serializing_if = "Vec::is_empty")]
    pub scripts: Vec<Script>,

    /// Per-file-type processing rules
    #[serde(rename = "file", skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,
}

/// A named file-selection rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Task {
    /// Task name, referenced by scripts
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Paths selected by this task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Path>,
}

impl Task {
    /// Create a task selecting the given include patterns.
    pub fn new<I, S>(name: impl Into<String>, include: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            path: Some(Path {
                include: Some(include.into_iter().map(Into::into).collect()),
                exclude: Vec::new(),
            }),
        }
    }
}

/// Include and exclude glob patterns of a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Path {
    /// Patterns to include
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    /// Patterns to exclude
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

/// A named, ordered group of task references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Script {
    /// Script name
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Names of the tasks to run, in order
    #[serde(rename = "task", skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<String>,
}

impl Script {
    /// Create a script referencing the given tasks.
    pub fn new<I, S>(name: impl Into<String>, tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            tasks: tasks.into_iter().map(Into::into).collect(),
        }
    }
}

/// Processing rules for one or more file types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct File {
    /// File type identifiers, e.g. extensions
    #[serde(rename = "type", skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,

    /// How comments are extracted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse: Option<Parse>,

    /// Transforms applied to extracted content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify: Option<Modify>,
}

impl File {
    /// Label identifying this file definition in messages.
    pub fn label(&self) -> String {
        self.types.join(",")
    }
}

/// Comment extraction settings of a file definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Parse {
    /// Comment syntax
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,

    /// Include the surrounding source alongside extracted comments
    #[serde(skip_serializing_if = "is_false")]
    pub source: bool,
}

/// Post-extraction transforms of a file definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Modify {
    /// External transform plugins, applied in order
    #[serde(rename = "plugin", skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<Plugin>,

    /// Find/replace pairs, applied in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub regex: Vec<RegularExpression>,
}

/// An external transform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Plugin {
    /// Filesystem path to the plugin
    #[serde(skip_serializing_if = "String::is_empty")]
    pub path: String,
}

fn is_false(v: &bool) -> bool {
    !v
}
