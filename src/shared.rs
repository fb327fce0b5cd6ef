//! Comment and substitution definitions shared with the parsing and
//! modification stages.
//!
//! These values are owned by the downstream pipeline; the build document only
//! carries them, and validation inspects nothing but string emptiness.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Comment syntax used to extract documentation from a source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Comment {
    /// Line comment marker, e.g. `//`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub line: String,

    /// Block comment markers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<CommentBlock>,
}

impl Comment {
    /// A comment definition with only a line marker.
    pub fn line(marker: impl Into<String>) -> Self {
        Self {
            line: marker.into(),
            block: None,
        }
    }

    /// A comment definition with only block markers.
    pub fn block(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            line: String::new(),
            block: Some(CommentBlock {
                start: start.into(),
                end: end.into(),
            }),
        }
    }
}

/// Start and end markers of a block comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CommentBlock {
    /// Opening marker, e.g. `/*`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub start: String,

    /// Closing marker, e.g. `*/`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub end: String,
}

/// A find/replace pair applied to extracted text.
///
/// An empty `replace` removes every match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RegularExpression {
    /// Pattern to search for
    #[serde(skip_serializing_if = "String::is_empty")]
    pub find: String,

    /// Replacement text
    #[serde(skip_serializing_if = "String::is_empty")]
    pub replace: String,
}
