//! Build document loading, lookup, and validation for emits.
//!
//! This module handles all aspects of the `emits.json` document:
//! - Schema definitions in [`schema`]
//! - Reading and writing in [`loader`]
//! - Name-based lookup in [`lookup`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use emits::config::{load_config, validate_config, write_config_file, document_path};
//! use emits::config::{Configuration, File, Parse, Script, Task};
//! use emits::shared::Comment;
//! use tempfile::TempDir;
//!
//! let config = Configuration {
//!     tasks: vec![Task::new("docs", ["src/**"])],
//!     scripts: vec![Script::new("build", ["docs"])],
//!     files: vec![File {
//!         types: vec!["rs".to_string()],
//!         parse: Some(Parse { comment: Some(Comment::line("///")), source: false }),
//!         modify: None,
//!     }],
//!     ..Default::default()
//! };
//!
//! let temp = TempDir::new().unwrap();
//! write_config_file(&config, &document_path(temp.path())).unwrap();
//!
//! let loaded = load_config(temp.path()).unwrap();
//! assert!(validate_config(&loaded).is_empty());
//! assert_eq!(loaded.script_tasks("build").unwrap()[0].name, "docs");
//! ```

pub mod loader;
pub mod lookup;
pub mod schema;
pub mod validator;

// Schema re-exports
pub use schema::{Configuration, File, Modify, Parse, Path, Plugin, Script, Task};

// Loader re-exports
pub use loader::{
    document_path, load_config, load_config_file, parse_config, to_document, write_config_file,
    DOCUMENT_FILE,
};

// Validator re-exports
pub use validator::{amend, validate, validate_config, Rule, Subject, Validation, ValidationError};
