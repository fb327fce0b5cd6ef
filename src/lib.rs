//! Emits - build description schema and validation for documentation
//! extraction.
//!
//! A project describes its documentation build in `emits.json`: named tasks
//! that select files, scripts that group tasks, and per-file-type rules for
//! extracting and transforming comments. This crate loads that document and
//! checks it before any file is scanned.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Document schema, loading, lookup, and validation
//! - [`error`] - Error types and result aliases
//! - [`report`] - Rendering of validation errors
//! - [`shared`] - Comment and find/replace definitions used by later stages
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use emits::config::{parse_config, validate_config, Rule};
//! use std::path::Path;
//!
//! let config = parse_config(r#"{ "script": [{ "name": "s", "task": ["t"] }] }"#, Path::new("emits.json")).unwrap();
//! let errors = validate_config(&config);
//! let rules: Vec<_> = errors.iter().map(|e| e.rule).collect();
//! assert_eq!(rules, vec![Rule::MissingTask, Rule::MissingFile, Rule::UnknownTaskReference]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod shared;
pub mod ui;

pub use error::{EmitsError, Result};
