//! Build document loading and writing.
//!
//! The document lives at a fixed file name in the project root. Loading is a
//! pure transformation from JSON to [`Configuration`]; it never validates, so
//! callers must run the [validator](super::validator) explicitly.

use crate::config::schema::Configuration;
use crate::error::{EmitsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the build document.
pub const DOCUMENT_FILE: &str = "emits.json";

/// Path of the build document for the given project root.
pub fn document_path(project_root: &Path) -> PathBuf {
    project_root.join(DOCUMENT_FILE)
}

/// Load the build document of a project.
///
/// # Errors
///
/// Returns `ConfigNotFound` if `emits.json` doesn't exist.
/// Returns `ConfigParseError` if the JSON is invalid.
pub fn load_config(project_root: &Path) -> Result<Configuration> {
    load_config_file(&document_path(project_root))
}

/// Load a single document file and parse it into a Configuration.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `Io` if the file exists but cannot be read.
/// Returns `ConfigParseError` if the JSON is invalid.
pub fn load_config_file(path: &Path) -> Result<Configuration> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EmitsError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EmitsError::Io(e)
        }
    })?;

    let config = parse_config(&content, path)?;
    tracing::debug!(
        "Loaded {} with {} task(s), {} script(s), {} file(s)",
        path.display(),
        config.tasks.len(),
        config.scripts.len(),
        config.files.len()
    );
    Ok(config)
}

/// Parse JSON content into a Configuration.
///
/// # Arguments
///
/// * `content` - The JSON content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<Configuration> {
    serde_json::from_str(content).map_err(|e| EmitsError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Render a Configuration as an indented JSON document.
///
/// Absent optional fields are omitted and the output ends with a newline.
pub fn to_document(config: &Configuration) -> Result<String> {
    let mut document =
        serde_json::to_string_pretty(config).map_err(|e| EmitsError::ConfigSerializeError {
            message: e.to_string(),
        })?;
    document.push('\n');
    Ok(document)
}

/// Write a Configuration to the given path, replacing any existing content.
pub fn write_config_file(config: &Configuration, path: &Path) -> Result<()> {
    let document = to_document(config)?;
    fs::write(path, document)?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

impl Configuration {
    /// Load `emits.json` from the current directory.
    pub fn load() -> Result<Self> {
        load_config_file(Path::new(DOCUMENT_FILE))
    }

    /// Write this configuration to `emits.json` in the current directory.
    pub fn write(&self) -> Result<()> {
        write_config_file(self, Path::new(DOCUMENT_FILE))
    }
}
