//! Loading the template description from JSON.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::TemplateSet;

/// Errors raised while reading or decoding a template description.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("schema violation: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Loads a template description from a JSON file at the given path.
pub fn load_templates(path: &Path) -> Result<TemplateSet, TemplateError> {
    let data = fs::read_to_string(path).map_err(|source| TemplateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_templates_from_str(&data)
}

/// Loads a template description from any reader (stdin in the binary).
pub fn load_templates_from_reader<R: Read>(mut reader: R) -> Result<TemplateSet, TemplateError> {
    let mut data = String::new();
    reader
        .read_to_string(&mut data)
        .map_err(|source| TemplateError::Io {
            path: PathBuf::from("-"),
            source,
        })?;
    load_templates_from_str(&data)
}

/// Loads a template description from a JSON string.
pub fn load_templates_from_str(json: &str) -> Result<TemplateSet, TemplateError> {
    Ok(serde_json::from_str(json)?)
}
