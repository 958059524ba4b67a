/// Built-in format codecs and their registration.
pub mod json;
pub mod yaml;

use std::path::Path;

use crate::registry::{Document, FormatError, FormatRegistry, Result};

pub use json::Json;
pub use yaml::Yaml;

/// Register every built-in codec, in the order the CLI lists them.
///
/// To add a format: implement `FormatHandler` in a new module and register it
/// here.
///
/// # Errors
///
/// Propagates registration failures (duplicate or invalid names).
pub fn register_builtin(registry: &mut FormatRegistry) -> Result<()> {
    registry.register("yaml", Yaml)?;
    registry.register("json", Json)?;
    Ok(())
}

/// Read the whole input file as UTF-8 text.
///
/// An unreadable file is `FormatError::Io`; bytes that are not UTF-8 are
/// `FormatError::Malformed` for `format`.
fn read_source(path: &Path, format: &str) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| FormatError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|e| malformed(format, path, &e))
}

/// Convert a document built by `serde_json::Value` (duplicate keys already
/// collapsed, last one wins) into the shared document type.
fn from_json_value(format: &str, path: &Path, value: &serde_json::Value) -> Result<Document> {
    serde_yaml::to_value(value).map_err(|e| malformed(format, path, &e))
}

fn malformed(format: &str, path: &Path, err: &dyn std::fmt::Display) -> FormatError {
    FormatError::Malformed {
        format: format.to_owned(),
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
