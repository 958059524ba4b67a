/// YAML codec backed by `serde_yaml`.
use std::path::Path;

use crate::registry::{Document, FormatError, FormatHandler, Result};

use super::{from_json_value, malformed, read_source};

/// Block-style YAML, mapping key order preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl FormatHandler for Yaml {
    fn parse(&self, path: &Path) -> Result<Document> {
        let text = read_source(path, "yaml")?;
        match serde_yaml::from_str::<Document>(&text) {
            Ok(document) => Ok(document),
            // `Mapping` refuses repeated keys; reread with last-wins semantics.
            Err(err) => match serde_yaml::from_str::<serde_json::Value>(&text) {
                Ok(value) => from_json_value("yaml", path, &value),
                Err(_) => Err(malformed("yaml", path, &err)),
            },
        }
    }

    fn render(&self, document: &Document) -> Result<String> {
        serde_yaml::to_string(document).map_err(|e| FormatError::Render {
            format: "yaml".to_owned(),
            message: e.to_string(),
        })
    }

    fn description(&self) -> &str {
        "YAML documents (block style)"
    }
}
