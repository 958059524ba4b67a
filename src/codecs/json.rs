/// JSON codec backed by `serde_json`.
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::registry::{Document, FormatError, FormatHandler, Result};

use super::{from_json_value, malformed, read_source};

const INDENT: &[u8] = b"    ";

/// Pretty-printed JSON with a four-space indent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl FormatHandler for Json {
    fn parse(&self, path: &Path) -> Result<Document> {
        let text = read_source(path, "json")?;
        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| malformed("json", path, &e))?;
        from_json_value("json", path, &value)
    }

    fn render(&self, document: &Document) -> Result<String> {
        let render_err = |message: String| FormatError::Render {
            format: "json".to_owned(),
            message,
        };

        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        document
            .serialize(&mut ser)
            .map_err(|e| render_err(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| render_err(e.to_string()))
    }

    fn description(&self) -> &str {
        "JSON documents (pretty-printed, 4-space indent)"
    }
}
