/// Shared serializable output types for reports and diagnostics.
///
/// These are what `--output json` writes; they are decoupled from the
/// registry's internal types.
use serde::{Deserialize, Serialize};

use crate::registry::{FormatError, FormatRegistry};

/// One registered format in the `--list_formats` report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatInfoOutput {
    /// Format name, also its command-line flag.
    pub name: String,
    /// Human description, or null if the handler has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The `--list_formats` report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatListOutput {
    /// Registered formats in registration order.
    pub formats: Vec<FormatInfoOutput>,
}

impl FormatListOutput {
    #[must_use]
    pub fn from_registry(registry: &FormatRegistry) -> Self {
        let formats = registry
            .iter()
            .map(|f| FormatInfoOutput {
                name: f.name.clone(),
                description: Some(f.handler.description())
                    .filter(|d| !d.is_empty())
                    .map(str::to_owned),
            })
            .collect();
        Self { formats }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Registered formats resembling an unknown one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,
}

impl ErrorOutput {
    /// Construct from a `FormatError`.
    #[must_use]
    pub fn from_format_error(err: &FormatError) -> Self {
        let candidates = match err {
            FormatError::NotRegistered { candidates, .. } if !candidates.is_empty() => {
                Some(candidates.clone())
            }
            _ => None,
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                candidates,
            },
        }
    }
}
