/// Errors from the format registry, the dispatcher and the codecs.
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which half of a format's capability pair was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Text file → `Document`.
    Parse,
    /// `Document` → text.
    Render,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => f.write_str("parse"),
            Self::Render => f.write_str("render"),
        }
    }
}

/// Errors that can occur while registering or running a format.
#[derive(Debug, Error)]
pub enum FormatError {
    /// No registered format has the requested name.
    #[error("Cannot {operation} with {registry}: format '{format}' is not registered")]
    NotRegistered {
        /// Label of the registry that was searched.
        registry: String,
        /// The operation that needed the format.
        operation: Operation,
        /// The requested format name.
        format: String,
        /// Registered names resembling the requested one.
        candidates: Vec<String>,
    },

    /// A format with the same name is already registered.
    #[error("Format '{format}' is already registered with {registry}")]
    AlreadyRegistered {
        /// Label of the registry.
        registry: String,
        /// The duplicated name.
        format: String,
    },

    /// The name cannot be used as a command-line flag.
    #[error("'{format}' is not a valid format name (use ASCII letters, digits, '_' or '-')")]
    InvalidName {
        /// The rejected name.
        format: String,
    },

    /// The name collides with one of the built-in command-line flags.
    #[error("'{format}' is reserved for a built-in flag and cannot name a format")]
    ReservedName {
        /// The rejected name.
        format: String,
    },

    /// The input file could not be opened or read.
    #[error("Cannot read '{}': {source}", path.display())]
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid for the claimed format.
    #[error("'{}' is not valid {format}: {message}", path.display())]
    Malformed {
        /// The claimed format.
        format: String,
        /// The offending file.
        path: PathBuf,
        /// Codec diagnostic.
        message: String,
    },

    /// The codec could not turn the document back into text.
    #[error("Cannot render {format}: {message}")]
    Render {
        /// The format being rendered.
        format: String,
        /// Codec diagnostic.
        message: String,
    },

    /// Writing rendered output failed.
    #[error("Cannot write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Result alias for registry and codec operations.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Exit code mapping for `FormatError` variants.
impl FormatError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { .. } => 3,
            Self::Malformed { .. } => 4,
            Self::NotRegistered { .. } => 5,
            Self::AlreadyRegistered { .. } | Self::InvalidName { .. } | Self::ReservedName { .. } => 70,
            Self::Render { .. } | Self::Output(_) => 1,
        }
    }

    /// Machine-readable error code (`snake_case`).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotRegistered { .. } => "format_not_registered",
            Self::AlreadyRegistered { .. } => "format_already_registered",
            Self::InvalidName { .. } => "invalid_format_name",
            Self::ReservedName { .. } => "reserved_format_name",
            Self::Io { .. } => "io_error",
            Self::Malformed { .. } => "malformed_input",
            Self::Render { .. } => "render_error",
            Self::Output(_) => "output_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_registered_message_names_registry_and_operation() {
        let err = FormatError::NotRegistered {
            registry: "phonebook".to_owned(),
            operation: Operation::Render,
            format: "csv".to_owned(),
            candidates: vec![],
        };
        assert_eq!(
            err.to_string(),
            "Cannot render with phonebook: format 'csv' is not registered"
        );
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_io_error_exit_code() {
        let err = FormatError::Io {
            path: PathBuf::from("missingfile.yaml"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.code(), "io_error");
        assert!(err.to_string().starts_with("Cannot read 'missingfile.yaml'"));
    }
}
