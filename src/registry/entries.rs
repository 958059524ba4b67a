/// Ordered registry of format handlers keyed by name.
use std::fmt;
use std::path::Path;

use super::errors::{FormatError, Result};
use super::handler::{Document, FnHandler, FormatHandler};
use super::suggest::similar_names;

/// Flag ids the CLI claims for itself; no format may use them.
pub const RESERVED_NAMES: &[&str] = &["list_formats", "output", "debug", "help", "version"];

/// A format name bound to its parse/render handler.
pub struct RegisteredFormat {
    /// Unique name; also the long flag the CLI exposes for it.
    pub name: String,
    /// The capability pair.
    pub handler: Box<dyn FormatHandler>,
}

impl fmt::Debug for RegisteredFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredFormat")
            .field("name", &self.name)
            .field("description", &self.handler.description())
            .finish_non_exhaustive()
    }
}

/// Insertion-ordered collection of `RegisteredFormat`s.
///
/// Order matters: it drives enumeration, flag generation and the order in
/// which requested formats are processed.
#[derive(Debug)]
pub struct FormatRegistry {
    label: String,
    formats: Vec<RegisteredFormat>,
}

impl FormatRegistry {
    /// Create an empty registry. `label` names it in diagnostics.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            formats: Vec::new(),
        }
    }

    /// Label used in diagnostics.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Append a format.
    ///
    /// # Errors
    ///
    /// `FormatError::InvalidName` if `name` cannot be a long flag,
    /// `FormatError::ReservedName` if it collides with a built-in flag,
    /// `FormatError::AlreadyRegistered` if the name is taken. The registry is
    /// unchanged on error.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: impl FormatHandler + 'static,
    ) -> Result<()> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(FormatError::InvalidName { format: name });
        }
        if RESERVED_NAMES.contains(&name.as_str()) {
            return Err(FormatError::ReservedName { format: name });
        }
        if self.lookup(&name).is_some() {
            return Err(FormatError::AlreadyRegistered {
                registry: self.label.clone(),
                format: name,
            });
        }

        self.formats.push(RegisteredFormat {
            name,
            handler: Box::new(handler),
        });
        Ok(())
    }

    /// Append a format given as a parse closure and a render closure.
    ///
    /// # Errors
    ///
    /// Same as [`FormatRegistry::register`].
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn register_fn<P, R>(&mut self, name: impl Into<String>, parse: P, render: R) -> Result<()>
    where
        P: Fn(&Path) -> Result<Document> + 'static,
        R: Fn(&Document) -> Result<String> + 'static,
    {
        self.register(name, FnHandler::new(parse, render))
    }

    /// Registered names in registration order. Empty when nothing is registered.
    #[must_use]
    pub fn list_formats(&self) -> Vec<&str> {
        self.formats.iter().map(|f| f.name.as_str()).collect()
    }

    /// First format whose name equals `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&RegisteredFormat> {
        self.formats.iter().find(|f| f.name == name)
    }

    /// Registered names that resemble `name`, best match first.
    #[must_use]
    pub fn suggest(&self, name: &str) -> Vec<String> {
        similar_names(self.formats.iter().map(|f| f.name.as_str()), name)
    }

    /// Iterate registered formats in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredFormat> {
        self.formats.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

/// A name must be usable verbatim as `--<name>`.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
