/// Parse/render dispatch by format name.
use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::entries::{FormatRegistry, RegisteredFormat};
use super::errors::{FormatError, Operation, Result};
use super::handler::Document;

/// Runs parse and render cycles against a registry.
///
/// Holds no state of its own; every call is independent.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'r> {
    registry: &'r FormatRegistry,
}

impl<'r> Dispatcher<'r> {
    #[must_use]
    pub fn new(registry: &'r FormatRegistry) -> Self {
        Self { registry }
    }

    /// Parse `path` with the format registered as `name`.
    ///
    /// # Errors
    ///
    /// `FormatError::NotRegistered` if `name` is unknown (no I/O is attempted).
    /// Parser errors are returned unchanged.
    pub fn run_parse(&self, name: &str, path: &Path) -> Result<Document> {
        let format = self.resolve(name, Operation::Parse)?;
        debug!(format = name, path = %path.display(), "parsing");
        format.handler.parse(path)
    }

    /// Render `document` with the format registered as `name` and write it to
    /// `out`, adding a final newline only if the rendered text lacks one.
    ///
    /// Nothing is written unless rendering succeeds.
    ///
    /// # Errors
    ///
    /// `FormatError::NotRegistered` if `name` is unknown, renderer errors
    /// unchanged, `FormatError::Output` if writing fails.
    pub fn run_render<W: Write>(&self, name: &str, document: &Document, out: &mut W) -> Result<()> {
        let format = self.resolve(name, Operation::Render)?;
        let text = format.handler.render(document)?;
        debug!(format = name, bytes = text.len(), "rendered");

        out.write_all(text.as_bytes())
            .and_then(|()| {
                if text.ends_with('\n') {
                    Ok(())
                } else {
                    out.write_all(b"\n")
                }
            })
            .map_err(FormatError::Output)
    }

    /// `run_parse` followed by `run_render`.
    ///
    /// # Errors
    ///
    /// Any error from either stage.
    pub fn run<W: Write>(&self, name: &str, path: &Path, out: &mut W) -> Result<()> {
        let document = self.run_parse(name, path)?;
        self.run_render(name, &document, out)
    }

    fn resolve(&self, name: &str, operation: Operation) -> Result<&'r RegisteredFormat> {
        self.registry
            .lookup(name)
            .ok_or_else(|| FormatError::NotRegistered {
                registry: self.registry.label().to_owned(),
                operation,
                format: name.to_owned(),
                candidates: self.registry.suggest(name),
            })
    }
}
