/// The capability contract every format plugin fulfils.
use std::path::Path;

use super::errors::Result;

/// In-memory structured value passed from a parser to a renderer.
///
/// `serde_yaml::Value` keeps mapping insertion order and is a superset of
/// what JSON can express, so every codec can share it.
pub type Document = serde_yaml::Value;

/// A parse/render capability pair for one concrete text format.
pub trait FormatHandler {
    /// Read the file at `path` into a `Document`.
    ///
    /// # Errors
    ///
    /// `FormatError::Io` when the file cannot be read,
    /// `FormatError::Malformed` when its content is not valid for the format.
    fn parse(&self, path: &Path) -> Result<Document>;

    /// Turn a `Document` back into text.
    ///
    /// # Errors
    ///
    /// `FormatError::Render` when the codec cannot express the document.
    fn render(&self, document: &Document) -> Result<String>;

    /// One-line human description shown by `--list_formats`.
    fn description(&self) -> &str {
        ""
    }
}

/// Adapter that turns a pair of closures into a `FormatHandler`.
#[cfg_attr(not(test), allow(dead_code))]
pub struct FnHandler<P, R> {
    parse: P,
    render: R,
}

#[cfg_attr(not(test), allow(dead_code))]
impl<P, R> FnHandler<P, R>
where
    P: Fn(&Path) -> Result<Document>,
    R: Fn(&Document) -> Result<String>,
{
    #[must_use]
    pub fn new(parse: P, render: R) -> Self {
        Self { parse, render }
    }
}

impl<P, R> FormatHandler for FnHandler<P, R>
where
    P: Fn(&Path) -> Result<Document>,
    R: Fn(&Document) -> Result<String>,
{
    fn parse(&self, path: &Path) -> Result<Document> {
        (self.parse)(path)
    }

    fn render(&self, document: &Document) -> Result<String> {
        (self.render)(document)
    }
}
