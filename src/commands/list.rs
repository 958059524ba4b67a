/// `--list_formats`: report the registered formats.
use std::io::Write;

use tracing::debug;

use crate::cli::OutputCtx;
use crate::cli::output::write_format_list;
use crate::registry::{FormatError, FormatRegistry};
use crate::types::FormatListOutput;

/// Run `phonebook --list_formats`.
///
/// # Errors
///
/// `FormatError::Output` if the report cannot be written.
pub fn run<W: Write>(registry: &FormatRegistry, ctx: &OutputCtx, out: &mut W) -> Result<(), FormatError> {
    if registry.is_empty() {
        debug!(registry = registry.label(), "no formats registered");
    }
    let list = FormatListOutput::from_registry(registry);
    write_format_list(&list, ctx, out).map_err(FormatError::Output)
}
