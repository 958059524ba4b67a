/// Command dispatch: routes a parsed `Cli` to its handler.
pub mod convert;
pub mod list;

use std::io::Write;

use crate::cli::{Cli, OutputCtx};
use crate::registry::{FormatError, FormatRegistry};

/// Run whatever the command line asked for, writing results to `out`.
///
/// `--list_formats` wins over any format flags.
///
/// # Errors
///
/// Returns `FormatError` on any command failure.
pub fn dispatch<W: Write>(
    cli: &Cli,
    registry: &FormatRegistry,
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<(), FormatError> {
    if cli.global.list_formats {
        return list::run(registry, ctx, out);
    }
    convert::run(&cli.requests, registry, ctx, out)
}
