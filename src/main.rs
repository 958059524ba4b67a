#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! phonebook — parse a data file in a registered format and print it back out.

mod cli;
mod codecs;
mod commands;
mod registry;
mod types;

use cli::{Cli, OutputCtx, OutputFormat, init_tracing, write_error};
use registry::{FormatError, FormatRegistry};
use types::ErrorOutput;

fn main() {
    let mut registry = FormatRegistry::new("phonebook");
    if let Err(err) = codecs::register_builtin(&mut registry) {
        fail(&err, OutputFormat::Text);
    }

    let cli = Cli::try_parse_from(&registry, std::env::args_os()).unwrap_or_else(|err| err.exit());

    init_tracing(cli.global.debug);
    tracing::debug!(count = registry.len(), formats = ?registry.list_formats(), "registry ready");

    let ctx = OutputCtx::new(cli.global.output, cli.global.debug);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = commands::dispatch(&cli, &registry, &ctx, &mut out) {
        fail(&err, ctx.format);
    }
}

fn fail(err: &FormatError, format: OutputFormat) -> ! {
    write_error(&ErrorOutput::from_format_error(err), format);
    std::process::exit(err.exit_code());
}
