/// CLI argument definitions: fixed flags via clap derive, one flag per
/// registered format via the builder API.
use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgMatches, Args, Command, FromArgMatches, ValueEnum};

use crate::registry::FormatRegistry;

/// Flags that exist regardless of which formats are registered.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// List all registered data formats and exit.
    #[arg(long = "list_formats")]
    pub list_formats: bool,

    /// Presentation of the format list and of error diagnostics.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Log registry activity and stage timings to stderr.
    #[arg(long)]
    pub debug: bool,
}

/// Output format variants for reports and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Plain lines (the classic report).
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
    /// Aligned table with headers.
    Table,
}

/// A parsed command line.
#[derive(Debug, Clone)]
pub struct Cli {
    /// The fixed flags.
    pub global: GlobalArgs,
    /// `(format, path)` for every format flag present, in registration order.
    pub requests: Vec<(String, PathBuf)>,
}

/// Build the clap command, adding a `--<name> <PATH>` flag for every
/// registered format in registration order.
///
/// The registry refuses names that collide with the fixed flags.
#[must_use]
pub fn build_command(registry: &FormatRegistry) -> Command {
    let base = Command::new("phonebook")
        .about("Parses a data file in a registered format and prints it back out")
        .version(env!("CARGO_PKG_VERSION"));
    let mut cmd = GlobalArgs::augment_args(base);

    for format in registry.iter() {
        let help = match format.handler.description() {
            "" => format!("Parse a {} file and print it back out", format.name),
            desc => format!("Parse a {} file and print it back out [{desc}]", format.name),
        };
        cmd = cmd.arg(
            Arg::new(format.name.clone())
                .long(format.name.clone())
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help(help),
        );
    }

    cmd
}

impl Cli {
    /// Parse `args` against the registry-derived command.
    ///
    /// # Errors
    ///
    /// Argument errors, including the informational `--help`/`--version` exits.
    pub fn try_parse_from<I, T>(registry: &FormatRegistry, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = build_command(registry).try_get_matches_from(args)?;
        Self::from_matches(registry, &matches)
    }

    fn from_matches(registry: &FormatRegistry, matches: &ArgMatches) -> Result<Self, clap::Error> {
        let global = GlobalArgs::from_arg_matches(matches)?;
        let requests = registry
            .iter()
            .filter_map(|format| {
                matches
                    .get_one::<PathBuf>(&format.name)
                    .map(|path| (format.name.clone(), path.clone()))
            })
            .collect();
        Ok(Self { global, requests })
    }
}
