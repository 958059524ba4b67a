/// Output formatting for reports and diagnostics: text, JSON and table modes.
use std::io::{self, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;
use tracing::debug;

use super::args::OutputFormat;
use crate::types::{ErrorOutput, FormatListOutput};

/// Printed by `--list_formats` in text mode when the registry is empty.
pub const NO_FORMATS_MESSAGE: &str = "No data format is registered";

/// Heading printed by `--list_formats` in text mode.
pub const FORMATS_HEADING: &str = "Registered formats:";

/// Output context passed to all commands.
pub struct OutputCtx {
    pub format: OutputFormat,
    /// When true, emit per-stage timings.
    pub debug: bool,
}

impl OutputCtx {
    #[must_use]
    pub fn new(format: OutputFormat, debug: bool) -> Self {
        Self { format, debug }
    }

    /// Start a named debug timer. Logs elapsed time on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

// --- Format list ---

/// Write the `--list_formats` report.
///
/// # Errors
///
/// Returns the underlying I/O error if `out` cannot be written.
pub fn write_format_list<W: Write>(
    list: &FormatListOutput,
    ctx: &OutputCtx,
    out: &mut W,
) -> io::Result<()> {
    match ctx.format {
        OutputFormat::Json => write_json(list, out),
        OutputFormat::Text => {
            if list.formats.is_empty() {
                return writeln!(out, "{NO_FORMATS_MESSAGE}");
            }
            writeln!(out, "{FORMATS_HEADING}")?;
            for f in &list.formats {
                writeln!(out, "{}", f.name)?;
            }
            Ok(())
        }
        OutputFormat::Table => {
            if list.formats.is_empty() {
                return writeln!(out, "{NO_FORMATS_MESSAGE}");
            }
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            table.set_header(["FORMAT", "FLAG", "DESCRIPTION"]);
            for f in &list.formats {
                table.add_row([
                    f.name.as_str(),
                    &format!("--{} <PATH>", f.name),
                    f.description.as_deref().unwrap_or(""),
                ]);
            }
            writeln!(out, "{table}")
        }
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = write_error_to(err, format, &mut out);
}

fn write_error_to<W: Write>(err: &ErrorOutput, format: OutputFormat, out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(err, out),
        OutputFormat::Text | OutputFormat::Table => {
            writeln!(out, "Error: {}", err.error.message)?;
            if let Some(candidates) = &err.error.candidates {
                writeln!(out, "  Did you mean:")?;
                for c in candidates {
                    writeln!(out, "    --{c}")?;
                }
            }
            Ok(())
        }
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            debug!(stage = self.label, "{ms:.2}ms");
        }
    }
}

fn write_json<T: Serialize + ?Sized, W: Write>(value: &T, out: &mut W) -> io::Result<()> {
    let s = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(out, "{s}")
}
