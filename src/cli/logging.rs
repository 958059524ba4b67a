/// Logging setup: a `tracing` fmt subscriber writing to stderr.
use tracing::Level;

/// Install the global subscriber. `DEBUG` with `--debug`, `WARN` otherwise.
pub fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
