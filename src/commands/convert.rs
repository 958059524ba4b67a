/// Format flags: parse each requested file and print it back out.
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::cli::OutputCtx;
use crate::registry::{Dispatcher, FormatError, FormatRegistry};

/// Run the parse+render cycle for every `(format, path)` request.
///
/// Requests are processed in the order given (registration order, as built by
/// the CLI). All output is buffered and written to `out` only once every
/// request has succeeded, so a failure leaves `out` untouched.
///
/// # Errors
///
/// The first `FormatError` raised by any request, or `FormatError::Output`
/// if the final write fails.
pub fn run<W: Write>(
    requests: &[(String, PathBuf)],
    registry: &FormatRegistry,
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<(), FormatError> {
    if requests.is_empty() {
        debug!("no format flags given");
        return Ok(());
    }

    let dispatcher = Dispatcher::new(registry);
    let mut buf = Vec::new();

    for (format, path) in requests {
        let _t_format = ctx.timer("parse_and_render");
        dispatcher.run(format, path, &mut buf)?;
        drop(_t_format);
    }

    out.write_all(&buf)
        .and_then(|()| out.flush())
        .map_err(FormatError::Output)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::cli::OutputFormat;
    use crate::codecs::register_builtin;
    use crate::codecs::tests::{fixture, same_tokens};
    use crate::registry::Document;

    fn builtin() -> FormatRegistry {
        let mut reg = FormatRegistry::new("phonebook");
        register_builtin(&mut reg).unwrap();
        reg
    }

    fn ctx() -> OutputCtx {
        OutputCtx::new(OutputFormat::Text, false)
    }

    #[test]
    fn test_yaml_round_trip() {
        let path = fixture("test_file.yaml");
        let mut out = Vec::new();
        run(&[("yaml".to_owned(), path.clone())], &builtin(), &ctx(), &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(same_tokens(&printed, &std::fs::read_to_string(path).unwrap()));
    }

    #[test]
    fn test_two_formats_in_request_order() {
        let mut reg = FormatRegistry::new("phonebook");
        for name in ["first", "second"] {
            reg.register_fn(
                name,
                |p: &Path| Ok(Document::String(p.display().to_string())),
                |d: &Document| Ok(d.as_str().unwrap_or_default().to_owned()),
            )
            .unwrap();
        }
        let requests = vec![
            ("first".to_owned(), PathBuf::from("one")),
            ("second".to_owned(), PathBuf::from("two")),
        ];
        let mut out = Vec::new();
        run(&requests, &reg, &ctx(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_missing_file_prints_nothing() {
        let mut out = Vec::new();
        let err = run(
            &[("yaml".to_owned(), PathBuf::from("missingfile.yaml"))],
            &builtin(),
            &ctx(),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, FormatError::Io { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_later_failure_discards_earlier_output() {
        let requests = vec![
            ("yaml".to_owned(), fixture("test_file.yaml")),
            ("json".to_owned(), PathBuf::from("missingfile.json")),
        ];
        let mut out = Vec::new();
        let err = run(&requests, &builtin(), &ctx(), &mut out).unwrap_err();
        assert!(matches!(err, FormatError::Io { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_no_requests_is_silent() {
        let mut out = Vec::new();
        run(&[], &builtin(), &ctx(), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
