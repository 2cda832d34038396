//! Adapters that route formatted output to errors and byte sinks.
//!
//! All of them format the whole template before touching the sink, so a
//! formatting error never leaves half a message behind.

use crate::{format_with_options, Error, FormatOptions, Result, Value};
use log::debug;
use std::io;

/// Formats `template` and wraps the result in an [`Error::Message`].
///
/// If formatting itself fails, that error is returned instead.
///
/// # Examples
///
/// ```rust
/// use tinyfmt::{args, errorf, Error};
///
/// let err = errorf("Code: %d", &args![404]);
/// assert_eq!(err.to_string(), "Code: 404");
///
/// let err = errorf("Invalid: %q", &args![42]);
/// assert!(matches!(err, Error::UnsupportedSpecifier { .. }));
/// ```
#[must_use]
pub fn errorf(template: &str, args: &[Value]) -> Error {
    match crate::format(template, args) {
        Ok(message) => Error::Message(message),
        Err(err) => err,
    }
}

/// Formats `template` and writes the bytes to `writer`.
///
/// # Examples
///
/// ```rust
/// use tinyfmt::{args, fprintf};
///
/// let mut buffer = Vec::new();
/// fprintf(&mut buffer, "Hello, %s!", &args!["world"]).unwrap();
/// assert_eq!(buffer, b"Hello, world!");
/// ```
///
/// # Errors
///
/// Returns the formatting error unchanged (nothing is written), or
/// [`Error::Io`] if the writer fails.
pub fn fprintf<W>(writer: W, template: &str, args: &[Value]) -> Result<()>
where
    W: io::Write,
{
    fprintf_with_options(writer, template, args, &FormatOptions::default())
}

/// Like [`fprintf`], with custom options.
///
/// # Errors
///
/// Returns the formatting error unchanged, or [`Error::Io`] if the writer fails.
pub fn fprintf_with_options<W>(
    mut writer: W,
    template: &str,
    args: &[Value],
    options: &FormatOptions,
) -> Result<()>
where
    W: io::Write,
{
    let output = format_with_options(template, args, options)?;
    writer.write_all(output.as_bytes()).map_err(|e| {
        debug!("sink rejected {} formatted bytes: {}", output.len(), e);
        Error::io(&e.to_string())
    })?;
    Ok(())
}

/// Formats `template` and writes it to standard output.
///
/// # Errors
///
/// Returns the formatting error unchanged, or [`Error::Io`] if stdout fails.
pub fn printf(template: &str, args: &[Value]) -> Result<()> {
    let stdout = io::stdout();
    fprintf(stdout.lock(), template, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_errorf_message() {
        let err = errorf("Error: %s", &args!["something went wrong"]);
        assert_eq!(err, Error::Message("Error: something went wrong".to_string()));
        assert_eq!(errorf("", &[]).to_string(), "");
    }

    #[test]
    fn test_errorf_passes_format_errors_through() {
        let err = errorf("Missing arg: %d %d", &args![42]);
        assert_eq!(err.to_string(), "missing argument for %d");
    }

    #[test]
    fn test_fprintf_writes_nothing_on_format_error() {
        let mut buffer = Vec::new();
        let result = fprintf(&mut buffer, "Bad: %d", &args!["x"]);
        assert!(matches!(result, Err(Error::TypeMismatch { .. })));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_fprintf_sink_failure_is_io() {
        let result = fprintf(FailingWriter, "Value: %d", &args![1]);
        assert!(matches!(result, Err(Error::Io(ref msg)) if msg.contains("disk full")));
    }

    #[test]
    fn test_printf_to_stdout() {
        assert_eq!(printf("stdout check: %d %s\n", &args![1, "ok"]), Ok(()));
        assert_eq!(printf("", &[]), Ok(()));
        assert!(matches!(
            printf("%d", &args!["x"]),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_fprintf_with_options() {
        let mut buffer = Vec::new();
        let options = FormatOptions::new().with_default_precision(2);
        fprintf_with_options(&mut buffer, "%f", &args![1.0], &options).unwrap();
        assert_eq!(buffer, b"1.00");
    }
}
