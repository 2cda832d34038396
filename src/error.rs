//! Error types for template formatting.
//!
//! Every formatting failure is terminal for the call that produced it: no
//! partial output is returned alongside an error.
//!
//! ## Error Categories
//!
//! - **Template Errors**: a `%` at the very end of the template, an
//!   unsupported specifier, or a precision that does not fit in `usize`
//! - **Argument Errors**: a directive with no argument left to bind to, or an
//!   argument whose runtime type does not satisfy the directive
//! - **I/O Errors**: the sink rejected the formatted bytes
//!
//! Template and argument errors carry the byte offset of the `%` that opened
//! the offending directive.
//!
//! ## Examples
//!
//! ```rust
//! use tinyfmt::{args, format, Error};
//!
//! let err = format("%d %d", &args![1]).unwrap_err();
//! assert!(matches!(err, Error::MissingArgument { directive: 'd', offset: 3 }));
//! assert_eq!(err.to_string(), "missing argument for %d");
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced while formatting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The template ends inside a directive (`"abc%"`, `"%.2"`).
    #[error("incomplete format specifier at end of string")]
    IncompleteDirective { offset: usize },

    /// A directive needs an argument but the argument list is exhausted.
    #[error("missing argument for %{directive}")]
    MissingArgument { directive: char, offset: usize },

    /// The argument bound to a directive has the wrong runtime type.
    #[error("argument for %{directive} is not {expected} (found {found})")]
    TypeMismatch {
        directive: char,
        expected: &'static str,
        found: &'static str,
        offset: usize,
    },

    /// The character after `%` is not a recognized directive.
    #[error("unsupported format specifier %{specifier}")]
    UnsupportedSpecifier { specifier: char, offset: usize },

    /// The precision digits overflow `usize`.
    #[error("precision out of range at offset {offset}")]
    InvalidPrecision { offset: usize },

    /// IO error while writing formatted output to a sink
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error raised while converting a value
    #[error("Error: {0}")]
    Custom(String),

    /// A formatted message turned into an error value by [`crate::errorf`].
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a type mismatch error for `directive` at `offset`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfmt::Error;
    ///
    /// let err = Error::type_mismatch('d', "an integer", "string", 0);
    /// assert_eq!(err.to_string(), "argument for %d is not an integer (found string)");
    /// ```
    pub fn type_mismatch(
        directive: char,
        expected: &'static str,
        found: &'static str,
        offset: usize,
    ) -> Self {
        Error::TypeMismatch {
            directive,
            expected,
            found,
            offset,
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for sink write failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the byte offset of the directive that caused the error, if the
    /// error came from scanning a template.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfmt::{args, format};
    ///
    /// let err = format("ok %q", &args![1]).unwrap_err();
    /// assert_eq!(err.offset(), Some(3));
    /// ```
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::IncompleteDirective { offset }
            | Error::MissingArgument { offset, .. }
            | Error::TypeMismatch { offset, .. }
            | Error::UnsupportedSpecifier { offset, .. }
            | Error::InvalidPrecision { offset } => Some(*offset),
            Error::Io(_) | Error::Custom(_) | Error::Message(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_directive() {
        let err = Error::MissingArgument {
            directive: 'x',
            offset: 4,
        };
        assert_eq!(err.to_string(), "missing argument for %x");

        let err = Error::UnsupportedSpecifier {
            specifier: 'q',
            offset: 0,
        };
        assert_eq!(err.to_string(), "unsupported format specifier %q");

        let err = Error::IncompleteDirective { offset: 7 };
        assert_eq!(err.to_string(), "incomplete format specifier at end of string");
    }

    #[test]
    fn test_offset_only_for_template_errors() {
        assert_eq!(Error::InvalidPrecision { offset: 2 }.offset(), Some(2));
        assert_eq!(Error::io("broken pipe").offset(), None);
        assert_eq!(Error::Message("boom".to_string()).offset(), None);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("pipe closed")));
    }
}
