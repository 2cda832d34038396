//! Template scanning and directive dispatch.
//!
//! A template is scanned once, left to right. Literal text is copied to the
//! output; each `%` opens a directive that binds to the next unconsumed
//! argument:
//!
//! | Directive | Argument | Output |
//! |---|---|---|
//! | `%d` | integer | decimal |
//! | `%x` | integer | hex, `0x` prefix |
//! | `%o` | integer | octal, `0o` prefix |
//! | `%b` | integer | binary, `0b` prefix |
//! | `%f` | float | fixed precision (`%.2f`) or shortest form |
//! | `%s` | string | verbatim |
//! | `%v` | anything | rendered value |
//! | `%%` | none | a literal `%` |
//!
//! The first error aborts the call and discards everything written so far.
//! Unused trailing arguments are not an error.

use crate::conv::{write_float, write_int, Radix};
use crate::{render, Error, FormatOptions, Result, Value};
use log::{debug, trace};

/// A recognized directive character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    /// `%d`, `%x`, `%o`, `%b`
    Int(Radix),
    /// `%f`
    Float,
    /// `%s`
    Str,
    /// `%v`
    Value,
    /// `%%`
    Percent,
}

impl Directive {
    /// # Examples
    ///
    /// ```rust
    /// use tinyfmt::conv::Radix;
    /// use tinyfmt::format::Directive;
    ///
    /// assert_eq!(Directive::from_char('x'), Some(Directive::Int(Radix::Hex)));
    /// assert_eq!(Directive::from_char('q'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'd' => Some(Directive::Int(Radix::Decimal)),
            'x' => Some(Directive::Int(Radix::Hex)),
            'o' => Some(Directive::Int(Radix::Octal)),
            'b' => Some(Directive::Int(Radix::Binary)),
            'f' => Some(Directive::Float),
            's' => Some(Directive::Str),
            'v' => Some(Directive::Value),
            '%' => Some(Directive::Percent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Directive::Int(Radix::Decimal) => 'd',
            Directive::Int(Radix::Hex) => 'x',
            Directive::Int(Radix::Octal) => 'o',
            Directive::Int(Radix::Binary) => 'b',
            Directive::Float => 'f',
            Directive::Str => 's',
            Directive::Value => 'v',
            Directive::Percent => '%',
        }
    }

    /// Whether the directive consumes an argument.
    #[must_use]
    pub const fn binds_argument(self) -> bool {
        !matches!(self, Directive::Percent)
    }

    const fn expected(self) -> &'static str {
        match self {
            Directive::Int(_) => "an integer",
            Directive::Float => "a float",
            Directive::Str => "a string",
            Directive::Value | Directive::Percent => "any value",
        }
    }
}

/// A parsed directive with its optional precision.
///
/// Precision is captured for every directive but only `%f` uses it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spec {
    pub directive: Directive,
    pub precision: Option<usize>,
}

/// Formats `template` against `args` with default options.
///
/// # Examples
///
/// ```rust
/// use tinyfmt::{args, format};
///
/// assert_eq!(format("Hex: %x", &args![255]).unwrap(), "Hex: 0xff");
/// assert_eq!(format("Float: %.2f", &args![3.14159]).unwrap(), "Float: 3.14");
/// assert!(format("Invalid: %q", &args![42]).is_err());
/// ```
///
/// # Errors
///
/// Returns the first template or argument error encountered. See [`Error`].
pub fn format(template: &str, args: &[Value]) -> Result<String> {
    format_with_options(template, args, &FormatOptions::default())
}

/// Formats `template` against `args` with custom options.
///
/// # Errors
///
/// Returns the first template or argument error encountered. See [`Error`].
pub fn format_with_options(
    template: &str,
    args: &[Value],
    options: &FormatOptions,
) -> Result<String> {
    let mut scanner = Scanner::new(template, args, options);
    match scanner.run() {
        Ok(()) => Ok(scanner.into_inner()),
        Err(err) => {
            debug!("formatting {:?} aborted: {}", template, err);
            Err(err)
        }
    }
}

struct Scanner<'a> {
    template: &'a str,
    args: &'a [Value],
    options: &'a FormatOptions,
    arg_index: usize,
    output: String,
}

impl<'a> Scanner<'a> {
    fn new(template: &'a str, args: &'a [Value], options: &'a FormatOptions) -> Self {
        Scanner {
            template,
            args,
            options,
            arg_index: 0,
            output: String::with_capacity(template.len() + 16 * args.len()),
        }
    }

    fn into_inner(self) -> String {
        self.output
    }

    fn run(&mut self) -> Result<()> {
        let mut pos = 0;
        while let Some(rel) = self.template[pos..].find('%') {
            let start = pos + rel;
            self.output.push_str(&self.template[pos..start]);
            let (spec, next) = self.parse_spec(start)?;
            self.apply(spec, start)?;
            pos = next;
        }
        self.output.push_str(&self.template[pos..]);
        Ok(())
    }

    /// Parses the directive opened by the `%` at `start` and returns it
    /// with the byte offset just past it.
    fn parse_spec(&self, start: usize) -> Result<(Spec, usize)> {
        let bytes = self.template.as_bytes();
        let mut cursor = start + 1;
        let mut precision = None;

        if bytes.get(cursor) == Some(&b'.') {
            cursor += 1;
            let digits_start = cursor;
            while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
                cursor += 1;
            }
            // A bare '.' captures nothing.
            if cursor > digits_start {
                precision = Some(parse_precision(&bytes[digits_start..cursor], start)?);
            }
        }

        let c = self.template[cursor..]
            .chars()
            .next()
            .ok_or(Error::IncompleteDirective { offset: start })?;
        let directive = Directive::from_char(c).ok_or(Error::UnsupportedSpecifier {
            specifier: c,
            offset: start,
        })?;

        Ok((
            Spec {
                directive,
                precision,
            },
            cursor + c.len_utf8(),
        ))
    }

    fn apply(&mut self, spec: Spec, offset: usize) -> Result<()> {
        let directive = spec.directive;
        if !directive.binds_argument() {
            self.output.push('%');
            return Ok(());
        }

        let arg = self
            .args
            .get(self.arg_index)
            .ok_or(Error::MissingArgument {
                directive: directive.as_char(),
                offset,
            })?;
        trace!(
            "%{} at offset {} binds argument {} ({})",
            directive.as_char(),
            offset,
            self.arg_index,
            arg.kind()
        );

        match (directive, arg) {
            (Directive::Int(radix), Value::Int(i)) => write_int(&mut self.output, *i, radix),
            (Directive::Float, Value::Float(f)) => write_float(
                &mut self.output,
                *f,
                spec.precision.or(self.options.default_precision),
            ),
            (Directive::Str, Value::String(s)) => self.output.push_str(s),
            (Directive::Value, value) => render::render_into(&mut self.output, value, self.options),
            (directive, value) => {
                return Err(Error::type_mismatch(
                    directive.as_char(),
                    directive.expected(),
                    value.kind(),
                    offset,
                ));
            }
        }

        self.arg_index += 1;
        Ok(())
    }
}

fn parse_precision(digits: &[u8], offset: usize) -> Result<usize> {
    digits.iter().try_fold(0usize, |acc, &d| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(usize::from(d - b'0')))
            .ok_or(Error::InvalidPrecision { offset })
    })
}
