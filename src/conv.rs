//! Numeric and boolean conversion primitives.
//!
//! These are pure functions of their inputs. The radix is a closed enum, so
//! integer conversion cannot fail.

use std::fmt::Write;

/// Radix accepted by [`int_to_string`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    /// Prefix written between the sign and the digits.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0o",
            Radix::Decimal => "",
            Radix::Hex => "0x",
        }
    }

    #[must_use]
    pub const fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    /// Maps a numeric base to a `Radix`, if supported.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfmt::conv::Radix;
    ///
    /// assert_eq!(Radix::from_base(16), Some(Radix::Hex));
    /// assert_eq!(Radix::from_base(3), None);
    /// ```
    #[must_use]
    pub const fn from_base(base: u32) -> Option<Self> {
        match base {
            2 => Some(Radix::Binary),
            8 => Some(Radix::Octal),
            10 => Some(Radix::Decimal),
            16 => Some(Radix::Hex),
            _ => None,
        }
    }
}

/// Converts an integer to text in the given radix.
///
/// Non-decimal radices carry a prefix; the sign of negative values comes
/// before it. Hex digits are lowercase.
///
/// # Examples
///
/// ```rust
/// use tinyfmt::conv::{int_to_string, Radix};
///
/// assert_eq!(int_to_string(255, Radix::Hex), "0xff");
/// assert_eq!(int_to_string(-8, Radix::Octal), "-0o10");
/// assert_eq!(int_to_string(0, Radix::Binary), "0b0");
/// ```
#[must_use]
pub fn int_to_string(value: i128, radix: Radix) -> String {
    let mut out = String::with_capacity(16);
    write_int(&mut out, value, radix);
    out
}

pub(crate) fn write_int(out: &mut String, value: i128, radix: Radix) {
    let magnitude = value.unsigned_abs();
    if value < 0 {
        out.push('-');
    }
    out.push_str(radix.prefix());
    // Writing into a String cannot fail.
    let _ = match radix {
        Radix::Binary => write!(out, "{:b}", magnitude),
        Radix::Octal => write!(out, "{:o}", magnitude),
        Radix::Decimal => write!(out, "{}", magnitude),
        Radix::Hex => write!(out, "{:x}", magnitude),
    };
}

/// Converts a float to text.
///
/// `Some(p)` rounds to exactly `p` fractional digits. `None` selects the
/// shortest representation that parses back to the same `f64`.
///
/// # Examples
///
/// ```rust
/// use tinyfmt::conv::float_to_string;
///
/// assert_eq!(float_to_string(3.14159, Some(2)), "3.14");
/// assert_eq!(float_to_string(123.456, Some(0)), "123");
/// assert_eq!(float_to_string(0.1, None), "0.1");
/// ```
#[must_use]
pub fn float_to_string(value: f64, precision: Option<usize>) -> String {
    let mut out = String::new();
    write_float(&mut out, value, precision);
    out
}

/// Largest precision `core::fmt` accepts.
const MAX_FMT_PRECISION: usize = u16::MAX as usize;

pub(crate) fn write_float(out: &mut String, value: f64, precision: Option<usize>) {
    let _ = match precision {
        Some(digits) if digits > MAX_FMT_PRECISION => {
            let written = write!(out, "{:.*}", MAX_FMT_PRECISION, value);
            // A finite f64 has at most 1074 fractional digits; the rest are zeros.
            if value.is_finite() {
                out.extend(std::iter::repeat('0').take(digits - MAX_FMT_PRECISION));
            }
            written
        }
        Some(digits) => write!(out, "{:.*}", digits, value),
        None => write!(out, "{}", value),
    };
}

/// Converts a boolean to `"true"` or `"false"`.
#[must_use]
pub const fn bool_to_string(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
