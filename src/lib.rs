//! # tinyfmt
//!
//! A small printf-style formatting engine with strict, per-directive type
//! checking and a recursive renderer for composite values.
//!
//! ## Key Features
//!
//! - **Checked Directives**: `%d`, `%x`, `%o`, `%b`, `%f`, `%s` each demand a
//!   specific argument type; a mismatch is an error, never a silent coercion
//! - **Catch-all `%v`**: renders anything, including nested sequences, maps
//!   and structs, using a fixed bracket/space convention
//! - **Serde Driven**: any `#[derive(Serialize)]` type can be an argument
//! - **Reproducible**: map entries are sorted by key unless asked otherwise
//! - **No Partial Output**: the first error aborts the whole call
//!
//! ## Quick Start
//!
//! ```rust
//! use tinyfmt::{args, format};
//!
//! let out = format("%s has %d items (%.1f%%)", &args!["cart", 3, 42.57]).unwrap();
//! assert_eq!(out, "cart has 3 items (42.6%)");
//! ```
//!
//! ### Directives
//!
//! | Directive | Argument | Example | Output |
//! |---|---|---|---|
//! | `%d` | integer | `42` | `42` |
//! | `%x` | integer | `255` | `0xff` |
//! | `%o` | integer | `64` | `0o100` |
//! | `%b` | integer | `7` | `0b111` |
//! | `%f`, `%.Nf` | float | `3.14159` with `%.2f` | `3.14` |
//! | `%s` | string | `"hi"` | `hi` |
//! | `%v` | any | `vec![1, 2, 3]` | `[1 2 3]` |
//! | `%%` | none | | `%` |
//!
//! ### Composite Values
//!
//! ```rust
//! use serde::Serialize;
//! use tinyfmt::sprintf;
//!
//! #[derive(Serialize)]
//! struct Item {
//!     name: String,
//!     tags: Vec<&'static str>,
//! }
//!
//! let item = Item { name: "lamp".to_string(), tags: vec!["home", "light"] };
//! assert_eq!(sprintf!("%v", item).unwrap(), "{name:lamp tags:[home light]}");
//! ```
//!
//! ### Concatenation
//!
//! ```rust
//! use tinyfmt::sprint;
//!
//! assert_eq!(sprint!("a", 1, true), "a1true");
//! ```
//!
//! ### Writing to Sinks
//!
//! ```rust
//! use tinyfmt::{args, fprintf};
//!
//! let mut buffer = Vec::new();
//! fprintf(&mut buffer, "Hex: %x", &args![255]).unwrap();
//! assert_eq!(buffer, b"Hex: 0xff");
//! ```
//!
//! ## Errors
//!
//! See [`Error`]. Formatting is single pass, so the cost of a call is linear
//! in the template length plus the rendered size of the arguments.

pub mod conv;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod print;
pub mod render;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use format::{format, format_with_options};
pub use map::ValueMap;
pub use options::{FormatOptions, KeyOrder};
pub use print::{errorf, fprintf, fprintf_with_options, printf};
pub use render::{concat, concat_with_options, render, render_with_options};
pub use ser::{to_value, ValueSerializer};
pub use value::Value;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use serde::Serialize;
    use std::collections::HashMap;

    #[derive(Serialize)]
    struct ExampleStruct {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Value")]
        value: i64,
    }

    #[test]
    fn test_format_scenarios() {
        let cases: Vec<(&str, Vec<Value>, &str)> = vec![
            ("Hello, %s!", args!["world"], "Hello, world!"),
            ("Value: %d", args![42], "Value: 42"),
            ("Hex: %x", args![255], "Hex: 0xff"),
            ("Float: %.2f", args![3.14159], "Float: 3.14"),
            ("Bool: %v", args![true], "Bool: true"),
            ("Multiple: %d, %s, %v", args![42, "test", true], "Multiple: 42, test, true"),
            ("Edge case: %d", args![i64::MAX], "Edge case: 9223372036854775807"),
            ("Escape: %%", args![], "Escape: %"),
            ("Slice: %v", args![vec![1, 2, 3]], "Slice: [1 2 3]"),
        ];

        for (template, arguments, want) in cases {
            assert_eq!(format(template, &arguments).unwrap(), want, "{}", template);
        }
    }

    #[test]
    fn test_map_and_struct() {
        let mut map = HashMap::new();
        map.insert("key", 1);
        assert_eq!(format("Map: %v", &args![map]).unwrap(), "Map: {key:1}");

        let example = ExampleStruct {
            name: "example".to_string(),
            value: 123,
        };
        assert_eq!(
            format("Struct: %v", &args![example]).unwrap(),
            "Struct: {Name:example Value:123}"
        );
    }

    #[test]
    fn test_concat_matches_render_for_scalars() {
        for value in [Value::from(1), Value::from("s"), Value::from(1.5), Value::from(true)] {
            assert_eq!(concat(std::slice::from_ref(&value)), render(&value));
        }
    }
}
