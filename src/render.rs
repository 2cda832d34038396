//! Value rendering and concatenation.
//!
//! Rendering never fails. Composite values recurse element by element:
//!
//! - arrays: `[a b c]`
//! - keyed mappings: `{key:value key:value}`, ordered per [`KeyOrder`]
//! - aggregates: `{field:value field:value}`, in declaration order
//! - `Null`: `<unsupported>`
//!
//! Concatenation renders each argument with the same rules and joins them
//! with no separator.

use crate::conv::{bool_to_string, write_float, write_int, Radix};
use crate::{FormatOptions, KeyOrder, Value};

/// Text produced for values with no renderable shape.
pub const UNSUPPORTED: &str = "<unsupported>";

/// Renders a single value with default options.
///
/// # Examples
///
/// ```rust
/// use tinyfmt::{render, Value};
///
/// let list: Value = vec![Value::from(1), Value::from(2), Value::from(3)].into();
/// assert_eq!(render(&list), "[1 2 3]");
/// ```
#[must_use]
pub fn render(value: &Value) -> String {
    render_with_options(value, &FormatOptions::default())
}

#[must_use]
pub fn render_with_options(value: &Value, options: &FormatOptions) -> String {
    let mut out = String::new();
    render_into(&mut out, value, options);
    out
}

/// Concatenates the rendered form of every argument, with no separators.
///
/// # Examples
///
/// ```rust
/// use tinyfmt::{args, concat};
///
/// assert_eq!(concat(&args!["a", 1, true]), "a1true");
/// assert_eq!(concat(&args!["Value: ", 42]), "Value: 42");
/// ```
#[must_use]
pub fn concat(args: &[Value]) -> String {
    concat_with_options(args, &FormatOptions::default())
}

#[must_use]
pub fn concat_with_options(args: &[Value], options: &FormatOptions) -> String {
    let mut out = String::new();
    for arg in args {
        render_into(&mut out, arg, options);
    }
    out
}

pub(crate) fn render_into(out: &mut String, value: &Value, options: &FormatOptions) {
    match value {
        Value::String(s) => out.push_str(s),
        Value::Int(i) => write_int(out, *i, Radix::Decimal),
        Value::Bool(b) => out.push_str(bool_to_string(*b)),
        Value::Float(f) => write_float(out, *f, options.default_precision),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                render_into(out, item, options);
            }
            out.push(']');
        }
        Value::Map(map) => match options.key_order {
            KeyOrder::Sorted => write_entries(out, map.sorted_entries(), options),
            KeyOrder::Insertion => write_entries(out, map.iter(), options),
        },
        Value::Struct(fields) => write_entries(out, fields.iter(), options),
        Value::Null => out.push_str(UNSUPPORTED),
    }
}

fn write_entries<'v, I>(out: &mut String, entries: I, options: &FormatOptions)
where
    I: IntoIterator<Item = (&'v String, &'v Value)>,
{
    out.push('{');
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(key);
        out.push(':');
        render_into(out, value, options);
    }
    out.push('}');
}
