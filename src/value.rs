//! Dynamic argument representation.
//!
//! Templates bind their directives to a list of [`Value`]s. A `Value` is a
//! tagged variant covering every shape the formatter knows how to check or
//! render: scalars, ordered sequences, keyed mappings and field-bearing
//! aggregates. Anything else collapses to [`Value::Null`], which renders as
//! `<unsupported>`.
//!
//! ## Creating Values
//!
//! ```rust
//! use tinyfmt::{to_value, Value};
//! use serde::Serialize;
//!
//! // From primitives
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let flag = Value::from(true);
//!
//! // From any `Serialize` type
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let point = to_value(&Point { x: 1, y: 2 }).unwrap();
//! assert!(point.is_struct());
//! assert_eq!(point.to_string(), "{x:1 y:2}");
//! ```
//!
//! ## Type Checking
//!
//! Directive type checks are variant comparisons:
//!
//! ```rust
//! use tinyfmt::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_int());
//! assert_eq!(value.kind(), "integer");
//! assert_eq!(value.as_str(), None);
//! ```

use crate::ValueMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Newtype-struct name that marks a serialized [`Value::Struct`].
///
/// [`crate::ser::ValueSerializer`] recognizes it and restores the aggregate
/// instead of producing a plain map. Other serializers see a transparent
/// newtype around a map.
pub(crate) const STRUCT_TOKEN: &str = "$tinyfmt::private::Struct";

/// A dynamically-typed formatting argument.
///
/// # Examples
///
/// ```rust
/// use tinyfmt::Value;
///
/// let values = vec![Value::from(1), Value::from("two"), Value::from(3.0)];
/// assert!(values[0].is_int());
/// assert!(values[1].is_string());
/// assert!(values[2].is_float());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// Absent value (`None`, `()`); renders as `<unsupported>`.
    #[default]
    Null,
    Bool(bool),
    Int(i128),
    Float(f64),
    String(String),
    /// Ordered sequence: `[a b c]`.
    Array(Vec<Value>),
    /// Keyed mapping: `{k:v k:v}`.
    Map(ValueMap),
    /// Field-bearing aggregate, fields in declaration order: `{name:v name:v}`.
    Struct(ValueMap),
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Value::Struct(_))
    }

    /// Short name of the variant, used in type mismatch errors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Struct(_) => "struct",
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer, returns it. Floats are never coerced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfmt::Value;
    ///
    /// assert_eq!(Value::from(42).as_int(), Some(42));
    /// assert_eq!(Value::from(42.0).as_int(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i128> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is a float, returns it. Integers are never coerced.
    #[inline]
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// If the value is an aggregate, returns its fields in declaration order.
    #[inline]
    #[must_use]
    pub fn as_fields(&self) -> Option<&ValueMap> {
        match self {
            Value::Struct(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Renders the value the way `%v` does, with default options.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render(self))
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i128(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Map(map) => serialize_entries(map, serializer),
            Value::Struct(fields) => {
                serializer.serialize_newtype_struct(STRUCT_TOKEN, &Fields(fields))
            }
        }
    }
}

struct Fields<'a>(&'a ValueMap);

impl Serialize for Fields<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_entries(self.0, serializer)
    }
}

fn serialize_entries<S>(map: &ValueMap, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::SerializeMap;
    let mut state = serializer.serialize_map(Some(map.len()))?;
    for (k, v) in map {
        state.serialize_entry(k, v)?;
    }
    state.end()
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(value as i128)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Value::Map(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Int(42));
        assert_eq!(Value::from(u64::MAX), Value::Int(u64::MAX as i128));
        assert_eq!(Value::from(3.5f64), Value::Float(3.5));
        assert_eq!(Value::from('x'), Value::String("x".to_string()));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(7u8)), Value::Int(7));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::from(1.5).kind(), "float");
        assert_eq!(Value::Array(vec![]).kind(), "array");
        assert_eq!(Value::Map(ValueMap::new()).kind(), "map");
        assert_eq!(Value::Struct(ValueMap::new()).kind(), "struct");
    }

    #[test]
    fn test_no_numeric_coercion() {
        assert_eq!(Value::from(1.0).as_int(), None);
        assert_eq!(Value::from(1).as_float(), None);
    }

    #[test]
    fn test_collect_into_array() {
        let value: Value = (1..=3).map(Value::from).collect();
        assert_eq!(
            value,
            Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }

    #[test]
    fn test_display_renders_like_v() {
        let value: Value = vec![Value::from(1), Value::from("a")].into();
        assert_eq!(value.to_string(), "[1 a]");
        assert_eq!(Value::Null.to_string(), "<unsupported>");
    }
}
