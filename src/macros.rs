/// Builds a `Vec<Value>` argument list from expressions of any
/// `Serialize` type.
///
/// Values that fail to convert become `Value::Null`. The only such
/// failure among plain scalars is a `u128` above `i128::MAX`, so
/// `sprintf!("%d", u128::MAX)` reports a type mismatch against `null`.
/// Call [`to_value`](crate::to_value) directly to see the conversion error.
///
/// ```rust
/// use tinyfmt::{args, Value};
///
/// let list = args![42, "text", 2.5, true];
/// assert_eq!(list[0], Value::Int(42));
/// assert_eq!(list[1], Value::from("text"));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };

    ($($arg:expr),+ $(,)?) => {{
        let list: ::std::vec::Vec<$crate::Value> =
            ::std::vec![$($crate::to_value(&$arg).unwrap_or_default()),+];
        list
    }};
}

/// Formats a template against inline arguments; returns `Result<String>`.
///
/// ```rust
/// use tinyfmt::sprintf;
///
/// assert_eq!(sprintf!("Value: %d", 42).unwrap(), "Value: 42");
/// ```
#[macro_export]
macro_rules! sprintf {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format($template, &$crate::args![$($arg),*])
    };
}

/// Concatenates inline arguments with no separators.
///
/// ```rust
/// use tinyfmt::sprint;
///
/// assert_eq!(sprint!("a", 1, true), "a1true");
/// ```
#[macro_export]
macro_rules! sprint {
    ($($arg:expr),* $(,)?) => {
        $crate::concat(&$crate::args![$($arg),*])
    };
}

/// Formats inline arguments to standard output; returns `Result<()>`.
#[macro_export]
macro_rules! printf {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::printf($template, &$crate::args![$($arg),*])
    };
}

/// Builds an error value from a template and inline arguments.
///
/// ```rust
/// use tinyfmt::errorf;
///
/// let err = errorf!("Code: %d", 404);
/// assert_eq!(err.to_string(), "Code: 404");
/// ```
#[macro_export]
macro_rules! errorf {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::errorf($template, &$crate::args![$($arg),*])
    };
}
