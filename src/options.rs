//! Configuration options for formatting and rendering.
//!
//! - [`FormatOptions`]: main configuration struct
//! - [`KeyOrder`]: how keyed mappings order their entries
//!
//! ## Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use tinyfmt::{args, format_with_options, FormatOptions, KeyOrder};
//!
//! let mut ports = HashMap::new();
//! ports.insert("https", 443);
//! ports.insert("http", 80);
//!
//! // Sorted keys are the default.
//! let out = tinyfmt::format("%v", &args![ports]).unwrap();
//! assert_eq!(out, "{http:80 https:443}");
//!
//! // Fixed fractional digits for every float without an explicit precision.
//! let options = FormatOptions::new().with_default_precision(3);
//! let out = format_with_options("%f %v", &args![1.5, 2.0], &options).unwrap();
//! assert_eq!(out, "1.500 2.000");
//! # let _ = KeyOrder::Insertion;
//! ```

/// Entry order used when rendering keyed mappings.
///
/// Aggregate fields ignore this and always follow declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// Entries sorted by their rendered key. Output is reproducible even when
    /// the source map (e.g. `HashMap`) iterates in arbitrary order.
    #[default]
    Sorted,
    /// Entries in the order the source map produced them.
    Insertion,
}

/// Configuration options for formatting.
///
/// # Examples
///
/// ```rust
/// use tinyfmt::{FormatOptions, KeyOrder};
///
/// let options = FormatOptions::new();
/// assert_eq!(options.key_order, KeyOrder::Sorted);
/// assert_eq!(options.default_precision, None);
///
/// let options = FormatOptions::new()
///     .with_key_order(KeyOrder::Insertion)
///     .with_default_precision(15);
/// assert_eq!(options.default_precision, Some(15));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub key_order: KeyOrder,
    /// Fractional digits for floats rendered without an explicit precision.
    /// `None` selects the shortest representation that round-trips.
    pub default_precision: Option<usize>,
}

impl FormatOptions {
    /// Creates default options (sorted mapping keys, shortest float form).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    /// Sets the fractional digit count used by `%f` without a precision and
    /// by `%v`/concatenation for floats.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfmt::{args, concat_with_options, FormatOptions};
    ///
    /// let options = FormatOptions::new().with_default_precision(15);
    /// assert_eq!(concat_with_options(&args![3.14159], &options), "3.141590000000000");
    /// ```
    #[must_use]
    pub fn with_default_precision(mut self, precision: usize) -> Self {
        self.default_precision = Some(precision);
        self
    }
}
