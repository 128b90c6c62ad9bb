//! Configuration options for text rendering.
//!
//! [`FormatOptions`] controls how an encoded body is laid out as text:
//! indentation width and whether blank separator lines are kept between
//! sibling blocks.
//!
//! ## Examples
//!
//! ```rust
//! use blockform::FormatOptions;
//!
//! // Default: 2-space indent, blank lines between sibling blocks.
//! let options = FormatOptions::new();
//!
//! // Dense output for machine consumption.
//! let options = FormatOptions::compact().with_indent(0);
//! ```

/// Formatting options for rendered configuration text.
///
/// # Examples
///
/// ```rust
/// use blockform::FormatOptions;
///
/// let options = FormatOptions::new().with_indent(4);
/// assert_eq!(options.indent, 4);
/// assert!(!options.compact);
/// ```
#[derive(Clone, Debug)]
pub struct FormatOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// When set, blank separator lines between sibling blocks are dropped.
    pub compact: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            indent: 2,
            compact: false,
        }
    }
}

impl FormatOptions {
    /// Creates default options (2-space indent, separator lines kept).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates compact options: no blank lines between sibling blocks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blockform::FormatOptions;
    ///
    /// let options = FormatOptions::compact();
    /// assert!(options.compact);
    /// ```
    #[must_use]
    pub fn compact() -> Self {
        FormatOptions {
            compact: true,
            ..Default::default()
        }
    }

    /// Sets the indentation width (spaces per nesting level).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets or clears compact mode.
    #[must_use]
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}
