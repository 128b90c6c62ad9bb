//! Dynamic value representation for records being encoded.
//!
//! This module provides the [`Value`] enum, a closed tagged-variant type for
//! the runtime data handed to the encoder, and [`Record`], a value carrying
//! its declared [`Shape`]. There is no open `any` type anywhere: everything
//! the encoder can traverse is one of these variants.
//!
//! ## Core Types
//!
//! - [`Value`]: null, bool, number, string, sequence, string-keyed map, or record
//! - [`Number`]: integer or floating-point numeric value
//! - [`Record`]: a shaped set of named field values
//!
//! ## Building values
//!
//! ```rust
//! use blockform::{Record, Shape, Value};
//!
//! let shape = Shape::document("app").with_attr("name").shared();
//! let mut app = Record::new(shape);
//! app.set("name", "awesome-app").unwrap();
//!
//! assert_eq!(app.get("name").and_then(Value::as_str), Some("awesome-app"));
//! ```

use crate::schema::Shape;
use crate::{Error, Result};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A dynamically-typed value reachable during an encode traversal.
///
/// Absence is explicit: an unset field and a field set to [`Value::Null`]
/// are both "absent" to the encoder, which emits nothing for them when the
/// field's role allows it.
///
/// # Examples
///
/// ```rust
/// use blockform::{Number, Value};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::from("hello");
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Seq(Vec<Value>),
    Map(IndexMap<String, Value>),
    Record(Record),
}

/// A numeric value, either integer or floating-point.
///
/// # Examples
///
/// ```rust
/// use blockform::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it is an integer or a
    /// whole-number float in range.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`. Always succeeds.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

/// A record value: a [`Shape`] plus the runtime values of its fields.
///
/// Fields are set by configuration name; setting a name the shape does not
/// declare is an error, so a record can never silently carry data its shape
/// would not emit.
///
/// # Examples
///
/// ```rust
/// use blockform::{Record, Shape};
///
/// let shape = Shape::block("service").with_label("name").shared();
/// let mut svc = Record::new(shape);
/// svc.set("name", "web").unwrap();
/// assert!(svc.set("port", 8080).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    shape: Arc<Shape>,
    values: IndexMap<String, Value>,
}

impl Record {
    /// Creates an empty record of the given shape.
    #[must_use]
    pub fn new(shape: Arc<Shape>) -> Self {
        Record {
            shape,
            values: IndexMap::new(),
        }
    }

    /// Returns the record's shape.
    #[must_use]
    pub fn shape(&self) -> &Arc<Shape> {
        &self.shape
    }

    /// Sets a field by configuration name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Schema`] if the shape does not declare the name (or
    /// declares it skipped).
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        if !self.shape.declares(name) {
            return Err(Error::schema(
                self.shape.name(),
                name,
                "is not declared by the record's shape",
            ));
        }
        self.values.insert(name.to_string(), value.into());
        Ok(())
    }

    /// Returns the value of a field, or `None` if it was never set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a sequence.
    #[inline]
    #[must_use]
    pub const fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    /// Returns `true` if the value is a map.
    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns `true` if the value is a record.
    #[inline]
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer (or whole-number float), returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a sequence, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_seq(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    /// If the value is a record, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(rec) => Some(rec),
            _ => None,
        }
    }

    /// A short noun for this variant, used in error messages.
    #[must_use]
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "a bool",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Seq(_) => "a sequence",
            Value::Map(_) => "a map",
            Value::Record(_) => "a record",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
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
        Value::Seq(value)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(value: IndexMap<String, Value>) -> Self {
        Value::Map(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl Value {
    /// Builds a sequence value from anything iterable of convertible items.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blockform::Value;
    ///
    /// let seq = Value::seq(["./web", "--listen=:8080"]);
    /// assert!(seq.is_seq());
    /// ```
    pub fn seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Builds a map value from key/value pairs, preserving insertion order.
    pub fn map<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
