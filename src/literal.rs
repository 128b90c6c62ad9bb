//! Attribute literals: the closed set of value forms an attribute can carry.
//!
//! A [`Literal`] is what ends up on the right-hand side of `name = ...` in
//! the rendered text. Conversion from [`Value`] is total over booleans,
//! numbers, strings, sequences of representable values, and string-keyed
//! maps of representable values, and rejects everything else, in
//! particular nulls and records, which have no literal form.
//!
//! Map-shaped literals are emitted with their keys sorted lexicographically,
//! so the same map always renders to the same object text.

use crate::value::{Number, Value};
use crate::{Error, Result};

/// The literal representation of an attribute value.
///
/// # Examples
///
/// ```rust
/// use blockform::{Literal, Value};
///
/// let lit = Literal::from_value(&Value::seq(["./worker"])).unwrap();
/// assert!(matches!(lit, Literal::Seq(_)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Bool(bool),
    Number(Number),
    String(String),
    Seq(Vec<Literal>),
    /// An object literal; entries are already sorted by key.
    Object(Vec<(String, Literal)>),
}

impl Literal {
    /// Converts a runtime value into its literal form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unrepresentable`] for nulls, records, and any
    /// sequence or map containing one.
    pub fn from_value(value: &Value) -> Result<Literal> {
        match value {
            Value::Bool(b) => Ok(Literal::Bool(*b)),
            Value::Number(n) => Ok(Literal::Number(*n)),
            Value::String(s) => Ok(Literal::String(s.clone())),
            Value::Seq(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(Literal::from_value(item)?);
                }
                Ok(Literal::Seq(out))
            }
            Value::Map(entries) => {
                let mut out = Vec::with_capacity(entries.len());
                for (key, item) in entries {
                    out.push((key.clone(), Literal::from_value(item)?));
                }
                out.sort_by(|(a, _), (b, _)| a.cmp(b));
                Ok(Literal::Object(out))
            }
            Value::Null | Value::Record(_) => Err(Error::unrepresentable(value.kind_name())),
        }
    }
}
