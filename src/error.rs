//! Error types for schema classification and block encoding.
//!
//! All failures are terminal for the encode call that raised them: the
//! encoder never returns a partially-populated body, so callers either get a
//! complete artifact or an error naming the shape or field that broke.
//!
//! ## Error Categories
//!
//! - **Schema errors**: inconsistent field metadata, caught before traversal
//! - **Encode errors**: a runtime value whose shape contradicts its declared role
//! - **Attribute errors**: a leaf value the literal converter cannot represent,
//!   tagged with the configuration name of the offending field
//!
//! ## Examples
//!
//! ```rust
//! use blockform::{Error, Shape};
//!
//! // A label on a plain document shape is rejected during classification.
//! let shape = Shape::document("top").with_label("name");
//! let err = shape.field_specs().unwrap_err();
//! assert!(matches!(err, Error::Schema { .. }));
//! ```

use thiserror::Error;

/// Represents all possible errors raised while classifying a shape or
/// encoding a value into a body.
///
/// Each variant carries enough context to point at the offending shape or
/// field without the caller needing to replay the traversal.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Field metadata on a shape is self-inconsistent
    #[error("invalid schema for shape `{shape}`: field `{field}` {msg}")]
    Schema {
        shape: String,
        field: String,
        msg: String,
    },

    /// A runtime value does not match its field's declared role
    #[error("cannot encode field `{field}`: expected {expected}, found {found}")]
    Encode {
        field: String,
        expected: String,
        found: String,
    },

    /// A value that has no literal representation
    #[error("cannot represent {found} as an attribute literal")]
    Unrepresentable { found: String },

    /// A literal-conversion failure, tagged with the attribute it came from
    #[error("attribute `{field}`: {source}")]
    Attribute {
        field: String,
        #[source]
        source: Box<Error>,
    },

    /// IO error while writing rendered output
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a schema error naming the shape and field that failed
    /// classification.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blockform::Error;
    ///
    /// let err = Error::schema("app", "meta", "declared twice");
    /// assert!(err.to_string().contains("shape `app`"));
    /// ```
    pub fn schema(shape: &str, field: &str, msg: &str) -> Self {
        Error::Schema {
            shape: shape.to_string(),
            field: field.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an encode error for a value whose runtime shape contradicts
    /// its field's declared role.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blockform::Error;
    ///
    /// let err = Error::encode("service", "a record", "a string");
    /// assert!(err.to_string().contains("expected a record"));
    /// ```
    pub fn encode(field: &str, expected: &str, found: &str) -> Self {
        Error::Encode {
            field: field.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an error for a value the literal converter cannot represent.
    pub fn unrepresentable(found: &str) -> Self {
        Error::Unrepresentable {
            found: found.to_string(),
        }
    }

    /// Wraps a literal-conversion failure with the configuration name of the
    /// attribute it occurred under. The underlying error is preserved
    /// unchanged as the source.
    pub fn attribute(field: &str, source: Error) -> Self {
        Error::Attribute {
            field: field.to_string(),
            source: Box::new(source),
        }
    }

    /// Creates an I/O error for output-writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_messages() {
        let err = Error::schema("app", "meta", "declared twice");
        assert_eq!(
            err.to_string(),
            "invalid schema for shape `app`: field `meta` declared twice"
        );

        let err = Error::encode("service", "a record", "a string");
        assert_eq!(
            err.to_string(),
            "cannot encode field `service`: expected a record, found a string"
        );

        let err = Error::unrepresentable("null");
        assert_eq!(err.to_string(), "cannot represent null as an attribute literal");

        let err = Error::io("disk full");
        assert_eq!(err.to_string(), "IO error: disk full");
    }

    #[test]
    fn test_attribute_wrapper_keeps_source() {
        let inner = Error::unrepresentable("a record");
        let err = Error::attribute("owner", inner);
        assert_eq!(
            err.to_string(),
            "attribute `owner`: cannot represent a record as an attribute literal"
        );
        match err {
            Error::Attribute { field, source } => {
                assert_eq!(field, "owner");
                assert!(matches!(*source, Error::Unrepresentable { .. }));
            }
            other => panic!("expected attribute error, got {other:?}"),
        }
    }
}
