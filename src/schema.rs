//! Shape declarations: explicit per-field metadata for record values.
//!
//! A [`Shape`] describes one kind of record: its configuration-visible field
//! names, the role each field plays in the emitted text (label, attribute, or
//! nested block), and whether the field holds a single value, an ordered
//! sequence, or a string-keyed map.
//!
//! Shapes are declared once, shared via [`Arc`], and never mutated after
//! construction. They replace any reliance on runtime reflection: what a
//! field means is exactly what its [`FieldDef`] says, nothing is inferred
//! from the value stored in it.
//!
//! ## Declaring a shape
//!
//! ```rust
//! use blockform::{Kind, Shape};
//!
//! let service = Shape::block("service")
//!     .with_label("name")
//!     .with_attr_kind("executable", Kind::Seq);
//!
//! let app = Shape::document("app")
//!     .with_attr("name")
//!     .with_block("service", Kind::Seq)
//!     .with_block("meta", Kind::Map);
//! ```
//!
//! ## Shapes as data
//!
//! All schema types derive `Serialize`/`Deserialize`, so shapes can be kept
//! in configuration files themselves:
//!
//! ```rust
//! use blockform::Shape;
//!
//! let json = r#"{
//!     "name": "service",
//!     "block": true,
//!     "fields": [
//!         { "name": "name", "role": "label" },
//!         { "name": "executable", "role": "attr", "kind": "seq" }
//!     ]
//! }"#;
//! let shape: Shape = serde_json::from_str(json).unwrap();
//! assert_eq!(shape.fields().len(), 2);
//! ```

use crate::classify::{classify, FieldSpec};
use crate::Result;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The role a field plays in the emitted configuration text.
///
/// Roles are declared, never guessed: a map of records emits as labeled
/// blocks only because its field says [`Role::Block`], not because of what
/// the runtime value happens to contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A positional string qualifier on the enclosing block's header.
    /// Only legal on shapes constructed with [`Shape::block`].
    Label,
    /// A leaf `name = value` assignment in the body.
    Attr,
    /// A nested block (or sequence/map of nested blocks).
    Block,
}

/// How many child values a field holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Exactly one value, possibly absent.
    #[default]
    Single,
    /// An ordered sequence of values, emitted in source order.
    Seq,
    /// A string-keyed map of values, emitted in ascending key order.
    Map,
}

/// One declared field of a [`Shape`].
///
/// A field with no role and no skip marker is a schema error; classification
/// refuses to guess what an unannotated field should become.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub kind: Kind,
    #[serde(default)]
    pub skip: bool,
}

/// A named record shape: an ordered set of field declarations plus a flag
/// saying whether the shape may be emitted as a labeled block.
///
/// Construction follows the builder pattern; every `with_*` method appends a
/// field in declaration order, and emission order follows declaration order.
///
/// # Examples
///
/// ```rust
/// use blockform::{Kind, Shape};
///
/// let shape = Shape::block("constraints")
///     .with_attr("os")
///     .with_attr("arch");
/// assert_eq!(shape.name(), "constraints");
/// assert!(shape.is_block());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Shape {
    name: String,
    block: bool,
    fields: Vec<FieldDef>,
    #[serde(skip)]
    specs: OnceCell<Vec<FieldSpec>>,
}

// Equality is over the declaration, not the classification cache.
impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.block == other.block && self.fields == other.fields
    }
}

impl Shape {
    /// Creates a shape for a top-level document body. Label fields are
    /// illegal on document shapes.
    #[must_use]
    pub fn document(name: &str) -> Self {
        Shape {
            name: name.to_string(),
            block: false,
            fields: Vec::new(),
            specs: OnceCell::new(),
        }
    }

    /// Creates a shape that may be emitted as a block, and may therefore
    /// declare label fields.
    #[must_use]
    pub fn block(name: &str) -> Self {
        Shape {
            block: true,
            ..Shape::document(name)
        }
    }

    /// Appends a label field. Labels are positional string qualifiers on the
    /// block header, consumed in declaration order.
    #[must_use]
    pub fn with_label(self, name: &str) -> Self {
        self.with_field(name, Some(Role::Label), Kind::Single)
    }

    /// Appends a single-valued attribute field.
    #[must_use]
    pub fn with_attr(self, name: &str) -> Self {
        self.with_field(name, Some(Role::Attr), Kind::Single)
    }

    /// Appends an attribute field holding a sequence or map of
    /// literal-convertible values.
    #[must_use]
    pub fn with_attr_kind(self, name: &str, kind: Kind) -> Self {
        self.with_field(name, Some(Role::Attr), kind)
    }

    /// Appends a nested-block field. `kind` selects between one optional
    /// child block, an ordered run of them, or a key-labeled map of them.
    #[must_use]
    pub fn with_block(self, name: &str, kind: Kind) -> Self {
        self.with_field(name, Some(Role::Block), kind)
    }

    /// Appends a field that is declared but never emitted.
    #[must_use]
    pub fn with_skipped(self, name: &str) -> Self {
        let mut shape = self;
        shape.fields.push(FieldDef {
            name: name.to_string(),
            role: None,
            kind: Kind::Single,
            skip: true,
        });
        shape
    }

    fn with_field(mut self, name: &str, role: Option<Role>, kind: Kind) -> Self {
        self.fields.push(FieldDef {
            name: name.to_string(),
            role,
            kind,
            skip: false,
        });
        self
    }

    /// Wraps this shape for sharing between records and threads.
    #[must_use]
    pub fn shared(self) -> Arc<Shape> {
        Arc::new(self)
    }

    /// Returns the shape's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if this shape may be emitted as a labeled block.
    #[inline]
    #[must_use]
    pub fn is_block(&self) -> bool {
        self.block
    }

    /// Returns the raw field declarations in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Returns `true` if the shape declares a non-skipped field with this
    /// configuration name.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.fields.iter().any(|f| !f.skip && f.name == name)
    }

    /// Classifies this shape's fields, validating the metadata and caching
    /// the result.
    ///
    /// The cache is write-once/read-many: the first successful
    /// classification is stored and reused by every later encode over the
    /// same shape, including concurrent ones. A failed classification is not
    /// cached; it re-derives the same error on each call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Schema`](crate::Error::Schema) when a non-skipped
    /// field has no role, a label is declared on a document shape or with a
    /// non-single kind, or two fields share a configuration name.
    pub fn field_specs(&self) -> Result<&[FieldSpec]> {
        self.specs
            .get_or_try_init(|| classify(self))
            .map(Vec::as_slice)
    }
}
