//! # blockform
//!
//! A schema-driven encoder for block-structured configuration text.
//!
//! ## What does it produce?
//!
//! Configuration source in the familiar attributes-and-blocks style: leaf
//! values as `name = value` assignments, nested structure as named blocks
//! with optional quoted labels:
//!
//! ```text
//! name = "awesome-app"
//!
//! service "web" {
//!   executable = ["./web", "--listen=:8080"]
//! }
//! ```
//!
//! ## Key Properties
//!
//! - **Explicit schemas**: every record carries a [`Shape`] declaring each
//!   field's name, role (label, attribute, or block), and collection kind;
//!   nothing is inferred from runtime values
//! - **Deterministic**: attributes render before blocks at every level,
//!   sequences keep their order, maps are emitted in ascending key order,
//!   and encoding the same value twice yields byte-identical text
//! - **All-or-nothing**: a failed encode never leaves partial output in a
//!   caller-supplied body
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use blockform::{to_string, Kind, Record, Shape, Value};
//!
//! let service = Shape::block("service")
//!     .with_label("name")
//!     .with_attr_kind("executable", Kind::Seq)
//!     .shared();
//!
//! let app = Shape::document("app")
//!     .with_attr("name")
//!     .with_block("service", Kind::Seq)
//!     .shared();
//!
//! let mut web = Record::new(service.clone());
//! web.set("name", "web").unwrap();
//! web.set("executable", Value::seq(["./web", "--listen=:8080"])).unwrap();
//!
//! let mut root = Record::new(app);
//! root.set("name", "awesome-app").unwrap();
//! root.set("service", Value::seq([Value::from(web)])).unwrap();
//!
//! let text = to_string(&root).unwrap();
//! assert!(text.starts_with("name = \"awesome-app\"\n"));
//! ```
//!
//! ## Encoding as a named block
//!
//! [`encode_as_block`] wraps a record in a single block, taking labels from
//! the record's label fields; [`encode_into_body`] merges a record's entries
//! into an existing [`Body`] instead:
//!
//! ```rust
//! use blockform::{encode_as_block, Record, Shape};
//!
//! let shape = Shape::block("service").with_label("name").shared();
//! let mut svc = Record::new(shape);
//! svc.set("name", "worker").unwrap();
//!
//! let block = encode_as_block(&svc, "service").unwrap();
//! assert_eq!(block.labels, vec!["worker"]);
//! ```
//!
//! ## Two-stage pipeline
//!
//! Encoding and rendering are separate: the encoder produces a [`Body`] tree
//! (attributes and child blocks), and [`Renderer`] turns that tree into
//! text. Callers that post-process the structure can stop after the first
//! stage; [`to_string`] and friends run both.
//!
//! ## Concurrency
//!
//! Encoding is synchronous and pure over its inputs. Shapes are shared via
//! `Arc` and carry a write-once classification cache, so concurrent encodes
//! over the same shapes need no coordination.

pub mod body;
pub mod classify;
pub mod encode;
pub mod error;
pub mod literal;
pub mod options;
pub mod schema;
pub mod value;
pub mod write;

pub use body::{Attribute, Block, Body, Entry};
pub use classify::FieldSpec;
pub use encode::{encode_as_block, encode_into_body};
pub use error::{Error, Result};
pub use literal::Literal;
pub use options::FormatOptions;
pub use schema::{FieldDef, Kind, Role, Shape};
pub use value::{Number, Record, Value};
pub use write::Renderer;

use std::io;

/// Encodes a record and renders its body with default formatting.
///
/// Equivalent to [`encode_into_body`] into a fresh body followed by
/// rendering. The record's shape is treated as a document body; its label
/// fields, if any, produce no output here.
///
/// # Examples
///
/// ```rust
/// use blockform::{to_string, Record, Shape};
///
/// let shape = Shape::document("app").with_attr("name").shared();
/// let mut app = Record::new(shape);
/// app.set("name", "awesome-app").unwrap();
///
/// assert_eq!(to_string(&app).unwrap(), "name = \"awesome-app\"\n");
/// ```
///
/// # Errors
///
/// Returns an error if classification or encoding fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(record: &Record) -> Result<String> {
    to_string_with_options(record, FormatOptions::default())
}

/// Encodes a record and renders its body with custom formatting options.
///
/// # Errors
///
/// Returns an error if classification or encoding fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(record: &Record, options: FormatOptions) -> Result<String> {
    let mut body = Body::new();
    encode_into_body(record, &mut body)?;
    let mut renderer = Renderer::new(options);
    renderer.render_body(&body);
    Ok(renderer.into_inner())
}

/// Encodes a record and writes the rendered text to a writer.
///
/// # Examples
///
/// ```rust
/// use blockform::{to_writer, Record, Shape};
///
/// let shape = Shape::document("app").with_attr("name").shared();
/// let mut app = Record::new(shape);
/// app.set("name", "awesome-app").unwrap();
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &app).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or the write fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, record: &Record) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, record, FormatOptions::default())
}

/// Encodes a record and writes the rendered text to a writer with custom
/// formatting options.
///
/// # Errors
///
/// Returns an error if encoding fails or the write fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(
    mut writer: W,
    record: &Record,
    options: FormatOptions,
) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(record, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Renders an already-encoded block with the given formatting options.
///
/// Convenience for callers holding an [`encode_as_block`] artifact rather
/// than a record.
#[must_use]
pub fn block_to_string(block: &Block, options: FormatOptions) -> String {
    let mut renderer = Renderer::new(options);
    renderer.render_block(block);
    renderer.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_shape() -> std::sync::Arc<Shape> {
        Shape::document("app")
            .with_attr("name")
            .with_block("constraints", Kind::Single)
            .shared()
    }

    #[test]
    fn test_to_string_renders_attributes() {
        let mut app = Record::new(app_shape());
        app.set("name", "awesome-app").unwrap();
        assert_eq!(to_string(&app).unwrap(), "name = \"awesome-app\"\n");
    }

    #[test]
    fn test_to_string_skips_absent_block() {
        let mut app = Record::new(app_shape());
        app.set("name", "x").unwrap();
        let text = to_string(&app).unwrap();
        assert!(!text.contains("constraints"));
    }

    #[test]
    fn test_to_writer_matches_to_string() {
        let mut app = Record::new(app_shape());
        app.set("name", "x").unwrap();

        let mut buffer = Vec::new();
        to_writer(&mut buffer, &app).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), to_string(&app).unwrap());
    }

    #[test]
    fn test_block_to_string() {
        let shape = Shape::block("service").with_label("name").shared();
        let mut svc = Record::new(shape);
        svc.set("name", "web").unwrap();

        let block = encode_as_block(&svc, "service").unwrap();
        assert_eq!(
            block_to_string(&block, FormatOptions::new()),
            "service \"web\" {\n}\n"
        );
    }
}
