//! The block encoder: walking a record and emitting its body.
//!
//! Two entry points cover the two ways a record lands in output:
//!
//! - [`encode_as_block`] wraps the record in a single [`Block`] with the
//!   given type name, taking labels from the record's label fields;
//! - [`encode_into_body`] appends the record's attributes and child blocks
//!   directly onto an existing [`Body`], with no enclosing wrapper.
//!
//! Both walk fields the same way: attribute fields first, in declaration
//! order, then block fields, in declaration order. A block field holding a
//! map emits one labeled block per entry in ascending key order, so output
//! never depends on the source map's iteration order.
//!
//! Encoding is all-or-nothing: any failure aborts the encode of the
//! enclosing block and nothing reaches the caller's body.

use crate::body::{Block, Body};
use crate::classify::FieldSpec;
use crate::literal::Literal;
use crate::schema::{Kind, Role};
use crate::value::{Record, Value};
use crate::{Error, Result};

/// Encodes a record as a single block of type `block_type`.
///
/// Labels come from the record's label fields in declaration order,
/// rendered to their string form. The body holds the record's attribute
/// entries followed by its child blocks.
///
/// # Examples
///
/// ```rust
/// use blockform::{encode_as_block, Record, Shape};
///
/// let shape = Shape::block("service")
///     .with_label("name")
///     .with_attr("port")
///     .shared();
/// let mut svc = Record::new(shape);
/// svc.set("name", "web").unwrap();
/// svc.set("port", 8080i64).unwrap();
///
/// let block = encode_as_block(&svc, "service").unwrap();
/// assert_eq!(block.labels, vec!["web"]);
/// assert_eq!(block.body.len(), 1);
/// ```
///
/// # Errors
///
/// Fails with a schema error if the record's shape does not classify, and
/// with an encode error if a label value is missing or a block-role field
/// holds a value that is not a record (or collection/map of records).
pub fn encode_as_block(record: &Record, block_type: &str) -> Result<Block> {
    let specs = record.shape().field_specs()?;

    let mut labels = Vec::new();
    for spec in specs.iter().filter(|s| s.role == Role::Label) {
        let value = record.get(&spec.name).ok_or_else(|| {
            Error::encode(&spec.name, "a label value", "an unset field")
        })?;
        labels.push(label_string(&spec.name, value)?);
    }

    let mut body = Body::new();
    encode_fields(record, specs, &mut body)?;
    Ok(Block::new(block_type, labels, body))
}

/// Encodes a record's attributes and child blocks into an existing body.
///
/// Label fields produce no entries here; only [`encode_as_block`] consumes
/// them. Entries are staged and appended in one step, so on error the
/// caller's body is untouched.
///
/// # Examples
///
/// ```rust
/// use blockform::{encode_into_body, Body, Record, Shape};
///
/// let shape = Shape::document("app").with_attr("name").shared();
/// let mut app = Record::new(shape);
/// app.set("name", "awesome-app").unwrap();
///
/// let mut body = Body::new();
/// encode_into_body(&app, &mut body).unwrap();
/// assert_eq!(body.len(), 1);
/// ```
///
/// # Errors
///
/// Same failure modes as [`encode_as_block`], minus the label handling.
pub fn encode_into_body(record: &Record, body: &mut Body) -> Result<()> {
    let specs = record.shape().field_specs()?;
    let mut staged = Body::new();
    encode_fields(record, specs, &mut staged)?;
    body.append(staged);
    Ok(())
}

/// The shared field walk: attributes first, then blocks, each group in
/// declaration order.
fn encode_fields(record: &Record, specs: &[FieldSpec], body: &mut Body) -> Result<()> {
    for spec in specs.iter().filter(|s| s.role == Role::Attr) {
        match record.get(&spec.name) {
            None | Some(Value::Null) => continue,
            Some(value) => {
                let literal = Literal::from_value(value)
                    .map_err(|e| Error::attribute(&spec.name, e))?;
                body.push_attribute(&spec.name, literal);
            }
        }
    }

    for spec in specs.iter().filter(|s| s.role == Role::Block) {
        let Some(value) = record.get(&spec.name) else {
            continue;
        };
        encode_block_field(spec, value, body)?;
    }

    Ok(())
}

/// Emits zero or more child blocks for one block-role field.
fn encode_block_field(spec: &FieldSpec, value: &Value, body: &mut Body) -> Result<()> {
    match (spec.kind, value) {
        (_, Value::Null) => Ok(()),
        (Kind::Single, Value::Record(child)) => {
            body.push_block(encode_as_block(child, &spec.name)?);
            Ok(())
        }
        (Kind::Seq, Value::Seq(items)) => {
            for item in items {
                let child = item.as_record().ok_or_else(|| {
                    Error::encode(&spec.name, "a sequence of records", item.kind_name())
                })?;
                body.push_block(encode_as_block(child, &spec.name)?);
            }
            Ok(())
        }
        (Kind::Map, Value::Map(entries)) => {
            let mut pairs: Vec<(&String, &Value)> = entries.iter().collect();
            pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
            for (key, item) in pairs {
                let child = item.as_record().ok_or_else(|| {
                    Error::encode(&spec.name, "a map of records", item.kind_name())
                })?;
                let child_specs = child.shape().field_specs()?;
                let mut child_body = Body::new();
                encode_fields(child, child_specs, &mut child_body)?;
                body.push_block(Block::new(&spec.name, vec![key.clone()], child_body));
            }
            Ok(())
        }
        (Kind::Single, other) => Err(Error::encode(&spec.name, "a record", other.kind_name())),
        (Kind::Seq, other) => Err(Error::encode(
            &spec.name,
            "a sequence of records",
            other.kind_name(),
        )),
        (Kind::Map, other) => Err(Error::encode(
            &spec.name,
            "a map of records",
            other.kind_name(),
        )),
    }
}

/// Renders a label value to its string form. Strings pass through; numbers
/// and booleans use their display form; anything else is a mismatch.
fn label_string(field: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::encode(field, "a label value", other.kind_name())),
    }
}
