//! Field classification: turning declared metadata into an emission plan.
//!
//! Classification partitions a shape's fields into labels, attributes, and
//! blocks, and validates that the declarations are self-consistent before
//! any value traversal begins. It is a pure function of the shape; results
//! are cached per shape via [`Shape::field_specs`].

use crate::schema::{Kind, Role, Shape};
use crate::{Error, Result};

/// One validated, emission-ready field of a shape.
///
/// `FieldSpec` is the skip-filtered view of a [`FieldDef`]: every spec has a
/// definite role, and the sequence preserves declaration order.
///
/// [`FieldDef`]: crate::FieldDef
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub role: Role,
    pub kind: Kind,
}

/// Validates a shape's field metadata and produces its ordered [`FieldSpec`]
/// sequence.
///
/// Checks, in declaration order:
/// - every non-skipped field carries a role;
/// - label fields appear only on block-capable shapes, and only with
///   [`Kind::Single`];
/// - no two fields share a configuration-visible name.
///
/// Skipped fields produce no spec and reserve no name.
///
/// # Errors
///
/// Returns [`Error::Schema`] naming the shape and the first offending field.
pub(crate) fn classify(shape: &Shape) -> Result<Vec<FieldSpec>> {
    let mut specs = Vec::with_capacity(shape.fields().len());
    let mut seen: Vec<&str> = Vec::with_capacity(shape.fields().len());

    for field in shape.fields() {
        if field.skip {
            continue;
        }

        let role = field.role.ok_or_else(|| {
            Error::schema(
                shape.name(),
                &field.name,
                "has no declared role and no skip marker",
            )
        })?;

        if role == Role::Label {
            if !shape.is_block() {
                return Err(Error::schema(
                    shape.name(),
                    &field.name,
                    "declares a label, but the shape cannot be emitted as a block",
                ));
            }
            if field.kind != Kind::Single {
                return Err(Error::schema(
                    shape.name(),
                    &field.name,
                    "declares a label with a sequence or map kind; labels are single values",
                ));
            }
        }

        if seen.contains(&field.name.as_str()) {
            return Err(Error::schema(
                shape.name(),
                &field.name,
                "collides with another field's configuration name",
            ));
        }
        seen.push(&field.name);

        specs.push(FieldSpec {
            name: field.name.clone(),
            role,
            kind: field.kind,
        });
    }

    Ok(specs)
}
