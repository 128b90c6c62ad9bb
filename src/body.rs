//! The output artifact: bodies, attributes, and blocks.
//!
//! A [`Body`] is an ordered sequence of entries, each either an attribute
//! assignment or a nested block. Bodies are built bottom-up: a child block's
//! body is complete before the block is appended to its parent, and no body
//! is mutated after attachment.
//!
//! Within a body derived from one record, attribute entries always precede
//! block entries; the encoder enforces this, the container just preserves
//! whatever order entries were pushed in.

use crate::literal::Literal;

/// One entry of a [`Body`].
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    Attribute(Attribute),
    Block(Block),
}

/// A single `name = value` assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: Literal,
}

/// A named, optionally labeled nested configuration unit.
///
/// # Examples
///
/// ```rust
/// use blockform::{Block, Body};
///
/// let block = Block::new("service", vec!["web".to_string()], Body::new());
/// assert_eq!(block.block_type, "service");
/// assert_eq!(block.labels, vec!["web"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub block_type: String,
    pub labels: Vec<String>,
    pub body: Body,
}

impl Block {
    /// Creates a block from its header parts and an already-built body.
    #[must_use]
    pub fn new(block_type: &str, labels: Vec<String>, body: Body) -> Self {
        Block {
            block_type: block_type.to_string(),
            labels,
            body,
        }
    }
}

/// An ordered sequence of attributes and nested blocks.
///
/// # Examples
///
/// ```rust
/// use blockform::{Body, Literal};
///
/// let mut body = Body::new();
/// body.push_attribute("name", Literal::String("awesome-app".to_string()));
/// assert_eq!(body.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Body {
    entries: Vec<Entry>,
}

impl Body {
    /// Creates an empty body.
    #[must_use]
    pub fn new() -> Self {
        Body {
            entries: Vec::new(),
        }
    }

    /// Appends an attribute entry.
    pub fn push_attribute(&mut self, name: &str, value: Literal) {
        self.entries.push(Entry::Attribute(Attribute {
            name: name.to_string(),
            value,
        }));
    }

    /// Appends a fully-built child block.
    pub fn push_block(&mut self, block: Block) {
        self.entries.push(Entry::Block(block));
    }

    /// Moves every entry of `other` onto the end of this body.
    ///
    /// The encoder stages entries in a scratch body and appends them in one
    /// step, so a failed encode never leaves a caller-supplied body
    /// half-populated.
    pub fn append(&mut self, other: Body) {
        self.entries.extend(other.entries);
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the body has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a Body {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut body = Body::new();
        body.push_attribute("first", Literal::Bool(true));
        body.push_block(Block::new("second", Vec::new(), Body::new()));
        body.push_attribute("third", Literal::Bool(false));

        let kinds: Vec<_> = body
            .iter()
            .map(|e| match e {
                Entry::Attribute(a) => a.name.clone(),
                Entry::Block(b) => b.block_type.clone(),
            })
            .collect();
        assert_eq!(kinds, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_body() {
        let body = Body::new();
        assert!(body.is_empty());
        assert_eq!(body.len(), 0);
    }
}
