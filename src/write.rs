//! Text rendering: turning an encoded body into configuration source.
//!
//! The renderer walks a [`Body`] and produces deterministic text: one
//! `name = value` line per attribute, then each child block with its quoted
//! labels and braced body. Because the body tree already carries the
//! attribute-before-block ordering, rendering is a straight traversal with
//! no reordering of its own.
//!
//! ```rust
//! use blockform::{FormatOptions, Record, Renderer, Shape};
//! use blockform::encode_as_block;
//!
//! let shape = Shape::block("service").with_label("name").shared();
//! let mut svc = Record::new(shape);
//! svc.set("name", "web").unwrap();
//!
//! let block = encode_as_block(&svc, "service").unwrap();
//! let mut renderer = Renderer::new(FormatOptions::new());
//! renderer.render_block(&block);
//! assert_eq!(renderer.into_inner(), "service \"web\" {\n}\n");
//! ```

use crate::body::{Block, Body, Entry};
use crate::literal::Literal;
use crate::options::FormatOptions;
use crate::value::Number;

/// Renders body trees to configuration text.
///
/// A renderer owns its output buffer; render one or more artifacts into it,
/// then take the text with [`Renderer::into_inner`].
pub struct Renderer {
    output: String,
    options: FormatOptions,
    indent_level: usize,
}

impl Renderer {
    #[must_use]
    pub fn new(options: FormatOptions) -> Self {
        // Typical configuration bodies fit well under this.
        Renderer {
            output: String::with_capacity(256),
            options,
            indent_level: 0,
        }
    }

    /// Consumes the renderer, returning the rendered text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Renders every entry of a body at the current indent level.
    pub fn render_body(&mut self, body: &Body) {
        let mut previous_block: Option<&str> = None;
        for (i, entry) in body.iter().enumerate() {
            let block_type = match entry {
                Entry::Block(block) => Some(block.block_type.as_str()),
                Entry::Attribute(_) => None,
            };
            // A blank line separates a block from anything around it at the
            // same level, except within a run of blocks of the same type
            // (repeated sequence or map entries stay together).
            let same_run = block_type.is_some() && block_type == previous_block;
            if i > 0
                && (block_type.is_some() || previous_block.is_some())
                && !same_run
                && !self.options.compact
            {
                self.output.push('\n');
            }
            match entry {
                Entry::Attribute(attr) => {
                    self.write_indent();
                    self.output.push_str(&attr.name);
                    self.output.push_str(" = ");
                    self.write_literal(&attr.value);
                    self.output.push('\n');
                }
                Entry::Block(block) => self.render_block(block),
            }
            previous_block = block_type;
        }
    }

    /// Renders one block: header line, body at one deeper indent, closer.
    pub fn render_block(&mut self, block: &Block) {
        self.write_indent();
        self.output.push_str(&block.block_type);
        for label in &block.labels {
            self.output.push(' ');
            self.write_quoted(label);
        }
        self.output.push_str(" {\n");

        self.indent_level += 1;
        self.render_body(&block.body);
        self.indent_level -= 1;

        self.write_indent();
        self.output.push_str("}\n");
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level * self.options.indent {
            self.output.push(' ');
        }
    }

    fn write_literal(&mut self, literal: &Literal) {
        match literal {
            Literal::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Literal::Number(Number::Integer(i)) => self.output.push_str(&i.to_string()),
            Literal::Number(Number::Float(f)) => self.output.push_str(&f.to_string()),
            Literal::String(s) => self.write_quoted(s),
            Literal::Seq(items) => {
                self.output.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.write_literal(item);
                }
                self.output.push(']');
            }
            Literal::Object(entries) => {
                if entries.is_empty() {
                    self.output.push_str("{}");
                    return;
                }
                self.output.push_str("{ ");
                for (i, (key, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    if is_identifier(key) {
                        self.output.push_str(key);
                    } else {
                        self.write_quoted(key);
                    }
                    self.output.push_str(" = ");
                    self.write_literal(item);
                }
                self.output.push_str(" }");
            }
        }
    }

    fn write_quoted(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                _ => self.output.push(ch),
            }
        }
        self.output.push('"');
    }
}

/// Returns `true` if a key can be written bare, without quotes.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Block;

    fn render(body: &Body) -> String {
        let mut renderer = Renderer::new(FormatOptions::new());
        renderer.render_body(body);
        renderer.into_inner()
    }

    #[test]
    fn test_attribute_line() {
        let mut body = Body::new();
        body.push_attribute("name", Literal::String("awesome-app".to_string()));
        assert_eq!(render(&body), "name = \"awesome-app\"\n");
    }

    #[test]
    fn test_string_escaping() {
        let mut body = Body::new();
        body.push_attribute("motd", Literal::String("say \"hi\"\n".to_string()));
        assert_eq!(render(&body), "motd = \"say \\\"hi\\\"\\n\"\n");
    }

    #[test]
    fn test_seq_literal() {
        let mut body = Body::new();
        body.push_attribute(
            "executable",
            Literal::Seq(vec![
                Literal::String("./web".to_string()),
                Literal::String("--listen=:8080".to_string()),
            ]),
        );
        assert_eq!(
            render(&body),
            "executable = [\"./web\", \"--listen=:8080\"]\n"
        );
    }

    #[test]
    fn test_empty_composites() {
        let mut body = Body::new();
        body.push_attribute("tags", Literal::Seq(Vec::new()));
        body.push_attribute("extra", Literal::Object(Vec::new()));
        assert_eq!(render(&body), "tags = []\nextra = {}\n");
    }

    #[test]
    fn test_object_literal_quoting() {
        let mut body = Body::new();
        body.push_attribute(
            "config",
            Literal::Object(vec![
                ("args".to_string(), Literal::Seq(vec![Literal::String("1".to_string())])),
                ("bin/sh".to_string(), Literal::Bool(true)),
            ]),
        );
        assert_eq!(
            render(&body),
            "config = { args = [\"1\"], \"bin/sh\" = true }\n"
        );
    }

    #[test]
    fn test_nested_block_indentation() {
        let mut inner = Body::new();
        inner.push_attribute("os", Literal::String("linux".to_string()));
        let mut body = Body::new();
        body.push_block(Block::new("constraints", Vec::new(), inner));

        assert_eq!(render(&body), "constraints {\n  os = \"linux\"\n}\n");
    }

    #[test]
    fn test_blank_line_between_distinct_blocks() {
        let mut body = Body::new();
        body.push_attribute("name", Literal::String("x".to_string()));
        body.push_block(Block::new("a", Vec::new(), Body::new()));
        body.push_block(Block::new("b", Vec::new(), Body::new()));

        assert_eq!(render(&body), "name = \"x\"\n\na {\n}\n\nb {\n}\n");
    }

    #[test]
    fn test_same_type_block_run_stays_together() {
        let mut body = Body::new();
        body.push_block(Block::new("service", vec!["web".to_string()], Body::new()));
        body.push_block(Block::new("service", vec!["worker".to_string()], Body::new()));
        body.push_block(Block::new("meta", vec!["hello".to_string()], Body::new()));

        assert_eq!(
            render(&body),
            "service \"web\" {\n}\nservice \"worker\" {\n}\n\nmeta \"hello\" {\n}\n"
        );
    }

    #[test]
    fn test_compact_drops_separators() {
        let mut body = Body::new();
        body.push_attribute("name", Literal::String("x".to_string()));
        body.push_block(Block::new("a", Vec::new(), Body::new()));
        body.push_block(Block::new("b", Vec::new(), Body::new()));

        let mut renderer = Renderer::new(FormatOptions::compact());
        renderer.render_body(&body);
        assert_eq!(renderer.into_inner(), "name = \"x\"\na {\n}\nb {\n}\n");
    }

    #[test]
    fn test_labels_quoted_in_header() {
        let block = Block::new(
            "service",
            vec!["web".to_string(), "eu-west".to_string()],
            Body::new(),
        );
        let mut renderer = Renderer::new(FormatOptions::new());
        renderer.render_block(&block);
        assert_eq!(renderer.into_inner(), "service \"web\" \"eu-west\" {\n}\n");
    }
}
