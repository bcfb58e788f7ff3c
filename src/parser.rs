//! Glue around the external YAML parser.
//!
//! `yaml-rust2` owns the document syntax; this module only drives its event
//! stream and materializes the first document into a [`Node`] tree. Keeping
//! our own tree (instead of the parser's ready-made value type) is what
//! preserves repeated mapping keys in encounter order.

use std::collections::HashMap;

use tracing::trace;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

use crate::error::Error;
use crate::node::Node;

/// Parse the first document of a YAML stream into a [`Node`].
///
/// An empty stream yields [`Node::Null`], like an empty file. Documents
/// after the first are ignored. Syntax errors from the external parser are
/// propagated as [`Error::Parse`].
pub fn parse_str(text: &str) -> Result<Node, Error> {
    let mut builder = NodeBuilder::default();
    Parser::new(text.chars())
        .load(&mut builder, false)
        .map_err(|e| Error::parse(e.to_string()))?;
    builder.finish()
}

/// Plain-scalar spellings that denote null. A quoted `"null"` stays a
/// string scalar.
fn is_null_scalar(value: &str) -> bool {
    matches!(value, "" | "~" | "null" | "Null" | "NULL")
}

/// A container currently under construction.
enum Frame {
    Sequence {
        anchor: usize,
        items: Vec<Node>,
    },
    Mapping {
        anchor: usize,
        pairs: Vec<(String, Node)>,
        pending_key: Option<String>,
    },
}

#[derive(Default)]
struct NodeBuilder {
    root: Option<Node>,
    stack: Vec<Frame>,
    anchors: HashMap<usize, Node>,
    error: Option<String>,
}

impl NodeBuilder {
    fn finish(self) -> Result<Node, Error> {
        if let Some(message) = self.error {
            return Err(Error::parse(message));
        }
        Ok(self.root.unwrap_or(Node::Null))
    }

    fn record_anchor(&mut self, anchor: usize, node: &Node) {
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }
    }

    fn insert(&mut self, node: Node, mark: Marker) {
        match self.stack.last_mut() {
            None => {
                // Only the first document of the stream is kept.
                if self.root.is_none() {
                    trace!(kind = node.kind_name(), "document root");
                    self.root = Some(node);
                }
            }
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping {
                pairs, pending_key, ..
            }) => match pending_key.take() {
                Some(key) => pairs.push((key, node)),
                None => match node {
                    Node::Scalar(key) => *pending_key = Some(key),
                    other => {
                        if self.error.is_none() {
                            self.error = Some(format!(
                                "mapping key at line {} column {} is a {}, not a scalar",
                                mark.line(),
                                mark.col() + 1,
                                other.kind_name(),
                            ));
                        }
                    }
                },
            },
        }
    }
}

impl MarkedEventReceiver for NodeBuilder {
    fn on_event(&mut self, ev: Event, mark: Marker) {
        match ev {
            Event::Scalar(value, style, anchor, ..) => {
                let node = if matches!(style, TScalarStyle::Plain) && is_null_scalar(&value) {
                    Node::Null
                } else {
                    Node::Scalar(value)
                };
                self.record_anchor(anchor, &node);
                self.insert(node, mark);
            }
            Event::SequenceStart(anchor, ..) => {
                self.stack.push(Frame::Sequence {
                    anchor,
                    items: Vec::new(),
                });
            }
            Event::SequenceEnd => {
                if let Some(Frame::Sequence { anchor, items }) = self.stack.pop() {
                    let node = Node::Sequence(items);
                    self.record_anchor(anchor, &node);
                    self.insert(node, mark);
                }
            }
            Event::MappingStart(anchor, ..) => {
                self.stack.push(Frame::Mapping {
                    anchor,
                    pairs: Vec::new(),
                    pending_key: None,
                });
            }
            Event::MappingEnd => {
                if let Some(Frame::Mapping { anchor, pairs, .. }) = self.stack.pop() {
                    let node = Node::Mapping(pairs);
                    self.record_anchor(anchor, &node);
                    self.insert(node, mark);
                }
            }
            Event::Alias(anchor) => {
                // An alias the parser could not tie to an anchor in this
                // document materializes as Undefined, which flattens to
                // nothing.
                let node = self
                    .anchors
                    .get(&anchor)
                    .cloned()
                    .unwrap_or(Node::Undefined);
                self.insert(node, mark);
            }
            _ => {}
        }
    }
}
