//! Parsed document tree.
//!
//! [`Node`] is the structural unit handed to the flattener. It is built once
//! by the parser glue in [`crate::parser`] and never mutated afterwards.

/// A parsed structural unit of a YAML document.
///
/// Mappings are kept as a list of pairs rather than a map type: the input
/// may repeat a key, and the flattener processes pairs strictly in
/// encounter order. Nothing in this crate ever looks a key up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An empty value: a key written with no value, or an explicit
    /// `~`/`null` scalar.
    Null,
    /// A scalar, carried as the literal string from the document. Type
    /// conversion is the consumer's job.
    Scalar(String),
    /// An ordered sequence of nodes.
    Sequence(Vec<Node>),
    /// An ordered list of key/value pairs. Keys may repeat.
    Mapping(Vec<(String, Node)>),
    /// A node the parser could not resolve (an alias to an unknown
    /// anchor). Flattens to nothing.
    Undefined,
}

impl Node {
    /// The kind of this node, as a short name for log output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Scalar(_) => "scalar",
            Node::Sequence(_) => "sequence",
            Node::Mapping(_) => "mapping",
            Node::Undefined => "undefined",
        }
    }

    /// The scalar content, if this is a scalar node.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// True if this node is a mapping.
    ///
    /// The flattener brackets nested mappings, and only mappings, with
    /// section markers.
    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }
}
