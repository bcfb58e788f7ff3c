//! The flattener: turn a [`Node`] tree into an ordered entry list.
//!
//! This is the core of the crate. The traversal is a pure recursive
//! function over an immutable tree; output order exactly mirrors the
//! encounter order of mapping keys in the document, and nested mappings
//! (only mappings) are bracketed with section markers so the consumer can
//! track scope without walking a tree itself.

use indexmap::IndexMap;
use tracing::trace;

use crate::config_entry::{ConfigEntry, EntryKind, Path};
use crate::node::Node;

/// Flatten a document tree into an ordered list of [`ConfigEntry`].
///
/// Total over any tree the parser produces: no error conditions, no
/// mutation of the input. Duplicate keys are preserved as separate entries
/// in encounter order; see [`aggregate`] for the explicit merge pass.
pub fn flatten(node: &Node) -> Vec<ConfigEntry> {
    let mut entries = Vec::new();
    flatten_into(node, Path::new(), &mut entries);
    entries
}

fn flatten_into(node: &Node, parents: Path, out: &mut Vec<ConfigEntry>) {
    trace!(kind = node.kind_name(), depth = parents.len(), "flatten");
    match node {
        // A key written with no value is a boolean-true flag. The entry
        // represents the owning key itself: its name is the last path
        // segment, and that segment moves out of the parents chain.
        Node::Null => {
            let (parents, name) = split_owner(parents);
            out.push(ConfigEntry::assignment(
                parents,
                name,
                vec!["true".to_string()],
            ));
        }

        // A bare scalar carries nothing outside a keyed context; scalars
        // only reach the output as mapping values or sequence elements.
        Node::Scalar(_) => {}

        // The whole sequence becomes the value list of its owning key.
        // Composite elements are unsupported and contribute nothing.
        Node::Sequence(items) => {
            let values: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Node::Scalar(s) => Some(s.clone()),
                    other => {
                        trace!(
                            kind = other.kind_name(),
                            "skipping non-scalar sequence element"
                        );
                        None
                    }
                })
                .collect();
            let (parents, name) = split_owner(parents);
            out.push(ConfigEntry::assignment(parents, name, values));
        }

        Node::Mapping(pairs) => {
            for (key, value) in pairs {
                match value {
                    Node::Scalar(s) => out.push(ConfigEntry::assignment(
                        parents.clone(),
                        key.clone(),
                        vec![s.clone()],
                    )),
                    value => {
                        let mut child = parents.clone();
                        child.push(key.clone());
                        // Markers bracket nested mappings only; a bare
                        // sequence or null under a key produces its own
                        // single entry with no markers.
                        let section = value.is_mapping();
                        if section {
                            out.push(ConfigEntry::section_open(child.clone()));
                        }
                        flatten_into(value, child.clone(), out);
                        if section {
                            out.push(ConfigEntry::section_close(child));
                        }
                    }
                }
            }
        }

        Node::Undefined => {}
    }
}

/// Split the accumulated path into the entry's parents chain and its own
/// name (the last segment, or empty at the document root).
fn split_owner(mut parents: Path) -> (Path, String) {
    let name = parents.pop().unwrap_or_default();
    (parents, name)
}

/// Merge assignments with identical `(parents, name)` by appending later
/// values onto the first occurrence, which keeps its position. Everything
/// else, section markers included, passes through unchanged.
///
/// This is an explicit post-processing step; [`flatten`] itself never
/// deduplicates.
pub fn aggregate(entries: Vec<ConfigEntry>) -> Vec<ConfigEntry> {
    let mut merged: Vec<ConfigEntry> = Vec::with_capacity(entries.len());
    let mut first_seen: IndexMap<(Path, String), usize> = IndexMap::new();

    for entry in entries {
        if let EntryKind::Assignment { ref name, .. } = entry.kind {
            let key = (entry.parents.clone(), name.clone());
            if let Some(&at) = first_seen.get(&key) {
                if let (
                    EntryKind::Assignment { values: into, .. },
                    EntryKind::Assignment { values: from, .. },
                ) = (&mut merged[at].kind, entry.kind)
                {
                    into.extend(from);
                }
                continue;
            }
            first_seen.insert(key, merged.len());
        }
        merged.push(entry);
    }

    merged
}
