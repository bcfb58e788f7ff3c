//! The flattened record type.
//!
//! A [`ConfigEntry`] is one unit of flattener output: either a key/value
//! assignment, or a marker bracketing a nested section. Markers are a
//! distinct [`EntryKind`] rather than magic names, so a document key can
//! never be mistaken for one; the historical sentinel spellings survive
//! only in [`Display`](core::fmt::Display) output and as the
//! [`SECTION_OPEN`]/[`SECTION_CLOSE`] constants.

use std::fmt;

/// A path into the document: the chain of mapping keys from the root down
/// to (but not including) an entry's own name. Indexable, cloneable,
/// comparable; a plain vector of segments.
pub type Path = Vec<String>;

/// Legacy spelling of a section-open marker, as rendered in log output.
pub const SECTION_OPEN: &str = "++";

/// Legacy spelling of a section-close marker, as rendered in log output.
pub const SECTION_CLOSE: &str = "--";

/// What a [`ConfigEntry`] represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// A key/value assignment the consumer should apply to an option.
    Assignment {
        /// The mapping key that owns this entry. Empty only for the
        /// degenerate case of a bare value at the document root.
        name: String,
        /// Zero or more string values, in encounter order. A bare
        /// null-valued key carries the single literal `"true"`.
        values: Vec<String>,
    },
    /// Entry into a nested mapping scope at the entry's path.
    SectionOpen,
    /// Exit from a nested mapping scope at the entry's path.
    SectionClose,
}

/// One flattened record: a position in the hierarchy plus what sits there.
///
/// Entries are produced in a single top-to-bottom traversal and are never
/// modified afterwards. Every `SectionOpen` at a path is matched by exactly
/// one later `SectionClose` at the identical path, well-nested like
/// parentheses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    /// The parents chain locating this entry.
    pub parents: Path,
    /// The payload.
    pub kind: EntryKind,
}

impl ConfigEntry {
    /// Build an assignment entry.
    pub fn assignment(parents: Path, name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            parents,
            kind: EntryKind::Assignment {
                name: name.into(),
                values,
            },
        }
    }

    /// Build a section-open marker at `parents`.
    pub fn section_open(parents: Path) -> Self {
        Self {
            parents,
            kind: EntryKind::SectionOpen,
        }
    }

    /// Build a section-close marker at `parents`.
    pub fn section_close(parents: Path) -> Self {
        Self {
            parents,
            kind: EntryKind::SectionClose,
        }
    }

    /// The entry's name: the assignment key, or the legacy sentinel
    /// spelling for section markers.
    pub fn name(&self) -> &str {
        match &self.kind {
            EntryKind::Assignment { name, .. } => name,
            EntryKind::SectionOpen => SECTION_OPEN,
            EntryKind::SectionClose => SECTION_CLOSE,
        }
    }

    /// The entry's values. Empty for section markers.
    pub fn values(&self) -> &[String] {
        match &self.kind {
            EntryKind::Assignment { values, .. } => values,
            EntryKind::SectionOpen | EntryKind::SectionClose => &[],
        }
    }

    /// True for section-open and section-close markers.
    pub fn is_section_marker(&self) -> bool {
        matches!(
            self.kind,
            EntryKind::SectionOpen | EntryKind::SectionClose
        )
    }

    /// The parents chain and name joined with `.`: the fully qualified
    /// spelling consumers use to look up a registered option.
    pub fn full_name(&self) -> String {
        let mut out = self.parents.join(".");
        if !out.is_empty() {
            out.push('.');
        }
        out.push_str(self.name());
        out
    }
}

impl fmt::Display for ConfigEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EntryKind::Assignment { values, .. } => {
                write!(f, "{}=[{}]", self.full_name(), values.join(", "))
            }
            EntryKind::SectionOpen | EntryKind::SectionClose => {
                write!(f, "{}", self.full_name())
            }
        }
    }
}
