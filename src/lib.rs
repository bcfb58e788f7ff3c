#![warn(missing_docs)]
#![deny(unsafe_code)]
#![doc = include_str!("../README.md")]

pub(crate) mod config_entry;
pub(crate) mod error;
pub(crate) mod file;
pub(crate) mod flatten;
pub(crate) mod node;
pub(crate) mod parser;

// ==========================================
// PUBLIC INTERFACE
// ==========================================

pub use config_entry::{ConfigEntry, EntryKind, Path, SECTION_CLOSE, SECTION_OPEN};
pub use error::Error;
pub use file::{from_file, parse_file};
pub use flatten::{aggregate, flatten};
pub use node::Node;
pub use parser::parse_str;

/// Parse a YAML document and flatten it into an ordered entry list.
///
/// Equivalent to [`parse_str`] followed by [`flatten`].
pub fn from_str(text: &str) -> Result<Vec<ConfigEntry>, Error> {
    let node = parser::parse_str(text)?;
    Ok(flatten::flatten(&node))
}

/// Read a YAML document from `reader` and flatten it.
///
/// The reader is drained to a string first; the document syntax has no
/// incremental framing to stream against.
pub fn from_reader<R: std::io::Read>(mut reader: R) -> Result<Vec<ConfigEntry>, Error> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| Error::Read { source })?;
    from_str(&text)
}
