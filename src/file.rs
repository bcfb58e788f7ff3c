//! Config file loading.
//!
//! Thin I/O glue: read a UTF-8 path, hand the text to the parser, flatten.
//! A missing or unreadable file surfaces as [`Error::File`] carrying the
//! path, so callers can report which file was being loaded.

use camino::Utf8Path;
use tracing::debug;

use crate::config_entry::ConfigEntry;
use crate::error::Error;
use crate::node::Node;
use crate::{flatten, parser};

/// Parse the config file at `path` into a [`Node`].
pub fn parse_file(path: impl AsRef<Utf8Path>) -> Result<Node, Error> {
    let path = path.as_ref();
    debug!(%path, "loading config file");
    let contents = std::fs::read_to_string(path).map_err(|source| Error::File {
        path: path.to_owned(),
        source,
    })?;
    parser::parse_str(&contents)
}

/// Load and flatten the config file at `path`.
pub fn from_file(path: impl AsRef<Utf8Path>) -> Result<Vec<ConfigEntry>, Error> {
    let node = parse_file(path)?;
    Ok(flatten::flatten(&node))
}
