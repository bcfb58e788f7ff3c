//! Integration suite.
//!
//! Shared entry-builder helpers live here; the per-area cases are in the
//! sibling modules.

mod aggregate;

use coing::{ConfigEntry, Path};

pub fn path(segments: &[&str]) -> Path {
    segments.iter().map(|s| s.to_string()).collect()
}

pub fn assignment(parents: &[&str], name: &str, values: &[&str]) -> ConfigEntry {
    ConfigEntry::assignment(
        path(parents),
        name,
        values.iter().map(|s| s.to_string()).collect(),
    )
}

pub fn open(parents: &[&str]) -> ConfigEntry {
    ConfigEntry::section_open(path(parents))
}

pub fn close(parents: &[&str]) -> ConfigEntry {
    ConfigEntry::section_close(path(parents))
}
