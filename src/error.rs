//! Crate error type.
//!
//! The flattener itself is total over any tree the parser produces, so
//! every error here comes from the glue around it: YAML syntax errors
//! surfaced by the external parser, and I/O failures while loading a
//! config file.

use camino::Utf8PathBuf;
use std::fmt;

/// An error from parsing or loading a configuration document.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The document is not valid YAML, or uses a construct this crate
    /// does not accept (such as a non-scalar mapping key). Carries the
    /// parser's message, which includes the source position.
    Parse {
        /// Human-readable message from the parser.
        message: String,
    },

    /// Reading from a generic reader failed.
    Read {
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A config file could not be read.
    File {
        /// The path that was being loaded.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse { message } => write!(f, "invalid config document: {message}"),
            Error::Read { source } => write!(f, "failed to read config document: {source}"),
            Error::File { path, source } => {
                write!(f, "failed to read config file {path}: {source}")
            }
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Parse { .. } => None,
            Error::Read { source } | Error::File { source, .. } => Some(source),
        }
    }
}
