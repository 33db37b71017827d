//! Error types.
//!
//! Three layers, from the inside out:
//!
//! - [`VfsError`], [`KeyExists`]: what the namespace reports to its callers
//! - [`ShellError`]: what a command reports to the user (one line each)
//! - [`LoadError`]: fatal problems before the session starts

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// What a command expected to find at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedKind {
    Directory,
    File,
}

impl fmt::Display for ExpectedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedKind::Directory => f.write_str("directory"),
            ExpectedKind::File => f.write_str("file"),
        }
    }
}

/// A directory could not be created because its key is taken.
#[derive(Error, Debug)]
#[error("already exists: {key}")]
pub struct KeyExists {
    pub key: String,
}

/// Errors from reading the namespace.
#[derive(Error, Debug)]
pub enum VfsError {
    #[error("not a file: {key}")]
    NotAFile { key: String },

    #[error("failed to read {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },
}

/// Errors reported by commands.
///
/// The `Display` output is the exact line printed to the user. The operand is
/// echoed back as typed, not as the resolved key.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("{command}: {path}: No such {expected}")]
    PathNotFound {
        command: &'static str,
        path: String,
        expected: ExpectedKind,
    },

    #[error("{command}: cannot create directory '{path}': File exists")]
    AlreadyExists { command: &'static str, path: String },

    #[error("{command}: missing operand")]
    MissingOperand { command: &'static str },

    /// Echoes the whole trimmed line, arguments included.
    #[error("{line}: command not found")]
    UnknownCommand { line: String },

    #[error("{command}: {path}: {source}")]
    ArchiveRead {
        command: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Fatal errors raised while loading config or archive.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot open archive {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
