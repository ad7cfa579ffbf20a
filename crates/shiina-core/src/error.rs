//! Error types for parsing, loading and accessing shiina values.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::value::Type;

/// Errors that can occur while parsing, loading or inspecting a [`Value`](crate::Value).
#[derive(Error, Debug)]
pub enum ShiinaError {
    /// The input did not match the grammar.
    /// `context` names what was expected and shows the unparsed remainder.
    #[error("parse error: {context}")]
    Parse { context: String },

    /// Keyed access on an object whose key is absent.
    #[error("missing key: {key:?}")]
    MissingKey { key: String },

    /// The load path could not be opened.
    #[error("file not found: {}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading an already opened file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An accessor or keyed access was used against the wrong variant.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Type, found: Type },
}

impl ShiinaError {
    pub(crate) fn parse(context: impl Into<String>) -> Self {
        ShiinaError::Parse {
            context: context.into(),
        }
    }
}

/// Convenience alias used throughout shiina-core.
pub type Result<T> = std::result::Result<T, ShiinaError>;
