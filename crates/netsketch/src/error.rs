//! Error types for Netsketch operations.
//!
//! [`NetsketchError`] is returned by the batch operations of the editor
//! (import, export, configuration). [`ModelError`] reports mutations the
//! diagram model refuses to apply.

use std::io;

use thiserror::Error;

use netsketch_core::identifier::NodeId;
use netsketch_parser::error::ParseError;

use crate::import::ImportSummary;

/// The main error type for Netsketch operations.
///
/// # Import failures
///
/// The `Import` variant carries the diagnostics together with the script
/// they point into, so callers can render source snippets. `applied`
/// describes the mutations that were made before the failing line; they are
/// not rolled back.
#[derive(Debug, Error)]
pub enum NetsketchError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("import failed, check the format: {err}")]
    Import {
        err: ParseError,
        src: String,
        applied: ImportSummary,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for NetsketchError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl NetsketchError {
    /// Create a new `Import` error with the associated source script.
    pub fn new_import_error(
        err: ParseError,
        src: impl Into<String>,
        applied: ImportSummary,
    ) -> Self {
        Self::Import {
            err,
            src: src.into(),
            applied,
        }
    }
}

/// A mutation rejected by the diagram model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("connection from `{node}` to itself is not allowed")]
    SelfLoop { node: NodeId },
}
