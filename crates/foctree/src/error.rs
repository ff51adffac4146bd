//! Error types for focus tree operations.
//!
//! This module provides the main error type [`FoctreeError`] which wraps
//! the error conditions that can occur while importing, persisting, and
//! rendering focus trees.

use std::io;

use thiserror::Error;

use foctree_parser::ParseError;

/// The main error type for focus tree operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant contains structured error information with source
/// code spans. This provides detailed error information that can be used
/// for rich error reporting.
#[derive(Debug, Error)]
pub enum FoctreeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Store error: {0}")]
    Store(#[from] serde_json::Error),
}

impl FoctreeError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
