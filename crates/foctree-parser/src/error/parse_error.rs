//! The ParseError type for wrapping parsing diagnostics.
//!
//! [`ParseError`] wraps one or more [`Diagnostic`]s that made the parse
//! fail, together with the partially assembled tree. Everything scanned
//! before the fatal point stays accessible, so callers can still offer the
//! recoverable part of a damaged file.

use std::fmt;

use foctree_core::collection::FocusTree;

use crate::error::Diagnostic;

/// Error type for a failed parse.
///
/// Wraps one or more diagnostics and the partial tree built up to the
/// point of failure.
#[derive(Debug, Default)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
    partial: FocusTree,
}

impl ParseError {
    /// Create a new parse error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            diagnostics,
            partial: FocusTree::new(),
        }
    }

    /// Attach the partially parsed tree.
    pub fn with_partial(mut self, partial: FocusTree) -> Self {
        self.partial = partial;
        self
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The focuses parsed before the failure.
    ///
    /// May be empty when the failure occurred before any complete block.
    pub fn partial(&self) -> &FocusTree {
        &self.partial
    }

    /// Consume the error and take the partial tree.
    pub fn into_partial(self) -> FocusTree {
        self.partial
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{}", first)?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(vec![diagnostic])
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self::new(diagnostics)
    }
}
