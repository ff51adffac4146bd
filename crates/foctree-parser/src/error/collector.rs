//! Collector for accumulating diagnostics during parsing.
//!
//! The [`DiagnosticCollector`] allows the parse to report multiple errors
//! and warnings instead of failing on the first error encountered.

use crate::error::{Diagnostic, Severity};

/// A collector for accumulating diagnostics during a parse.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    ///
    /// The diagnostic is added to the collection and if it's an error,
    /// the collector is marked as having errors.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Whether any error-severity diagnostic has been emitted.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Finish collection.
    ///
    /// Returns `Ok(warnings)` when no errors were emitted, or
    /// `Err(diagnostics)` with everything collected (warnings included)
    /// when at least one error was.
    pub fn finish(self) -> Result<Vec<Diagnostic>, Vec<Diagnostic>> {
        if self.has_errors {
            Err(self.diagnostics)
        } else {
            Ok(self.diagnostics)
        }
    }

    /// Count diagnostics of the given severity.
    #[cfg(test)]
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }
}
