//! Error codes for the parser diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Scanner errors (block structure)
//! - `E1xx` - Block errors (focus block content)

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Scanner Errors (E0xx)
    // =========================================================================
    /// Unterminated block.
    ///
    /// A block was opened with `{` but its matching `}` was never found
    /// before the end of the file.
    E001,

    // =========================================================================
    // Block Errors (E1xx)
    // =========================================================================
    /// Missing focus id.
    ///
    /// A `focus = { ... }` block contains no `id = <name>` assignment and
    /// cannot be indexed; the block is dropped.
    E100,

    /// Duplicate focus id.
    ///
    /// Two focus blocks declare the same id. The later block replaces the
    /// earlier one.
    E101,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Scanner errors
            ErrorCode::E001 => "E001",
            // Block errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Scanner errors
            ErrorCode::E001 => "unterminated block",
            // Block errors
            ErrorCode::E100 => "missing focus id",
            ErrorCode::E101 => "duplicate focus id",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
