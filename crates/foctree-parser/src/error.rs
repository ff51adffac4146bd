//! Error and diagnostic system for the focus tree script parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, multiple source
//! locations, and help text. Multiple diagnostics are wrapped in [`ParseError`]
//! for returning from the parse, together with the partially assembled tree.
//!
//! # Example
//!
//! ```
//! # use foctree_parser::error::{Diagnostic, ErrorCode};
//! # use foctree_parser::Span;
//!
//! let span = Span::new(100..101);
//!
//! let diag = Diagnostic::error("focus block is never closed")
//!     .with_code(ErrorCode::E001)
//!     .with_label(span, "this brace has no matching `}`")
//!     .with_help("add a closing brace before the end of the file");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
