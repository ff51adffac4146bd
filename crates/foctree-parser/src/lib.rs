//! # Foctree Parser
//!
//! Parser for the focus tree script format. Source text is scanned for
//! `focus = { ... }` blocks and each block is interpreted into a
//! [`Focus`](foctree_core::focus::Focus); the format is deliberately not
//! treated as a full grammar, so files carrying constructs this tool does
//! not model still import.
//!
//! ## Usage
//!
//! ```
//! # use foctree_parser::ParseError;
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         focus_tree = {
//!             focus = {
//!                 id = GER_rearmament
//!                 cost = 5
//!                 x = 2
//!                 y = 0
//!             }
//!         }
//!     "#;
//!
//!     let tree = foctree_parser::parse(source)?;
//!     assert_eq!(tree.len(), 1);
//!     Ok(())
//! }
//! ```

mod block;
pub mod error;
mod scanner;
mod span;

pub use error::{Diagnostic, ErrorCode, Label, ParseError, Severity};
pub use span::Span;

use foctree_core::collection::FocusTree;
use log::{debug, warn};

use crate::{error::DiagnosticCollector, scanner::BlockSearch};

/// Parse focus tree script text into a [`FocusTree`].
///
/// The scan walks the source block by block:
///
/// 1. Comments (`#` to end of line) are blanked, preserving byte offsets.
/// 2. Each `focus = { ... }` block is located by token search and its
///    closing brace by depth counting.
/// 3. Block bodies are interpreted field by field; unknown content is
///    ignored.
///
/// A block without an `id` is dropped with a warning, and a duplicate id
/// replaces the earlier block; neither fails the parse (warnings are
/// logged). An unterminated block is fatal: the parse stops there and the
/// blocks read so far remain accessible through [`ParseError::partial`].
pub fn parse(source: &str) -> Result<FocusTree, ParseError> {
    let clean = scanner::blank_comments(source);
    let mut collector = DiagnosticCollector::new();
    let mut tree = FocusTree::new();

    let mut cursor = 0;
    loop {
        match scanner::find_block(&clean, "focus", cursor) {
            BlockSearch::NotFound => break,
            BlockSearch::Unterminated { open } => {
                collector.emit(
                    Diagnostic::error("focus block is never closed")
                        .with_code(ErrorCode::E001)
                        .with_label(Span::new(open..open + 1), "this brace has no matching `}`")
                        .with_help("add a closing `}` before the end of the file"),
                );
                break;
            }
            BlockSearch::Found(found) => {
                cursor = found.past_close();
                let Some(focus) = block::parse_focus_block(&clean, &found, &mut collector)
                else {
                    continue;
                };
                let id = focus.id();
                if tree.insert_or_replace(focus).is_some() {
                    collector.emit(
                        Diagnostic::warning(format!("focus `{}` is declared twice", id))
                            .with_code(ErrorCode::E101)
                            .with_label(Span::new(found.whole()), "redeclared here")
                            .with_help("the later declaration replaces the earlier one"),
                    );
                }
            }
        }
    }

    debug!(focuses = tree.len(); "Scanned focus tree script");
    match collector.finish() {
        Ok(warnings) => {
            for warning in &warnings {
                warn!("{}", warning);
            }
            Ok(tree)
        }
        Err(diagnostics) => Err(ParseError::new(diagnostics).with_partial(tree)),
    }
}
