//! Byte-level scanning of the brace script format.
//!
//! The script format is not parsed as a grammar. The scanner locates
//! `<keyword> = { ... }` regions structurally: comments are blanked out,
//! blocks are found by token search, and the matching closing brace is
//! located with a depth counter. All transformations preserve byte offsets,
//! so every position in a working copy maps directly to the original
//! source for diagnostics.

use std::ops::Range;

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Blank `#`-to-end-of-line comments with spaces.
///
/// Newlines inside the blanked region are kept, so both byte offsets and
/// line structure survive. Braces inside comments stop counting toward
/// block nesting, which is the point.
pub(crate) fn blank_comments(source: &str) -> String {
    let mut bytes = source.as_bytes().to_vec();
    let mut in_comment = false;
    for b in &mut bytes {
        match *b {
            b'\n' => in_comment = false,
            b'#' => {
                in_comment = true;
                *b = b' ';
            }
            _ if in_comment => *b = b' ',
            _ => {}
        }
    }
    // Only ASCII spaces were written, and comment boundaries are ASCII, so
    // the buffer is still valid UTF-8.
    String::from_utf8(bytes).expect("Blanking writes only ASCII")
}

/// Blank a byte range with spaces, keeping newlines.
pub(crate) fn blank_region(text: &str, range: Range<usize>) -> String {
    let mut bytes = text.as_bytes().to_vec();
    for b in &mut bytes[range] {
        if *b != b'\n' {
            *b = b' ';
        }
    }
    String::from_utf8(bytes).expect("Blanking writes only ASCII")
}

/// Find the `}` matching the `{` at `open`.
///
/// `text[open]` must be the opening brace. Returns `None` when the block
/// runs past the end of the input.
pub(crate) fn matching_brace(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in text.as_bytes().iter().enumerate().skip(open) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// A located `<keyword> = { ... }` region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BlockSpan {
    keyword_start: usize,
    open: usize,
    close: usize,
}

impl BlockSpan {
    /// The bytes between the braces, exclusive.
    pub(crate) fn content(&self) -> Range<usize> {
        self.open + 1..self.close
    }

    /// The whole region from keyword through closing brace, inclusive.
    pub(crate) fn whole(&self) -> Range<usize> {
        self.keyword_start..self.close + 1
    }

    /// Offset just past the closing brace.
    pub(crate) fn past_close(&self) -> usize {
        self.close + 1
    }
}

/// Outcome of searching for a keyword block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockSearch {
    Found(BlockSpan),
    /// A `<keyword> = {` was found but its closing brace was not.
    Unterminated { open: usize },
    NotFound,
}

/// Find the first `<keyword> = { ... }` at or after `from`.
///
/// The keyword must stand alone (not be a substring of a longer
/// identifier), so `unfocus = {` never matches a search for `focus`.
/// Occurrences of the keyword without a following `= {`, such as the
/// `focus = <id>` references inside prerequisite lists, are skipped.
pub(crate) fn find_block(text: &str, keyword: &str, from: usize) -> BlockSearch {
    let bytes = text.as_bytes();
    for (rel, _) in text[from..].match_indices(keyword) {
        let start = from + rel;
        if start > 0 && is_ident_byte(bytes[start - 1]) {
            continue;
        }
        let mut i = start + keyword.len();
        if i < bytes.len() && is_ident_byte(bytes[i]) {
            continue;
        }
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || bytes[i] != b'=' {
            continue;
        }
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || bytes[i] != b'{' {
            continue;
        }
        return match matching_brace(text, i) {
            Some(close) => BlockSearch::Found(BlockSpan {
                keyword_start: start,
                open: i,
                close,
            }),
            None => BlockSearch::Unterminated { open: i },
        };
    }
    BlockSearch::NotFound
}
