//! Interpretation of a single `focus = { ... }` block.
//!
//! A block body is reduced in stages: the known sub-blocks (`offset`,
//! `completion_reward`, `prerequisite`) are extracted and blanked out
//! first, then what remains is scanned line by line for scalar
//! assignments. Unknown keys and unknown sub-blocks are ignored, so
//! scripts carrying constructs this tool does not model still import.

use indexmap::IndexSet;
use foctree_core::{focus::Focus, identifier::FocusId};
use log::trace;
use winnow::{
    Parser,
    ascii::{dec_int, multispace0},
    combinator::{preceded, separated_pair},
    error::ModalResult,
    token::{literal, one_of, take_while},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    scanner::{self, BlockSearch, BlockSpan},
    span::Span,
};

/// Reward text for a block that carries no `completion_reward`.
const MISSING_REWARD: &str = "{ }";

/// An identifier token: letters, digits, underscores.
fn identifier<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

/// A base-10 integer with optional sign, consuming nothing else.
fn integer(input: &mut &str) -> ModalResult<i32> {
    dec_int.parse_next(input)
}

/// One `focus = <id>` reference inside a prerequisite list.
fn focus_reference<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded(
        (literal("focus"), multispace0, '=', multispace0),
        identifier,
    )
    .parse_next(input)
}

/// One `x = <int>` or `y = <int>` assignment inside an offset block.
fn axis_assignment(input: &mut &str) -> ModalResult<(char, i32)> {
    separated_pair(one_of(['x', 'y']), (multispace0, '=', multispace0), integer)
        .parse_next(input)
}

/// Collect every `focus = <id>` reference in a prerequisite body.
///
/// The body may hold the references inline or one per line, mixed with
/// tokens this tool does not model; anything that is not a reference is
/// skipped one character at a time. First occurrence wins the ordering,
/// duplicates collapse.
fn focus_references(content: &str, refs: &mut IndexSet<FocusId>) {
    let mut input = content;
    let mut at_boundary = true;
    while !input.is_empty() {
        if at_boundary {
            if let Ok(name) = focus_reference.parse_next(&mut input) {
                refs.insert(FocusId::new(name));
                // The reference ends in an identifier character.
                at_boundary = false;
                continue;
            }
        }
        let mut chars = input.chars();
        if let Some(c) = chars.next() {
            at_boundary = !(c.is_ascii_alphanumeric() || c == '_');
        }
        input = chars.as_str();
    }
}

/// Read the `x`/`y` fields of an offset body. First assignment per axis
/// wins; a missing axis contributes zero.
fn offset_fields(content: &str) -> (i32, i32) {
    let mut dx: Option<i32> = None;
    let mut dy: Option<i32> = None;
    let mut input = content;
    let mut at_boundary = true;
    while !input.is_empty() {
        if at_boundary {
            if let Ok((axis, value)) = axis_assignment.parse_next(&mut input) {
                match axis {
                    'x' => dx = dx.or(Some(value)),
                    _ => dy = dy.or(Some(value)),
                }
                at_boundary = false;
                continue;
            }
        }
        let mut chars = input.chars();
        if let Some(c) = chars.next() {
            at_boundary = !(c.is_ascii_alphanumeric() || c == '_');
        }
        input = chars.as_str();
    }
    (dx.unwrap_or(0), dy.unwrap_or(0))
}

/// Strip one layer of surrounding double quotes, if present.
fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

fn scalar_int(key: &str, value: &str) -> Option<i32> {
    match integer.parse(value) {
        Ok(v) => Some(v),
        Err(_) => {
            trace!(key = key, value = value; "Value is not an integer, keeping previous");
            None
        }
    }
}

/// Interpret one focus block within the comment-blanked source.
///
/// Returns `None` (after emitting a warning) when the block has no id.
pub(crate) fn parse_focus_block(
    text: &str,
    block: &BlockSpan,
    collector: &mut DiagnosticCollector,
) -> Option<Focus> {
    let mut body = text[block.content()].to_string();

    // Sub-blocks first, so their interiors never reach the line scan.
    let (mut offset_x, mut offset_y) = (0, 0);
    if let BlockSearch::Found(sub) = scanner::find_block(&body, "offset", 0) {
        (offset_x, offset_y) = offset_fields(&body[sub.content()]);
        body = scanner::blank_region(&body, sub.whole());
    }

    let mut reward = MISSING_REWARD.to_string();
    if let BlockSearch::Found(sub) = scanner::find_block(&body, "completion_reward", 0) {
        let content = body[sub.content()].trim();
        reward = format!("{{\n{content}\n\t\t}}");
        body = scanner::blank_region(&body, sub.whole());
    }

    let mut prerequisites = IndexSet::new();
    while let BlockSearch::Found(sub) = scanner::find_block(&body, "prerequisite", 0) {
        focus_references(&body[sub.content()], &mut prerequisites);
        body = scanner::blank_region(&body, sub.whole());
    }

    // Scalar assignments. A repeated key is overwritten left to right, so
    // the last assignment wins.
    let mut id: Option<String> = None;
    let mut icon: Option<String> = None;
    let mut relative: Option<FocusId> = None;
    let mut cost: Option<i32> = None;
    let mut x: Option<i32> = None;
    let mut y: Option<i32> = None;
    let mut name: Option<String> = None;
    let mut description: Option<String> = None;

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() || line.contains('{') || line.contains('}') {
            continue;
        }
        let parts: Vec<&str> = line.split('=').collect();
        let [key, value] = parts.as_slice() else {
            continue;
        };
        let key = key.trim();
        let value = strip_quotes(value.trim());
        match key {
            "id" if !value.is_empty() => id = Some(value.to_string()),
            "icon" => icon = Some(value.to_string()),
            "relative_position_id" => {
                relative = (!value.is_empty()).then(|| FocusId::new(value));
            }
            "cost" => cost = scalar_int(key, value).or(cost),
            "x" => x = scalar_int(key, value).or(x),
            "y" => y = scalar_int(key, value).or(y),
            "name" => name = Some(value.to_string()),
            "description" => description = Some(value.to_string()),
            _ => {}
        }
    }

    let Some(id) = id else {
        collector.emit(
            Diagnostic::warning("focus block has no id")
                .with_code(ErrorCode::E100)
                .with_label(Span::new(block.whole()), "this block is dropped")
                .with_help("add an `id = <name>` line inside the block"),
        );
        return None;
    };

    let mut focus = Focus::new(FocusId::new(&id));
    focus.prerequisite = prerequisites;
    focus.completion_reward = reward;
    if let Some(icon) = icon {
        focus.icon = icon;
    }
    focus.relative_position_id = relative;
    if let Some(cost) = cost {
        focus.cost = cost;
    }
    focus.x = x.unwrap_or(0) + offset_x;
    focus.y = y.unwrap_or(0) + offset_y;
    if let Some(name) = name {
        focus.name = name;
    }
    if let Some(description) = description {
        focus.description = description;
    }
    Some(focus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_block(source: &str) -> (Option<Focus>, DiagnosticCollector) {
        let mut collector = DiagnosticCollector::new();
        let block = match scanner::find_block(source, "focus", 0) {
            BlockSearch::Found(block) => block,
            other => panic!("Expected a focus block, got {:?}", other),
        };
        let focus = parse_focus_block(source, &block, &mut collector);
        (focus, collector)
    }

    #[test]
    fn test_scalar_fields() {
        let (focus, _) = parse_block(
            "focus = {\n\tid = GER_army\n\ticon = GFX_army\n\tcost = 5\n\tx = 3\n\ty = -2\n}",
        );
        let focus = focus.unwrap();

        assert_eq!(focus.id(), "GER_army");
        assert_eq!(focus.icon, "GFX_army");
        assert_eq!(focus.cost, 5);
        assert_eq!((focus.x, focus.y), (3, -2));
    }

    #[test]
    fn test_later_assignment_wins() {
        let (focus, _) = parse_block("focus = {\n\tid = a\n\tcost = 5\n\tcost = 8\n}");
        assert_eq!(focus.unwrap().cost, 8);
    }

    #[test]
    fn test_bad_integer_keeps_previous() {
        let (focus, _) = parse_block("focus = {\n\tid = a\n\tcost = 5\n\tcost = cheap\n}");
        assert_eq!(focus.unwrap().cost, 5);
    }

    #[test]
    fn test_missing_id_emits_warning() {
        let (focus, collector) = parse_block("focus = {\n\tcost = 5\n}");
        assert!(focus.is_none());
        assert_eq!(collector.count(crate::error::Severity::Warning), 1);
    }

    #[test]
    fn test_prerequisite_union() {
        let (focus, _) = parse_block(
            "focus = {\n\tid = a\n\tprerequisite = { focus = b }\n\tprerequisite = { focus = c focus = b }\n}",
        );
        let focus = focus.unwrap();
        let prereqs: Vec<String> = focus.prerequisite.iter().map(|p| p.resolve()).collect();
        assert_eq!(prereqs, ["b", "c"]);
    }

    #[test]
    fn test_offset_flattening() {
        let (focus, _) = parse_block(
            "focus = {\n\tid = a\n\tx = 1\n\ty = 2\n\toffset = { x = 10 y = -1 }\n}",
        );
        let focus = focus.unwrap();
        assert_eq!((focus.x, focus.y), (11, 1));
    }

    #[test]
    fn test_completion_reward_rewrapped() {
        let (focus, _) = parse_block(
            "focus = {\n\tid = a\n\tcompletion_reward = {\n\t\tarmy_experience = 20\n\t}\n}",
        );
        assert_eq!(
            focus.unwrap().completion_reward,
            "{\narmy_experience = 20\n\t\t}"
        );
    }

    #[test]
    fn test_missing_reward_placeholder() {
        let (focus, _) = parse_block("focus = { id = a }");
        assert_eq!(focus.unwrap().completion_reward, MISSING_REWARD);
    }

    #[test]
    fn test_reward_interior_not_scanned() {
        // An x assignment inside the reward must not leak into the node.
        let (focus, _) = parse_block(
            "focus = {\n\tid = a\n\tcompletion_reward = {\n\t\tset_variable = { x = 99 }\n\t}\n}",
        );
        assert_eq!(focus.unwrap().x, 0);
    }

    #[test]
    fn test_quoted_values_unwrapped() {
        let (focus, _) = parse_block("focus = {\n\tid = a\n\tname = \"The Big Plan\"\n}");
        assert_eq!(focus.unwrap().name, "The Big Plan");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let (focus, _) = parse_block(
            "focus = {\n\tid = a\n\tai_will_do = yes\n\tavailable_if_capitulated = yes\n}",
        );
        assert!(focus.is_some());
    }

    #[test]
    fn test_empty_relative_position_is_none() {
        let (focus, _) = parse_block("focus = {\n\tid = a\n\trelative_position_id =\n}");
        assert_eq!(focus.unwrap().relative_position_id, None);
    }
}
