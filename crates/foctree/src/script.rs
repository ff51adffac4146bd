//! Canonical script and localisation generation.
//!
//! The generator renders a whole tree into the brace script format with a
//! fixed layout: tab indentation, a stable field order, and `(y, x)`
//! ordering of the focus blocks. Generated output is stable under
//! parse-then-render, which is what makes `fmt` a formatter.

use std::fmt::Write;

use foctree_core::{collection::FocusTree, focus::Focus};
use log::debug;

/// A reward is empty when it has no content, or is a brace pair holding
/// only whitespace. Both render as the canonical `{ }`, which keeps
/// parse-then-render a fixed point.
fn reward_is_empty(reward: &str) -> bool {
    reward.is_empty()
        || reward
            .strip_prefix('{')
            .and_then(|r| r.strip_suffix('}'))
            .is_some_and(|inner| inner.trim().is_empty())
}

fn render_focus(out: &mut String, focus: &Focus) {
    // fmt::Write on String cannot fail.
    let _ = writeln!(out, "\tfocus = {{");
    let _ = writeln!(out, "\t\tid = {}", focus.id());
    let _ = writeln!(out, "\t\ticon = {}", focus.icon);
    let _ = writeln!(out, "\t\tcost = {}", focus.cost);

    match focus.prerequisite.len() {
        0 => {}
        1 => {
            let only = focus.prerequisite.iter().next().map(|p| p.resolve());
            if let Some(only) = only {
                let _ = writeln!(out, "\t\tprerequisite = {{ focus = {only} }}");
            }
        }
        _ => {
            let _ = writeln!(out, "\t\tprerequisite = {{");
            for prereq in &focus.prerequisite {
                let _ = writeln!(out, "\t\t\tfocus = {prereq}");
            }
            let _ = writeln!(out, "\t\t}}");
        }
    }

    if let Some(anchor) = focus.relative_position_id {
        let _ = writeln!(out, "\t\trelative_position_id = {anchor}");
    }

    let _ = writeln!(out, "\t\tx = {}", focus.x);
    let _ = writeln!(out, "\t\ty = {}", focus.y);

    let reward = focus.completion_reward.trim();
    if reward_is_empty(reward) {
        let _ = writeln!(out, "\t\tcompletion_reward = {{ }}");
    } else {
        let _ = writeln!(out, "\t\tcompletion_reward = {reward}");
    }

    let _ = write!(out, "\t}}");
}

/// Render the whole tree as a `focus_tree = { ... }` script.
///
/// Focus blocks are ordered by `(y, x)` ascending, ties broken by tree
/// order, so the output is independent of edit history. Returns the empty
/// string for an empty tree.
pub fn render_script(tree: &FocusTree) -> String {
    if tree.is_empty() {
        return String::new();
    }

    let mut focuses: Vec<&Focus> = tree.iter().collect();
    focuses.sort_by_key(|f| (f.y, f.x));

    let mut out = String::from("focus_tree = {\n");
    for focus in focuses {
        render_focus(&mut out, focus);
        out.push_str("\n\n");
    }
    out.push('}');

    debug!(focuses = tree.len(), bytes = out.len(); "Rendered focus tree script");
    out
}

/// Render the localisation file for a tree.
///
/// One `l_<language>:` header, then per focus (sorted by id) a name line
/// and a description line, keyed `<prefix>_<id>` and `<prefix>_<id>_desc`.
/// Each entry line carries the single leading space the game's
/// localisation format expects.
pub fn render_localisation(tree: &FocusTree, language: &str, key_prefix: &str) -> String {
    let mut out = format!("l_{language}:\n");

    let mut focuses: Vec<&Focus> = tree.iter().collect();
    focuses.sort_by_key(|f| f.id().resolve());

    for focus in focuses {
        let id = focus.id();
        let _ = writeln!(out, " {key_prefix}_{id}: \"{}\"", focus.name);
        let _ = writeln!(out, " {key_prefix}_{id}_desc: \"{}\"", focus.description);
    }
    out
}

#[cfg(test)]
mod tests {
    use foctree_core::identifier::FocusId;

    use super::*;

    fn focus(id: &str) -> Focus {
        Focus::new(FocusId::new(id))
    }

    fn tree_of(focuses: Vec<Focus>) -> FocusTree {
        let mut tree = FocusTree::new();
        for f in focuses {
            tree.insert(f).unwrap();
        }
        tree
    }

    #[test]
    fn test_empty_tree_renders_empty() {
        assert_eq!(render_script(&FocusTree::new()), "");
    }

    #[test]
    fn test_single_focus_layout() {
        let mut f = focus("alone");
        f.icon = "GFX_one".to_string();
        f.cost = 3;
        f.x = 1;
        f.y = 2;
        f.completion_reward = "{ army_experience = 5 }".to_string();

        let script = render_script(&tree_of(vec![f]));
        assert_eq!(
            script,
            "focus_tree = {\n\
             \tfocus = {\n\
             \t\tid = alone\n\
             \t\ticon = GFX_one\n\
             \t\tcost = 3\n\
             \t\tx = 1\n\
             \t\ty = 2\n\
             \t\tcompletion_reward = { army_experience = 5 }\n\
             \t}\n\n\
             }"
        );
    }

    #[test]
    fn test_single_prerequisite_inline() {
        let mut f = focus("b");
        f.prerequisite.insert(FocusId::new("a"));

        let script = render_script(&tree_of(vec![f]));
        assert!(script.contains("\t\tprerequisite = { focus = a }\n"));
        assert!(!script.contains("\t\tprerequisite = {\n"));
    }

    #[test]
    fn test_multiple_prerequisites_block() {
        let mut f = focus("c");
        f.prerequisite.insert(FocusId::new("a"));
        f.prerequisite.insert(FocusId::new("b"));

        let script = render_script(&tree_of(vec![f]));
        assert!(script.contains(
            "\t\tprerequisite = {\n\t\t\tfocus = a\n\t\t\tfocus = b\n\t\t}\n"
        ));
    }

    #[test]
    fn test_anchor_rendered_only_when_set() {
        let mut anchored = focus("anchored");
        anchored.relative_position_id = Some(FocusId::new("root"));
        let script = render_script(&tree_of(vec![focus("root"), anchored]));

        assert_eq!(script.matches("relative_position_id").count(), 1);
    }

    #[test]
    fn test_empty_reward_canonical_form() {
        let mut f = focus("bare");
        f.completion_reward = "   \n\t ".to_string();

        let script = render_script(&tree_of(vec![f]));
        assert!(script.contains("\t\tcompletion_reward = { }\n"));
    }

    #[test]
    fn test_blocks_sorted_by_y_then_x() {
        let mut late = focus("late");
        late.y = 2;
        let mut right = focus("right");
        right.y = 1;
        right.x = 5;
        let mut left = focus("left");
        left.y = 1;
        left.x = -5;

        let script = render_script(&tree_of(vec![late, right, left]));
        let pos = |id: &str| script.find(&format!("id = {id}")).unwrap();
        assert!(pos("left") < pos("right"));
        assert!(pos("right") < pos("late"));
    }

    #[test]
    fn test_localisation_output() {
        let mut a = focus("GER_b");
        a.name = "Second".to_string();
        let mut b = focus("GER_a");
        b.name = "First".to_string();
        b.description = "The first focus.".to_string();

        let loc = render_localisation(&tree_of(vec![a, b]), "japanese", "JAP");
        assert_eq!(
            loc,
            "l_japanese:\n \
             JAP_GER_a: \"First\"\n \
             JAP_GER_a_desc: \"The first focus.\"\n \
             JAP_GER_b: \"Second\"\n \
             JAP_GER_b_desc: \"\"\n"
        );
    }
}
