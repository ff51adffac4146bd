//! Relative-position layout resolution.
//!
//! Focus positions in the model are grid offsets from an anchor focus.
//! [`resolve_layout`] turns them into absolute canvas positions without
//! touching the tree: the result is a standalone [`TreeLayout`] map.
//!
//! Anchors may dangle (reference a focus not in the tree) and may form
//! cycles; both degrade to origin-relative placement rather than erroring,
//! so the resolver is total over every representable tree.

use indexmap::IndexMap;
use log::{debug, trace};

use foctree_core::{collection::FocusTree, identifier::FocusId};

/// An absolute canvas position, in canvas units (not grid cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AbsolutePos {
    pub x: i64,
    pub y: i64,
}

impl AbsolutePos {
    fn offset_by(self, dx: i32, dy: i32, cell_size: i64) -> Self {
        Self {
            x: self.x + dx as i64 * cell_size,
            y: self.y + dy as i64 * cell_size,
        }
    }
}

/// Resolved absolute positions for every focus of one tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeLayout {
    positions: IndexMap<FocusId, AbsolutePos>,
}

impl TreeLayout {
    /// The absolute position of a focus, if it is in the layout.
    pub fn position(&self, id: FocusId) -> Option<AbsolutePos> {
        self.positions.get(&id).copied()
    }

    /// Iterates over `(id, position)` pairs in tree order.
    pub fn iter(&self) -> impl Iterator<Item = (FocusId, AbsolutePos)> + '_ {
        self.positions.iter().map(|(&id, &pos)| (id, pos))
    }

    /// Number of positioned focuses.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the layout holds no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

fn round_div(value: i64, divisor: i64) -> i64 {
    (value as f64 / divisor as f64).round() as i64
}

/// The grid cell nearest to an absolute position.
///
/// Inverse of the cell-to-canvas scaling, used to map pointer coordinates
/// back onto the grid.
pub fn grid_cell(pos: AbsolutePos, cell_size: i64) -> (i64, i64) {
    (round_div(pos.x, cell_size), round_div(pos.y, cell_size))
}

/// Compute absolute positions for every focus in the tree.
///
/// Roots (no anchor, or an anchor naming a focus that is not in the tree)
/// sit at their own offset scaled by `cell_size`. Every other focus sits
/// at its anchor's resolved position plus its scaled offset, resolved in
/// breadth-first waves. Focuses whose anchors form a cycle are never
/// reached by the sweep and fall back to root treatment.
///
/// The result does not depend on iteration order among siblings: each
/// position derives only from the anchor chain above it.
pub fn resolve_layout(tree: &FocusTree, cell_size: i64) -> TreeLayout {
    let mut positions: IndexMap<FocusId, AbsolutePos> = IndexMap::with_capacity(tree.len());

    // Roots seed the sweep.
    let mut queue: Vec<FocusId> = Vec::new();
    for focus in tree.iter() {
        let is_root = match focus.relative_position_id {
            None => true,
            Some(anchor) => !tree.contains(anchor),
        };
        if is_root {
            positions.insert(
                focus.id(),
                AbsolutePos::default().offset_by(focus.x, focus.y, cell_size),
            );
            queue.push(focus.id());
        }
    }

    let mut head = 0;
    while head < queue.len() {
        let parent = queue[head];
        head += 1;
        let parent_pos = positions[&parent];

        for focus in tree.iter() {
            if focus.relative_position_id == Some(parent) && !positions.contains_key(&focus.id()) {
                positions.insert(focus.id(), parent_pos.offset_by(focus.x, focus.y, cell_size));
                queue.push(focus.id());
            }
        }
    }

    // Anchor cycles: treat like roots.
    for focus in tree.iter() {
        if !positions.contains_key(&focus.id()) {
            trace!(id:% = focus.id(); "Anchor cycle, placing relative to origin");
            positions.insert(
                focus.id(),
                AbsolutePos::default().offset_by(focus.x, focus.y, cell_size),
            );
        }
    }

    debug!(focuses = positions.len(), cell_size = cell_size; "Resolved layout");
    TreeLayout { positions }
}

#[cfg(test)]
mod tests {
    use foctree_core::focus::Focus;

    use super::*;

    fn focus_at(id: &str, anchor: Option<&str>, x: i32, y: i32) -> Focus {
        let mut focus = Focus::new(FocusId::new(id));
        focus.relative_position_id = anchor.map(FocusId::new);
        focus.x = x;
        focus.y = y;
        focus
    }

    fn tree_of(focuses: Vec<Focus>) -> FocusTree {
        let mut tree = FocusTree::new();
        for focus in focuses {
            tree.insert(focus).unwrap();
        }
        tree
    }

    #[test]
    fn test_root_scaled_by_cell_size() {
        let tree = tree_of(vec![focus_at("root", None, 3, -2)]);
        let layout = resolve_layout(&tree, 240);

        assert_eq!(
            layout.position(FocusId::new("root")),
            Some(AbsolutePos { x: 720, y: -480 })
        );
    }

    #[test]
    fn test_chain_accumulates_offsets() {
        let tree = tree_of(vec![
            focus_at("a", None, 1, 0),
            focus_at("b", Some("a"), 2, 1),
            focus_at("c", Some("b"), 0, 1),
        ]);
        let layout = resolve_layout(&tree, 10);

        assert_eq!(
            layout.position(FocusId::new("c")),
            Some(AbsolutePos { x: 30, y: 20 })
        );
    }

    #[test]
    fn test_declaration_order_does_not_matter() {
        // Child declared before its anchor.
        let forward = tree_of(vec![
            focus_at("child", Some("root"), 1, 1),
            focus_at("root", None, 0, 0),
        ]);
        let backward = tree_of(vec![
            focus_at("root", None, 0, 0),
            focus_at("child", Some("root"), 1, 1),
        ]);

        let pos_forward = resolve_layout(&forward, 240).position(FocusId::new("child"));
        let pos_backward = resolve_layout(&backward, 240).position(FocusId::new("child"));
        assert_eq!(pos_forward, pos_backward);
    }

    #[test]
    fn test_dangling_anchor_is_root() {
        let tree = tree_of(vec![focus_at("lonely", Some("ghost"), 2, 2)]);
        let layout = resolve_layout(&tree, 100);

        assert_eq!(
            layout.position(FocusId::new("lonely")),
            Some(AbsolutePos { x: 200, y: 200 })
        );
    }

    #[test]
    fn test_anchor_cycle_falls_back_to_origin() {
        let tree = tree_of(vec![
            focus_at("ping", Some("pong"), 1, 0),
            focus_at("pong", Some("ping"), 0, 1),
        ]);
        let layout = resolve_layout(&tree, 50);

        assert_eq!(layout.len(), 2);
        assert_eq!(
            layout.position(FocusId::new("ping")),
            Some(AbsolutePos { x: 50, y: 0 })
        );
        assert_eq!(
            layout.position(FocusId::new("pong")),
            Some(AbsolutePos { x: 0, y: 50 })
        );
    }

    #[test]
    fn test_grid_cell_rounds_to_nearest() {
        assert_eq!(grid_cell(AbsolutePos { x: 250, y: -110 }, 240), (1, 0));
        assert_eq!(grid_cell(AbsolutePos { x: -250, y: 380 }, 240), (-1, 2));
        assert_eq!(grid_cell(AbsolutePos { x: 0, y: 0 }, 240), (0, 0));
    }
}
