//! The id-keyed focus collection.
//!
//! [`FocusTree`] owns every focus of one tree and is the only place ids
//! change. Structural edits (remove, rename) cascade over the two kinds of
//! intra-tree reference, position anchors and prerequisite lists, so the
//! collection never holds a reference it just invalidated itself. Dangling
//! references that arrive from outside (a loaded file naming an absent
//! focus) are tolerated and left in place.

use indexmap::IndexMap;
use log::debug;
use thiserror::Error;

use crate::{focus::Focus, identifier::FocusId};

/// Errors from structural edits on a [`FocusTree`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The target id is already taken by another focus.
    #[error("A focus with id '{0}' already exists")]
    DuplicateId(FocusId),

    /// The named focus is not in the tree.
    #[error("No focus with id '{0}' exists")]
    UnknownId(FocusId),
}

/// An ordered collection of focuses, keyed by id.
///
/// Insertion order is preserved and is the tree's canonical iteration
/// order. Each focus's own id always equals its key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FocusTree {
    focuses: IndexMap<FocusId, Focus>,
}

impl FocusTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a focus to the tree.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateId`] when a focus with the same
    /// id is already present; the existing focus is left untouched.
    pub fn insert(&mut self, focus: Focus) -> Result<(), CollectionError> {
        let id = focus.id();
        if self.focuses.contains_key(&id) {
            return Err(CollectionError::DuplicateId(id));
        }
        self.focuses.insert(id, focus);
        Ok(())
    }

    /// Adds a focus, replacing any existing focus with the same id.
    ///
    /// Returns the replaced focus, if there was one.
    pub fn insert_or_replace(&mut self, focus: Focus) -> Option<Focus> {
        self.focuses.insert(focus.id(), focus)
    }

    /// Returns the focus with the given id.
    pub fn get(&self, id: FocusId) -> Option<&Focus> {
        self.focuses.get(&id)
    }

    /// Returns a mutable reference to the focus with the given id.
    pub fn get_mut(&mut self, id: FocusId) -> Option<&mut Focus> {
        self.focuses.get_mut(&id)
    }

    /// Returns whether a focus with the given id is present.
    pub fn contains(&self, id: FocusId) -> bool {
        self.focuses.contains_key(&id)
    }

    /// Returns the number of focuses in the tree.
    pub fn len(&self) -> usize {
        self.focuses.len()
    }

    /// Returns whether the tree has no focuses.
    pub fn is_empty(&self) -> bool {
        self.focuses.is_empty()
    }

    /// Iterates over focuses in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Focus> {
        self.focuses.values()
    }

    /// Iterates over focus ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = FocusId> + '_ {
        self.focuses.keys().copied()
    }

    /// Removes a focus and scrubs references to it from the rest of the
    /// tree.
    ///
    /// Focuses anchored on the removed one lose their anchor (their grid
    /// offsets then read from the origin), and the removed id is dropped
    /// from every prerequisite list. Returns the removed focus, or `None`
    /// if no focus had that id.
    pub fn remove(&mut self, id: FocusId) -> Option<Focus> {
        let removed = self.focuses.shift_remove(&id)?;

        let mut scrubbed = 0usize;
        for focus in self.focuses.values_mut() {
            if focus.relative_position_id == Some(id) {
                focus.relative_position_id = None;
                scrubbed += 1;
            }
            if focus.prerequisite.shift_remove(&id) {
                scrubbed += 1;
            }
        }
        debug!(id:% = id, references = scrubbed; "Removed focus");

        Some(removed)
    }

    /// Renames a focus, rewriting every reference to it.
    ///
    /// Iteration order is preserved; the renamed focus keeps its position
    /// in the tree. Renaming a focus to its current id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnknownId`] if `old` is not in the tree,
    /// or [`CollectionError::DuplicateId`] if `new` already is. On error
    /// the tree is unchanged.
    pub fn rename(&mut self, old: FocusId, new: FocusId) -> Result<(), CollectionError> {
        if old == new {
            return Ok(());
        }
        if !self.focuses.contains_key(&old) {
            return Err(CollectionError::UnknownId(old));
        }
        if self.focuses.contains_key(&new) {
            return Err(CollectionError::DuplicateId(new));
        }

        // Rebuild the map so the renamed focus keeps its slot instead of
        // moving to the end.
        let focuses = std::mem::take(&mut self.focuses);
        self.focuses = focuses
            .into_iter()
            .map(|(key, mut focus)| {
                if key == old {
                    focus.set_id(new);
                    (new, focus)
                } else {
                    (key, focus)
                }
            })
            .collect();

        for focus in self.focuses.values_mut() {
            if focus.relative_position_id == Some(old) {
                focus.relative_position_id = Some(new);
            }
            if focus.prerequisite.contains(&old) {
                // Replace in place to keep the list's order stable.
                focus.prerequisite = focus
                    .prerequisite
                    .iter()
                    .map(|&p| if p == old { new } else { p })
                    .collect();
            }
        }
        debug!(old:% = old, new:% = new; "Renamed focus");

        Ok(())
    }
}

impl<'a> IntoIterator for &'a FocusTree {
    type Item = &'a Focus;
    type IntoIter = indexmap::map::Values<'a, FocusId, Focus>;

    fn into_iter(self) -> Self::IntoIter {
        self.focuses.values()
    }
}
