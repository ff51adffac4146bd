//! The focus entity.
//!
//! A [`Focus`] is one node of a focus tree. Field names follow the script
//! format's literal keys (`relative_position_id`, `completion_reward`, ...)
//! so the persisted structured form, the script form, and the model all
//! speak the same vocabulary.

use indexmap::IndexSet;
use serde_json::{Map, Value};

use crate::{coerce, identifier::FocusId};

/// Icon token used when a focus does not specify one.
pub const DEFAULT_ICON: &str = "GFX_focus_generic_question_mark";

/// Cost used when a focus does not specify one.
pub const DEFAULT_COST: i32 = 10;

/// Placeholder body for a focus with no completion reward.
///
/// The indentation matches the canonical script rendering, where the reward
/// block opens at two tabs of depth.
pub const EMPTY_REWARD: &str = "{\n\t\t\t\n\t\t}";

/// One node of a focus tree.
///
/// Positions are *relative*: `x`/`y` are grid-cell offsets from the focus
/// named by `relative_position_id`, or from the origin when no anchor is
/// set. Absolute positions are computed on demand by the layout resolver
/// and are never stored here.
///
/// The `completion_reward` payload is opaque: it is script text interpreted
/// by the game engine, preserved as-is apart from re-indentation on
/// rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Focus {
    /// Unique identity within a tree. Read-only here; renames go through
    /// [`FocusTree::rename`](crate::collection::FocusTree::rename) so that
    /// references elsewhere in the tree are rewritten with it.
    id: FocusId,

    /// Icon token, opaque to this tool.
    pub icon: String,

    /// Prerequisite focus references, de-duplicated, insertion-ordered.
    /// May reference ids that are not (or no longer) in the tree.
    pub prerequisite: IndexSet<FocusId>,

    /// The focus whose resolved position this focus is offset from.
    /// A dangling reference is treated as "no anchor" by the resolver.
    pub relative_position_id: Option<FocusId>,

    /// Political power cost.
    pub cost: i32,

    /// Grid-cell offset from the anchor (or origin) along x.
    pub x: i32,

    /// Grid-cell offset from the anchor (or origin) along y.
    pub y: i32,

    /// Opaque reward script block, including its surrounding braces.
    pub completion_reward: String,

    /// Display name, may be empty.
    pub name: String,

    /// Description text, may be empty.
    pub description: String,
}

impl Focus {
    /// Creates a focus with the given id and documented field defaults.
    pub fn new(id: FocusId) -> Self {
        Self {
            id,
            icon: DEFAULT_ICON.to_string(),
            prerequisite: IndexSet::new(),
            relative_position_id: None,
            cost: DEFAULT_COST,
            x: 0,
            y: 0,
            completion_reward: EMPTY_REWARD.to_string(),
            name: String::new(),
            description: String::new(),
        }
    }

    /// Returns this focus's id.
    pub fn id(&self) -> FocusId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: FocusId) {
        self.id = id;
    }

    /// Constructs a focus from a sparse field mapping.
    ///
    /// Unset fields take their defaults; a field whose value cannot be
    /// coerced to the expected type also keeps its default (see the
    /// [`coerce`] module for the exact rules). The only hard requirement is
    /// a non-empty `id`: without one the record cannot be indexed and
    /// `None` is returned.
    pub fn from_fields(fields: &Map<String, Value>) -> Option<Self> {
        let id = fields.get("id").and_then(coerce::optional_id)?;
        Some(Self::from_fields_with_id(id, fields))
    }

    /// Constructs a focus from a sparse field mapping with an externally
    /// supplied id, ignoring any `id` entry in the mapping.
    ///
    /// Used by the store adapter, where the map key is the authoritative
    /// identity.
    pub fn from_fields_with_id(id: FocusId, fields: &Map<String, Value>) -> Self {
        let mut focus = Self::new(id);

        if let Some(icon) = fields.get("icon").and_then(coerce::string) {
            focus.icon = icon;
        }
        if let Some(prereqs) = fields.get("prerequisite").and_then(coerce::id_set) {
            focus.prerequisite = prereqs;
        }
        if let Some(value) = fields.get("relative_position_id") {
            focus.relative_position_id = coerce::optional_id(value);
        }
        if let Some(cost) = fields.get("cost").and_then(coerce::integer) {
            focus.cost = cost;
        }
        if let Some(x) = fields.get("x").and_then(coerce::integer) {
            focus.x = x;
        }
        if let Some(y) = fields.get("y").and_then(coerce::integer) {
            focus.y = y;
        }
        if let Some(reward) = fields.get("completion_reward").and_then(coerce::string) {
            focus.completion_reward = reward;
        }
        if let Some(name) = fields.get("name").and_then(coerce::string) {
            focus.name = name;
        }
        if let Some(description) = fields.get("description").and_then(coerce::string) {
            focus.description = description;
        }

        focus
    }

    /// Serializes this focus to a flat field mapping.
    ///
    /// Exact inverse of [`Focus::from_fields`] for every representable
    /// field; used by the store adapter for lossless persistence.
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("id".into(), Value::String(self.id.resolve()));
        fields.insert("icon".into(), Value::String(self.icon.clone()));
        fields.insert(
            "prerequisite".into(),
            Value::Array(
                self.prerequisite
                    .iter()
                    .map(|p| Value::String(p.resolve()))
                    .collect(),
            ),
        );
        fields.insert(
            "relative_position_id".into(),
            match self.relative_position_id {
                Some(anchor) => Value::String(anchor.resolve()),
                None => Value::Null,
            },
        );
        fields.insert("cost".into(), Value::from(self.cost));
        fields.insert("x".into(), Value::from(self.x));
        fields.insert("y".into(), Value::from(self.y));
        fields.insert(
            "completion_reward".into(),
            Value::String(self.completion_reward.clone()),
        );
        fields.insert("name".into(), Value::String(self.name.clone()));
        fields.insert("description".into(), Value::String(self.description.clone()));
        fields
    }
}
