//! Lossless JSON persistence for focus trees.
//!
//! The store format is a single JSON object mapping focus id to a flat
//! record of the model's fields. It is the editable working format: loads
//! are tolerant (sparse records and mistyped fields fall back to field
//! defaults), while saves always write every field, pretty-printed with
//! four-space indentation.
//!
//! The entry key is the authoritative identity. An `id` field inside a
//! record is written on save for readability but ignored on load, so a
//! hand-edited key wins over a stale embedded id.

use std::{fs, path::Path};

use log::{info, warn};
use serde::Serialize;
use serde_json::{Map, Serializer, Value, ser::PrettyFormatter};

use foctree_core::{collection::FocusTree, focus::Focus, identifier::FocusId};

use crate::error::FoctreeError;

/// Serialize a tree to the store's JSON text.
pub fn to_json_string(tree: &FocusTree) -> Result<String, FoctreeError> {
    let mut records = Map::new();
    for focus in tree.iter() {
        records.insert(focus.id().resolve(), Value::Object(focus.to_fields()));
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    Value::Object(records).serialize(&mut serializer)?;
    Ok(String::from_utf8(buf).expect("serde_json writes valid UTF-8"))
}

/// Deserialize a tree from the store's JSON text.
///
/// Entries whose value is not an object are skipped with a warning;
/// everything else goes through the model's per-field coercion.
pub fn from_json_str(data: &str) -> Result<FocusTree, FoctreeError> {
    let records: Map<String, Value> = serde_json::from_str(data)?;

    let mut tree = FocusTree::new();
    for (key, value) in &records {
        let Some(fields) = value.as_object() else {
            warn!(id = key.as_str(); "Skipping non-object store entry");
            continue;
        };
        let focus = Focus::from_fields_with_id(FocusId::new(key), fields);
        tree.insert_or_replace(focus);
    }
    Ok(tree)
}

/// Save a tree to a store file.
pub fn save(tree: &FocusTree, path: impl AsRef<Path>) -> Result<(), FoctreeError> {
    let path = path.as_ref();
    let json = to_json_string(tree)?;
    fs::write(path, json)?;
    info!(path:? = path, focuses = tree.len(); "Saved focus tree");
    Ok(())
}

/// Load a tree from a store file.
pub fn load(path: impl AsRef<Path>) -> Result<FocusTree, FoctreeError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    let tree = from_json_str(&data)?;
    info!(path:? = path, focuses = tree.len(); "Loaded focus tree");
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> FocusTree {
        let mut tree = FocusTree::new();

        let mut root = Focus::new(FocusId::new("root"));
        root.name = "The Root".to_string();
        root.cost = 0;
        root.completion_reward = String::new();
        tree.insert(root).unwrap();

        let mut child = Focus::new(FocusId::new("child"));
        child.prerequisite.insert(FocusId::new("root"));
        child.relative_position_id = Some(FocusId::new("root"));
        child.x = -4;
        child.y = 1;
        child.description = "line one\nline two".to_string();
        tree.insert(child).unwrap();

        tree
    }

    #[test]
    fn test_round_trip_preserves_everything() {
        let tree = sample_tree();
        let json = to_json_string(&tree).unwrap();
        let back = from_json_str(&json).unwrap();

        assert_eq!(tree, back);
    }

    #[test]
    fn test_output_uses_four_space_indent() {
        let json = to_json_string(&sample_tree()).unwrap();
        assert!(json.contains("\n    \"root\""));
        assert!(json.contains("\n        \"cost\": 0"));
    }

    #[test]
    fn test_key_wins_over_embedded_id() {
        let json = r#"{ "renamed": { "id": "stale_name", "cost": 4 } }"#;
        let tree = from_json_str(json).unwrap();

        assert_eq!(tree.len(), 1);
        let focus = tree.get(FocusId::new("renamed")).unwrap();
        assert_eq!(focus.id(), "renamed");
        assert_eq!(focus.cost, 4);
    }

    #[test]
    fn test_sparse_record_gets_defaults() {
        let tree = from_json_str(r#"{ "bare": {} }"#).unwrap();
        let focus = tree.get(FocusId::new("bare")).unwrap();

        assert_eq!(focus.icon, "GFX_focus_generic_question_mark");
        assert_eq!(focus.cost, 10);
        assert_eq!((focus.x, focus.y), (0, 0));
    }

    #[test]
    fn test_mistyped_field_falls_back() {
        let json = r#"{ "tolerant": { "cost": {"nested": true}, "x": "7" } }"#;
        let tree = from_json_str(json).unwrap();
        let focus = tree.get(FocusId::new("tolerant")).unwrap();

        assert_eq!(focus.cost, 10);
        assert_eq!(focus.x, 7);
    }

    #[test]
    fn test_non_object_entry_skipped() {
        let json = r#"{ "good": {}, "bad": 42 }"#;
        let tree = from_json_str(json).unwrap();

        assert_eq!(tree.len(), 1);
        assert!(tree.contains(FocusId::new("good")));
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert!(from_json_str("[1, 2, 3]").is_err());
        assert!(from_json_str("not json").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");

        let tree = sample_tree();
        save(&tree, &path).unwrap();
        let back = load(&path).unwrap();

        assert_eq!(tree, back);
    }

    #[test]
    fn test_entry_order_preserved() {
        let json = to_json_string(&sample_tree()).unwrap();
        assert!(json.find("\"root\"").unwrap() < json.find("\"child\"").unwrap());
    }
}
