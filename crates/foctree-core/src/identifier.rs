//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`FocusId`] type with an efficient
//! string-interner based approach. Focus ids appear many times over in a
//! tree (as map keys, anchors, and prerequisite references), so interning
//! keeps them cheap to copy and compare.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for focus identifiers.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// Efficient focus identifier type using string interning.
///
/// Two `FocusId`s created from the same string are equal and share storage.
/// Identity is textual: renaming a focus means producing a *different*
/// `FocusId`, never mutating an existing one.
///
/// # Examples
///
/// ```
/// use foctree_core::identifier::FocusId;
///
/// let a = FocusId::new("GER_rearmament");
/// let b = FocusId::new("GER_rearmament");
/// assert_eq!(a, b);
/// assert_eq!(a, "GER_rearmament");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusId(DefaultSymbol);

impl FocusId {
    /// Creates a `FocusId` from a string slice, interning it.
    pub fn new(name: &str) -> Self {
        let mut interner = interner().lock().expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Returns the textual form of this identifier as an owned string.
    ///
    /// The interner is behind a lock, so the text cannot be borrowed out;
    /// callers that only need comparison or display should prefer
    /// `PartialEq<str>` or [`fmt::Display`].
    pub fn resolve(&self) -> String {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        interner
            .resolve(self.0)
            .expect("Symbol should exist in interner")
            .to_string()
    }
}

impl fmt::Display for FocusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl std::str::FromStr for FocusId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for FocusId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for FocusId {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for FocusId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for FocusId {
    /// Serializes as the plain identifier text, so persisted trees never
    /// depend on interner symbol values.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.resolve())
    }
}

impl<'de> Deserialize<'de> for FocusId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_interns() {
        let id1 = FocusId::new("GER_army");
        let id2 = FocusId::new("GER_army");
        let id3 = FocusId::new("GER_navy");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "GER_army");
    }

    #[test]
    fn test_resolve() {
        let id = FocusId::new("JAP_expand_the_navy");
        assert_eq!(id.resolve(), "JAP_expand_the_navy");
    }

    #[test]
    fn test_display() {
        let id = FocusId::new("display_focus");
        assert_eq!(format!("{}", id), "display_focus");
    }

    #[test]
    fn test_from_str_trait() {
        let id: FocusId = "converted".into();
        assert_eq!(id, FocusId::new("converted"));
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let id1 = FocusId::new("key1");
        let id2 = FocusId::new("key1");
        let id3 = FocusId::new("key2");

        let mut map = HashMap::new();
        map.insert(id1, "value1");
        map.insert(id3, "value2");

        assert_eq!(map.get(&id2), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_serde_round_trip() {
        let id = FocusId::new("GER_four_year_plan");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"GER_four_year_plan\"");

        let back: FocusId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
