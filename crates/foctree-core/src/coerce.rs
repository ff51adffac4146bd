//! Tolerant value coercion for loosely typed focus data.
//!
//! Persisted trees and hand-edited files carry JSON values whose types may
//! drift from what a field expects (a cost written as `"10"`, a position as
//! `2.0`). Every coercion here returns `Option`: `Some` when the value can
//! be read as the target type, `None` otherwise. Callers fall back to the
//! field default on `None`, so a single malformed field never rejects a
//! whole record.

use indexmap::IndexSet;
use log::trace;
use serde_json::Value;

use crate::identifier::FocusId;

/// Coerces a JSON value to an owned string.
///
/// Only genuine strings qualify. Numbers and other scalars are not
/// stringified, since that silently masks type confusion in the source
/// data.
pub fn string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        other => {
            trace!(value:% = other; "Not coercible to string");
            None
        }
    }
}

/// Coerces a JSON value to an `i32`.
///
/// Accepts integer numbers in range, floats with no fractional part, and
/// strings holding a plain base-10 integer.
pub fn integer(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).ok()
            } else if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
                    Some(f as i32)
                } else {
                    trace!(value:% = value; "Float not representable as i32");
                    None
                }
            } else {
                None
            }
        }
        Value::String(s) => s.trim().parse::<i32>().ok().or_else(|| {
            trace!(value = s.as_str(); "String not coercible to integer");
            None
        }),
        other => {
            trace!(value:% = other; "Not coercible to integer");
            None
        }
    }
}

/// Coerces a JSON value to an optional focus reference.
///
/// `null` and the empty string both mean "no reference" and map to `None`;
/// any other string becomes an id. Non-string scalars are rejected.
pub fn optional_id(value: &Value) -> Option<FocusId> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(FocusId::new(s)),
        other => {
            trace!(value:% = other; "Not coercible to focus reference");
            None
        }
    }
}

/// Coerces a JSON array of strings to an ordered id set.
///
/// Non-string elements and empty strings are skipped; duplicates collapse
/// to the first occurrence. A non-array value yields `None`.
pub fn id_set(value: &Value) -> Option<IndexSet<FocusId>> {
    let items = value.as_array()?;
    let mut set = IndexSet::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) if !s.is_empty() => {
                set.insert(FocusId::new(s));
            }
            other => {
                trace!(value:% = other; "Skipping non-id element in reference list");
            }
        }
    }
    Some(set)
}
