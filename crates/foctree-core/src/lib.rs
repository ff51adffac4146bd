//! Foctree Core Types and Definitions
//!
//! This crate provides the foundational types for focus trees. It includes:
//!
//! - **Identifiers**: Efficient string-interned focus identifiers
//!   ([`identifier::FocusId`])
//! - **Focus**: The focus entity with script-format field names
//!   ([`focus::Focus`])
//! - **Coercion**: Tolerant per-field value coercion for hand-edited data
//!   ([`coerce`] module)
//! - **Collection**: The id-keyed focus collection with referential cleanup
//!   ([`collection::FocusTree`])

pub mod coerce;
pub mod collection;
pub mod focus;
pub mod identifier;
