//! Prelude module for `nightmap_types`.
//!
//! This module provides a convenient way to import commonly used types and functions.

// Pattern table
#[doc(inline)]
pub use crate::table::{DayPhase, MapRecord, open_records, read_records};

// Coordinates
#[doc(inline)]
pub use crate::table::{CoordinateTable, Point, transform};

// Construct table
#[doc(inline)]
pub use crate::table::{ConstructBuckets, ConstructPlacement, open_placements, read_placements};

// Names, shared lookups and errors
#[doc(inline)]
pub use crate::table::{MapTables, NameLookup, TableError};

// Re-export the rule tables for advanced usage
#[doc(inline)]
pub use crate::rules;
