//! This crate provides the data model of the `nightmap-rs` project.
//!
//! # Contents
//!
//! - **Tables**: CSV loaders for the pattern, coordinate, construct and name tables
//! - **Classifier**: splits construct placements into the special and normal drawing passes
//! - **Coordinate transform**: maps raw cavern coordinates onto the cavern background
//! - **Rules**: the fixed code sets of the map schema
//!
//! # Examples
//!
//! ```no_run
//! use nightmap_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let coords = CoordinateTable::open("coords.csv")?;
//! let names = NameLookup::open("NAME.csv")?;
//! let placements = open_placements("CONSTRUCT.csv")?;
//! let tables = MapTables::new(coords, names, &placements);
//!
//! for record in open_records("MAP_PATTERN.csv")? {
//!     for placement in tables.constructs.drawing_order(record.id) {
//!         println!("{} -> {:?}", placement.kind, tables.coords.resolve(placement.location, record.category));
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod rules;
pub mod table;

/// `use nightmap_types::prelude::*;` to import commonly used items.
pub mod prelude;
