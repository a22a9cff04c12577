//! Input tables of the map generator.
//!
//! Four CSV tables feed a run:
//!
//! - **Pattern table**: one [`MapRecord`] per output image
//! - **Coordinate table**: location index to raw canvas coordinate
//! - **Construct table**: construct placements per map, see [`ConstructBuckets`]
//! - **Name table**: code to display name, header-less

mod cell;
mod error;

pub mod construct;
pub mod coords;
pub mod names;
pub mod pattern;

pub use construct::{ConstructBuckets, ConstructPlacement, open_placements, read_placements};
pub use coords::{CoordinateTable, Point, transform};
pub use error::TableError;
pub use names::NameLookup;
pub use pattern::{DayPhase, MapRecord, open_records, read_records};

/// The read-only lookups shared by every record of a run.
#[derive(Debug, Clone, Default)]
pub struct MapTables {
	/// Location coordinates
	pub coords: CoordinateTable,
	/// Display names
	pub names: NameLookup,
	/// Classified construct placements
	pub constructs: ConstructBuckets,
}

impl MapTables {
	/// Bundles the lookups, classifying the raw construct placements.
	pub fn new(coords: CoordinateTable, names: NameLookup, placements: &[ConstructPlacement]) -> Self {
		Self {
			coords,
			names,
			constructs: ConstructBuckets::classify(placements),
		}
	}
}
