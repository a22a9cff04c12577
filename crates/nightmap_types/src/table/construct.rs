//! Construct placement table and the special/normal classifier.

use std::{collections::HashMap, io::Read, path::Path};

use log::warn;

use super::{
	cell::{positional, require_code},
	error::TableError,
};
use crate::rules;

/// Column layout of the construct table (column 0 is the row id).
mod columns {
	pub const MAP_ID: usize = 1;
	pub const KIND: usize = 2;
	pub const VISIBLE: usize = 3;
	pub const LOCATION: usize = 4;
}

/// One construct placed on one map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstructPlacement {
	/// Owning map pattern ID
	pub map_id: i64,
	/// Construct type code
	pub kind: i64,
	/// Visibility flag; only `1` is drawn
	pub visible: i64,
	/// Location index of the placement
	pub location: i64,
}

impl ConstructPlacement {
	/// Returns `true` if the placement takes part in drawing.
	pub fn is_visible(&self) -> bool {
		self.visible == 1
	}

	/// Returns `true` if the construct type is drawn in the special pass.
	pub fn is_special(&self) -> bool {
		rules::is_special_construct(self.kind)
	}
}

/// Reads construct placements from CSV data with a header row.
///
/// Rows that cannot be parsed are logged and skipped. Source order is kept.
pub fn read_placements<R: Read>(reader: R) -> Result<Vec<ConstructPlacement>, TableError> {
	let mut csv = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
	let mut placements = Vec::new();

	for (row, record) in csv.records().enumerate() {
		let record = record?;
		match parse_row(&record, row) {
			Ok(placement) => placements.push(placement),
			Err(e) if e.is_row_error() => warn!("Skipping construct row: {}", e),
			Err(e) => return Err(e),
		}
	}

	Ok(placements)
}

/// Opens a construct CSV file.
pub fn open_placements(path: impl AsRef<Path>) -> Result<Vec<ConstructPlacement>, TableError> {
	let file = std::fs::File::open(path)?;
	read_placements(file)
}

fn parse_row(record: &csv::StringRecord, row: usize) -> Result<ConstructPlacement, TableError> {
	let cell = |position: usize| -> Result<i64, TableError> {
		require_code(positional(record, row, position)?, row, &position.to_string())
	};

	Ok(ConstructPlacement {
		map_id: cell(columns::MAP_ID)?,
		kind: cell(columns::KIND)?,
		visible: cell(columns::VISIBLE)?,
		location: cell(columns::LOCATION)?,
	})
}

/// Visible construct placements split into the special and normal passes,
/// each grouped by owning map ID in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstructBuckets {
	special: HashMap<i64, Vec<ConstructPlacement>>,
	normal: HashMap<i64, Vec<ConstructPlacement>>,
}

impl ConstructBuckets {
	/// Classifies placements. Invisible placements are dropped.
	pub fn classify<'a>(placements: impl IntoIterator<Item = &'a ConstructPlacement>) -> Self {
		let mut buckets = Self::default();

		for placement in placements.into_iter().filter(|p| p.is_visible()) {
			let bucket = if placement.is_special() {
				&mut buckets.special
			} else {
				&mut buckets.normal
			};
			bucket.entry(placement.map_id).or_default().push(*placement);
		}

		buckets
	}

	/// Returns the special pass placements of a map.
	pub fn special(&self, map_id: i64) -> &[ConstructPlacement] {
		self.special.get(&map_id).map(Vec::as_slice).unwrap_or_default()
	}

	/// Returns the normal pass placements of a map.
	pub fn normal(&self, map_id: i64) -> &[ConstructPlacement] {
		self.normal.get(&map_id).map(Vec::as_slice).unwrap_or_default()
	}

	/// Iterates all placements of a map in drawing order: special pass
	/// first, then normal pass.
	pub fn drawing_order(&self, map_id: i64) -> impl Iterator<Item = &ConstructPlacement> {
		self.special(map_id).iter().chain(self.normal(map_id))
	}

	/// Returns the total number of classified placements.
	pub fn len(&self) -> usize {
		self.special.values().chain(self.normal.values()).map(Vec::len).sum()
	}

	/// Returns `true` if no placement was classified.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
