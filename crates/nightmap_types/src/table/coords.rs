//! Location coordinate table and the cavern coordinate transform.

use std::{collections::HashMap, io::Read, path::Path};

use log::warn;

use super::{
	cell::{positional, require_code, require_coordinate},
	error::TableError,
};
use crate::rules::{self, CAVERN_CATEGORY, cavern};

/// Column holding the location index
const INDEX_COLUMN: usize = 0;

/// Column holding the raw x coordinate
const X_COLUMN: usize = 7;

/// Column holding the raw y coordinate
const Y_COLUMN: usize = 8;

/// A canvas position in pixels, before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
	/// Horizontal position
	pub x: f64,
	/// Vertical position
	pub y: f64,
}

impl Point {
	/// Creates a new point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Returns the point moved by `(dx, dy)`.
	pub fn translate(self, dx: f64, dy: f64) -> Self {
		Self {
			x: self.x + dx,
			y: self.y + dy,
		}
	}
}

impl std::fmt::Display for Point {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

/// Maps a raw cavern coordinate to its position on the cavern background.
///
/// Scales both axes, applies the base offset, and for underground locations
/// the additional lower-level shift. No rounding happens here.
pub fn transform(point: Point, location: i64) -> Point {
	let scaled = Point::new(point.x * cavern::SCALE, point.y * cavern::SCALE);
	let moved = scaled.translate(cavern::OFFSET.0, cavern::OFFSET.1);

	if rules::is_underground(location) {
		moved.translate(cavern::UNDERGROUND_SHIFT.0, cavern::UNDERGROUND_SHIFT.1)
	} else {
		moved
	}
}

/// Location index to raw coordinate lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateTable {
	points: HashMap<i64, Point>,
}

impl CoordinateTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Opens a coordinate CSV file.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, TableError> {
		let file = std::fs::File::open(path)?;
		Self::from_reader(file)
	}

	/// Reads a coordinate table from CSV data with a header row.
	///
	/// Rows that cannot be parsed are logged and skipped. A later row with
	/// the same index replaces the earlier one.
	pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
		let mut csv = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
		let mut table = Self::new();

		for (row, record) in csv.records().enumerate() {
			let record = record?;
			match Self::parse_row(&record, row) {
				Ok((index, point)) => {
					table.insert(index, point);
				}
				Err(e) if e.is_row_error() => warn!("Skipping coordinate row: {}", e),
				Err(e) => return Err(e),
			}
		}

		Ok(table)
	}

	fn parse_row(record: &csv::StringRecord, row: usize) -> Result<(i64, Point), TableError> {
		let index = require_code(positional(record, row, INDEX_COLUMN)?, row, "0")?;
		let x = require_coordinate(positional(record, row, X_COLUMN)?, row, "7")?;
		let y = require_coordinate(positional(record, row, Y_COLUMN)?, row, "8")?;
		Ok((index, Point::new(x, y)))
	}

	/// Inserts or replaces the raw coordinate of a location.
	pub fn insert(&mut self, location: i64, point: Point) -> Option<Point> {
		self.points.insert(location, point)
	}

	/// Returns the raw coordinate of a location.
	pub fn get(&self, location: i64) -> Option<Point> {
		self.points.get(&location).copied()
	}

	/// Returns `true` if the location index is known.
	pub fn contains(&self, location: i64) -> bool {
		self.points.contains_key(&location)
	}

	/// Resolves a location to its drawing position on a background of the
	/// given category.
	///
	/// The cavern transform is applied only for the cavern category; other
	/// categories use the raw coordinate as loaded.
	pub fn resolve(&self, location: i64, category: i64) -> Option<Point> {
		let point = self.get(location)?;
		if category == CAVERN_CATEGORY {
			Some(transform(point, location))
		} else {
			Some(point)
		}
	}

	/// Returns the number of known locations.
	pub fn len(&self) -> usize {
		self.points.len()
	}

	/// Returns `true` if the table is empty.
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}
}

impl FromIterator<(i64, Point)> for CoordinateTable {
	fn from_iter<T: IntoIterator<Item = (i64, Point)>>(iter: T) -> Self {
		Self {
			points: iter.into_iter().collect(),
		}
	}
}
