//! Map pattern table: one row per generated map image.

use std::{io::Read, path::Path};

use csv::StringRecord;
use log::warn;

use super::{
	cell::{parse_code, require_code},
	error::TableError,
};

/// Header names of the pattern table.
pub mod columns {
	/// Map pattern ID
	pub const ID: &str = "ID";
	/// Category code selecting the background and rule set
	pub const CATEGORY: &str = "Special";
	/// Event flag
	pub const EVENT_FLAG: &str = "EventFlag";
	/// Event pattern code, selects the frenzy overlay
	pub const EVENT_PATTERN: &str = "EvPatFlag";
	/// Event value code, named in some captions
	pub const EVENT_VALUE: &str = "Event_30*0";
	/// Night lord code
	pub const NIGHT_LORD: &str = "NightLord";
	/// Treasure code
	pub const TREASURE: &str = "Treasure_800";
	/// Reward code
	pub const REWARD: &str = "RotRew_500";
	/// Day-1 boss location
	pub const DAY1_LOCATION: &str = "Day1Loc";
	/// Day-1 boss code
	pub const DAY1_BOSS: &str = "Day1Boss";
	/// Day-2 boss location
	pub const DAY2_LOCATION: &str = "Day2Loc";
	/// Day-2 boss code
	pub const DAY2_BOSS: &str = "Day2Boss";
	/// Start marker code
	pub const START: &str = "Start_190";

	/// Position of the day-1 extra name code. The extra columns are unnamed
	/// in exports, so they are addressed by position.
	pub const DAY1_EXTRA_POSITION: usize = 14;
	/// Position of the day-2 extra name code
	pub const DAY2_EXTRA_POSITION: usize = 15;
}

/// Night boss data of one day phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayPhase {
	/// Location index of the boss circle
	pub location: Option<i64>,
	/// Boss code, named in the marker label
	pub boss: Option<i64>,
	/// Extra name code shown under the marker label
	pub extra: Option<i64>,
}

/// One row of the pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapRecord {
	/// Map pattern ID, also the owner key of construct placements
	pub id: i64,
	/// Category code
	pub category: i64,
	/// Event flag
	pub event_flag: i64,
	/// Event pattern code
	pub event_pattern: Option<i64>,
	/// Event value code
	pub event_value: Option<i64>,
	/// Night lord code
	pub night_lord: Option<i64>,
	/// Treasure code
	pub treasure: Option<i64>,
	/// Reward code; `0` means no reward overlay
	pub reward: Option<i64>,
	/// Start marker code
	pub start: Option<i64>,
	/// Day-1 night boss
	pub day1: DayPhase,
	/// Day-2 night boss. Its location also selects the cavern day-2 overlay.
	pub day2: DayPhase,
}

impl MapRecord {
	/// Returns both day phases with their 1-based day number.
	pub fn day_phases(&self) -> [(u8, &DayPhase); 2] {
		[(1, &self.day1), (2, &self.day2)]
	}

	/// Returns the combined treasure overlay code, `treasure * 10 + category`.
	///
	/// `None` when the treasure cell is blank or the code does not fit.
	pub fn treasure_code(&self) -> Option<i64> {
		self.treasure
			.and_then(|treasure| treasure.checked_mul(10))
			.and_then(|code| code.checked_add(self.category))
	}

	/// Returns the reward code when a reward overlay should be drawn.
	pub fn reward_code(&self) -> Option<i64> {
		self.reward.filter(|&reward| reward != 0)
	}
}

/// Resolved column positions of a pattern table header.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
	id: usize,
	category: usize,
	event_flag: usize,
	event_pattern: usize,
	event_value: usize,
	night_lord: usize,
	treasure: usize,
	reward: usize,
	day1_location: usize,
	day1_boss: usize,
	day2_location: usize,
	day2_boss: usize,
	start: usize,
}

impl ColumnIndex {
	fn from_header(header: &StringRecord) -> Result<Self, TableError> {
		let find = |name: &'static str| -> Result<usize, TableError> {
			header
				.iter()
				.position(|h| h.trim() == name)
				.ok_or(TableError::MissingColumn(name))
		};

		Ok(Self {
			id: find(columns::ID)?,
			category: find(columns::CATEGORY)?,
			event_flag: find(columns::EVENT_FLAG)?,
			event_pattern: find(columns::EVENT_PATTERN)?,
			event_value: find(columns::EVENT_VALUE)?,
			night_lord: find(columns::NIGHT_LORD)?,
			treasure: find(columns::TREASURE)?,
			reward: find(columns::REWARD)?,
			day1_location: find(columns::DAY1_LOCATION)?,
			day1_boss: find(columns::DAY1_BOSS)?,
			day2_location: find(columns::DAY2_LOCATION)?,
			day2_boss: find(columns::DAY2_BOSS)?,
			start: find(columns::START)?,
		})
	}

	fn parse(&self, record: &StringRecord, row: usize) -> Result<MapRecord, TableError> {
		let optional = |position: usize, name: &str| -> Result<Option<i64>, TableError> {
			match record.get(position) {
				Some(raw) => parse_code(raw, row, name),
				None => Ok(None),
			}
		};
		let required = |position: usize, name: &str| -> Result<i64, TableError> {
			require_code(record.get(position).unwrap_or_default(), row, name)
		};
		// -1 marks "no extra" in the source data
		let extra = |position: usize| -> Result<Option<i64>, TableError> {
			Ok(optional(position, &position.to_string())?.filter(|&code| code != -1))
		};

		Ok(MapRecord {
			id: required(self.id, columns::ID)?,
			category: required(self.category, columns::CATEGORY)?,
			event_flag: required(self.event_flag, columns::EVENT_FLAG)?,
			event_pattern: optional(self.event_pattern, columns::EVENT_PATTERN)?,
			event_value: optional(self.event_value, columns::EVENT_VALUE)?,
			night_lord: optional(self.night_lord, columns::NIGHT_LORD)?,
			treasure: optional(self.treasure, columns::TREASURE)?,
			reward: optional(self.reward, columns::REWARD)?,
			start: optional(self.start, columns::START)?,
			day1: DayPhase {
				location: optional(self.day1_location, columns::DAY1_LOCATION)?,
				boss: optional(self.day1_boss, columns::DAY1_BOSS)?,
				extra: extra(columns::DAY1_EXTRA_POSITION)?,
			},
			day2: DayPhase {
				location: optional(self.day2_location, columns::DAY2_LOCATION)?,
				boss: optional(self.day2_boss, columns::DAY2_BOSS)?,
				extra: extra(columns::DAY2_EXTRA_POSITION)?,
			},
		})
	}
}

/// Reads the pattern table from CSV data with a header row.
///
/// Rows that cannot be parsed are logged and skipped; the remaining records
/// keep their source order.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<MapRecord>, TableError> {
	let mut csv = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
	let index = ColumnIndex::from_header(csv.headers()?)?;
	let mut records = Vec::new();

	for (row, record) in csv.records().enumerate() {
		let record = record?;
		match index.parse(&record, row) {
			Ok(parsed) => records.push(parsed),
			Err(e) if e.is_row_error() => warn!("Skipping pattern row: {}", e),
			Err(e) => return Err(e),
		}
	}

	Ok(records)
}

/// Opens a pattern CSV file.
pub fn open_records(path: impl AsRef<Path>) -> Result<Vec<MapRecord>, TableError> {
	let file = std::fs::File::open(path)?;
	read_records(file)
}
