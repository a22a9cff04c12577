//! Cell parsing shared by the table loaders.
//!
//! Spreadsheet exports often write integer codes as `1160.0`, and leave
//! optional cells blank. Both are accepted here.

use csv::StringRecord;

use super::error::TableError;

/// Parses an optional integer cell.
///
/// Blank cells and `nan` yield `None`. Integral floats are accepted.
pub(crate) fn parse_code(raw: &str, row: usize, column: &str) -> Result<Option<i64>, TableError> {
	let trimmed = raw.trim();
	if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
		return Ok(None);
	}

	if let Ok(value) = trimmed.parse::<i64>() {
		return Ok(Some(value));
	}

	match trimmed.parse::<f64>() {
		Ok(value) if value.fract() == 0.0 && value.is_finite() => Ok(Some(value as i64)),
		_ => Err(TableError::InvalidInteger {
			row,
			column: column.to_string(),
			value: raw.to_string(),
		}),
	}
}

/// Parses a mandatory integer cell.
pub(crate) fn require_code(raw: &str, row: usize, column: &str) -> Result<i64, TableError> {
	parse_code(raw, row, column)?.ok_or_else(|| TableError::MissingValue {
		row,
		column: column.to_string(),
	})
}

/// Parses a mandatory coordinate cell.
pub(crate) fn require_coordinate(raw: &str, row: usize, column: &str) -> Result<f64, TableError> {
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		return Err(TableError::MissingValue {
			row,
			column: column.to_string(),
		});
	}

	match trimmed.parse::<f64>() {
		Ok(value) if value.is_finite() => Ok(value),
		_ => Err(TableError::InvalidCoordinate {
			row,
			column: column.to_string(),
			value: raw.to_string(),
		}),
	}
}

/// Returns the cell at `position`, failing if the row is too short.
pub(crate) fn positional(record: &StringRecord, row: usize, position: usize) -> Result<&str, TableError> {
	record.get(position).ok_or(TableError::ShortRow {
		row,
		expected: position + 1,
		actual: record.len(),
	})
}
