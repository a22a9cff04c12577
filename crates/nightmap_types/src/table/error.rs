//! Error types for table loading and parsing.

use thiserror::Error;

/// Errors that can occur when loading one of the input tables
#[derive(Debug, Error)]
pub enum TableError {
	/// A column required by the schema is not present in the header
	#[error("Missing column `{0}` in table header")]
	MissingColumn(&'static str),

	/// The row does not have enough cells for a positional column
	#[error("Row {row}: expected at least {expected} cells, got {actual}")]
	ShortRow {
		/// 0-based data row index
		row: usize,
		/// Required number of cells
		expected: usize,
		/// Actual number of cells
		actual: usize,
	},

	/// A cell could not be parsed as an integer code
	#[error("Row {row}, column `{column}`: invalid integer value {value:?}")]
	InvalidInteger {
		/// 0-based data row index
		row: usize,
		/// Column name or position
		column: String,
		/// Raw cell content
		value: String,
	},

	/// A cell could not be parsed as a coordinate
	#[error("Row {row}, column `{column}`: invalid coordinate value {value:?}")]
	InvalidCoordinate {
		/// 0-based data row index
		row: usize,
		/// Column name or position
		column: String,
		/// Raw cell content
		value: String,
	},

	/// A mandatory cell is empty
	#[error("Row {row}, column `{column}`: value is required")]
	MissingValue {
		/// 0-based data row index
		row: usize,
		/// Column name or position
		column: String,
	},

	/// CSV reader error
	#[error(transparent)]
	Csv(#[from] csv::Error),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl TableError {
	/// Returns `true` if the error concerns a single row and the table can
	/// continue loading past it.
	pub fn is_row_error(&self) -> bool {
		matches!(
			self,
			Self::ShortRow { .. }
				| Self::InvalidInteger { .. }
				| Self::InvalidCoordinate { .. }
				| Self::MissingValue { .. }
		)
	}
}
