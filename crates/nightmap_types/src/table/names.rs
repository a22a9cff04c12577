//! Code to display name lookup.

use std::{borrow::Cow, collections::HashMap, io::Read, path::Path};

use log::warn;

use super::{
	cell::{positional, require_code},
	error::TableError,
};

/// Display names for bosses, construct types, events and the like.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameLookup {
	names: HashMap<i64, String>,
}

impl NameLookup {
	/// Creates an empty lookup.
	pub fn new() -> Self {
		Self::default()
	}

	/// Opens a name CSV file.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, TableError> {
		let file = std::fs::File::open(path)?;
		Self::from_reader(file)
	}

	/// Reads the two-column, header-less name table.
	pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
		let mut csv = csv::ReaderBuilder::new()
			.has_headers(false)
			.flexible(true)
			.from_reader(reader);
		let mut lookup = Self::new();

		for (row, record) in csv.records().enumerate() {
			let record = record?;
			let parsed = positional(&record, row, 0)
				.and_then(|raw| require_code(raw, row, "0"))
				.and_then(|code| Ok((code, positional(&record, row, 1)?)));
			match parsed {
				Ok((code, name)) => {
					lookup.insert(code, name);
				}
				Err(e) if e.is_row_error() => warn!("Skipping name row: {}", e),
				Err(e) => return Err(e),
			}
		}

		Ok(lookup)
	}

	/// Inserts or replaces a display name.
	pub fn insert(&mut self, code: i64, name: impl Into<String>) -> Option<String> {
		self.names.insert(code, name.into())
	}

	/// Returns the display name of a code.
	pub fn get(&self, code: i64) -> Option<&str> {
		self.names.get(&code).map(String::as_str)
	}

	/// Returns the display name of an optional code.
	pub fn get_opt(&self, code: Option<i64>) -> Option<&str> {
		code.and_then(|code| self.get(code))
	}

	/// Returns the display name, or the code itself when it has no name.
	pub fn name_or_code(&self, code: i64) -> Cow<'_, str> {
		match self.get(code) {
			Some(name) => Cow::Borrowed(name),
			None => Cow::Owned(code.to_string()),
		}
	}

	/// Returns the number of names.
	pub fn len(&self) -> usize {
		self.names.len()
	}

	/// Returns `true` if there are no names.
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

impl<S: Into<String>> FromIterator<(i64, S)> for NameLookup {
	fn from_iter<T: IntoIterator<Item = (i64, S)>>(iter: T) -> Self {
		Self {
			names: iter.into_iter().map(|(code, name)| (code, name.into())).collect(),
		}
	}
}
