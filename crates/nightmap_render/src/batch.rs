//! Batch generation over the pattern table.

use std::path::{Path, PathBuf};

use log::{error, info};
use nightmap_types::table::MapRecord;
use serde::Serialize;

use crate::{
	assets::AssetStore,
	compose::Composer,
	error::OutputError,
	output::{self, DEFAULT_DOWNSCALE},
};

/// Selects which pattern rows are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowFilter {
	/// Number of leading rows to skip
	pub skip_rows: usize,
	/// Only generate rows of this category
	pub only_category: Option<i64>,
}

impl RowFilter {
	/// Returns `true` if the row at `index` is generated.
	pub fn accepts(&self, index: usize, record: &MapRecord) -> bool {
		index >= self.skip_rows && self.only_category.is_none_or(|category| record.category == category)
	}
}

/// A record that produced no image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
	/// Map pattern ID
	pub id: i64,
	/// Why no image was written
	pub reason: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
	/// IDs of written maps, in generation order
	pub generated: Vec<i64>,
	/// Records that failed
	pub skipped: Vec<SkippedRecord>,
	/// Number of rows left out by the row filter
	pub filtered: usize,
}

/// Generates and saves one image per accepted record.
#[derive(Debug)]
pub struct Batch<'a, A> {
	composer: &'a Composer<A>,
	output_dir: PathBuf,
	downscale: u32,
	filter: RowFilter,
}

impl<'a, A: AssetStore> Batch<'a, A> {
	/// Creates a batch writing into `output_dir`.
	pub fn new(composer: &'a Composer<A>, output_dir: impl Into<PathBuf>) -> Self {
		Self {
			composer,
			output_dir: output_dir.into(),
			downscale: DEFAULT_DOWNSCALE,
			filter: RowFilter::default(),
		}
	}

	/// Sets the downsampling factor.
	pub fn downscale(mut self, factor: u32) -> Self {
		self.downscale = factor;
		self
	}

	/// Sets the row filter.
	pub fn filter(mut self, filter: RowFilter) -> Self {
		self.filter = filter;
		self
	}

	/// Returns the output directory.
	pub fn output_dir(&self) -> &Path {
		&self.output_dir
	}

	/// Generates every accepted record. A failing record is logged and
	/// reported; the run always continues with the next one.
	///
	/// # Errors
	///
	/// Returns an error only if the output directory cannot be created.
	pub fn run(&self, records: &[MapRecord]) -> Result<RunReport, OutputError> {
		std::fs::create_dir_all(&self.output_dir).map_err(|source| OutputError::CreateDir {
			path: self.output_dir.clone(),
			source,
		})?;

		info!("Generating maps into {}", self.output_dir.display());
		let mut report = RunReport::default();

		for (index, record) in records.iter().enumerate() {
			if !self.filter.accepts(index, record) {
				report.filtered += 1;
				continue;
			}

			match self.generate(record) {
				Ok(path) => {
					info!("Map {} written to {}", record.id, path.display());
					report.generated.push(record.id);
					if report.generated.len() % 10 == 0 {
						info!("{} maps generated", report.generated.len());
					}
				}
				Err(reason) => {
					error!("Map {} skipped: {}", record.id, reason);
					report.skipped.push(SkippedRecord {
						id: record.id,
						reason,
					});
				}
			}
		}

		info!(
			"Done: {} generated, {} skipped, {} filtered",
			report.generated.len(),
			report.skipped.len(),
			report.filtered
		);
		Ok(report)
	}

	fn generate(&self, record: &MapRecord) -> Result<PathBuf, String> {
		let image = self.composer.render(record, self.downscale).map_err(|e| e.to_string())?;
		let path = output::output_path(&self.output_dir, record.id);
		output::save(&image, &path).map_err(|e| e.to_string())?;
		Ok(path)
	}
}
