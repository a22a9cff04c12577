//! Map image composition for the `nightmap-rs` project.
//!
//! # Pipeline
//!
//! - [`compose::Composer`] stacks the image layers of one [`MapRecord`](nightmap_types::table::MapRecord)
//!   and queues its labels
//! - [`annotate::Annotator`] draws the queued labels in one final pass
//! - [`batch::Batch`] runs the composer over the pattern table and writes downsampled PNGs
//!
//! Assets come from an [`assets::AssetStore`]: [`assets::DirAssets`] for a
//! materials directory, [`assets::MemoryAssets`] for images held in memory.
//!
//! # Examples
//!
//! ```no_run
//! use nightmap_render::prelude::*;
//! use nightmap_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tables = MapTables::new(
//!     CoordinateTable::open("coords.csv")?,
//!     NameLookup::open("NAME.csv")?,
//!     &open_placements("CONSTRUCT.csv")?,
//! );
//! let composer = Composer::new(DirAssets::new("materials"), tables, FontSet::builtin(), ComposeOptions::default());
//! let report = Batch::new(&composer, "out").run(&open_records("MAP_PATTERN.csv")?)?;
//! println!("{} maps written", report.generated.len());
//! # Ok(())
//! # }
//! ```

mod error;

pub mod annotate;
pub mod assets;
pub mod batch;
pub mod blend;
pub mod compose;
pub mod font;
pub mod output;

pub use error::{AssetError, ComposeError, FontError, OutputError};

/// `use nightmap_render::prelude::*;` to import commonly used items.
pub mod prelude {
	#[doc(inline)]
	pub use crate::{
		annotate::{Annotations, Annotator, TextAnnotation, TextStyle},
		assets::{AssetKey, AssetStore, DirAssets, MemoryAssets},
		batch::{Batch, RowFilter, RunReport, SkippedRecord},
		compose::{ComposeOptions, Composer},
		error::{AssetError, ComposeError, FontError, OutputError},
		font::{Font, FontRole, FontSet, FontSpec, TextBox},
	};
}
