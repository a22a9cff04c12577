//! This module is separated into its own crate to bundle the `nightmap` crates behind one facade, and should not be used directly.

/// `use nightmap_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use nightmap_render;
pub use nightmap_types;

// Re-export commonly used types at crate root
pub use nightmap_render::{
	assets::{AssetStore, DirAssets, MemoryAssets},
	batch::{Batch, RowFilter, RunReport},
	compose::{ComposeOptions, Composer},
	font::{FontSet, FontSpec},
};
pub use nightmap_types::table::{MapRecord, MapTables, TableError};
