//! Error types for asset loading, fonts, composition and output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading an image asset
#[derive(Debug, Error)]
pub enum AssetError {
	/// The asset file does not exist
	#[error("Asset not found: {0}")]
	Missing(String),

	/// The asset exists but could not be decoded as an image
	#[error("Cannot decode asset {name}: {source}")]
	Decode {
		/// Asset file name
		name: String,
		/// Underlying decoder error
		#[source]
		source: image::ImageError,
	},

	/// A full-canvas overlay does not match the canvas size
	#[error("Asset {name} is {actual:?}, canvas is {expected:?}")]
	SizeMismatch {
		/// Asset file name
		name: String,
		/// Canvas dimensions
		expected: (u32, u32),
		/// Asset dimensions
		actual: (u32, u32),
	},
}

/// Errors that can occur when loading a font file
#[derive(Debug, Error)]
pub enum FontError {
	/// The font file could not be read
	#[error("Cannot read font {path}: {source}")]
	Io {
		/// Font file path
		path: PathBuf,
		/// Underlying IO error
		#[source]
		source: std::io::Error,
	},

	/// The font file is not a valid TrueType/OpenType font
	#[error("Invalid font {path}: {source}")]
	Invalid {
		/// Font file path
		path: PathBuf,
		/// Parser error
		#[source]
		source: ab_glyph::InvalidFont,
	},
}

/// Errors that abort the composition of a single record
#[derive(Debug, Error)]
pub enum ComposeError {
	/// The category background could not be loaded
	#[error("Background of category {category} unavailable: {source}")]
	Background {
		/// Record category
		category: i64,
		/// Asset failure
		#[source]
		source: AssetError,
	},
}

/// Errors that can occur when writing output images
#[derive(Debug, Error)]
pub enum OutputError {
	/// The output directory could not be created
	#[error("Cannot create output directory {path}: {source}")]
	CreateDir {
		/// Directory path
		path: PathBuf,
		/// Underlying IO error
		#[source]
		source: std::io::Error,
	},

	/// The image could not be encoded or written
	#[error("Cannot save {path}: {source}")]
	Save {
		/// Output file path
		path: PathBuf,
		/// Encoder error
		#[source]
		source: image::ImageError,
	},
}
