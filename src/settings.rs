//! Layered run configuration.
//!
//! Sources, lowest priority first:
//!
//! 1. built-in defaults
//! 2. TOML file (optional)
//! 3. environment variables `NIGHTMAP__<SECTION>__<KEY>`, e.g. `NIGHTMAP__PATHS__OUTPUT`
//! 4. command-line flags, applied by the caller
//!
//! ```toml
//! [input]
//! patterns = "MAP_PATTERN.csv"
//!
//! [fonts.marker]
//! path = "SmileySans-Oblique.ttf"
//! size = 95
//!
//! [filter]
//! only_category = 4
//! ```

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use nightmap_rs::nightmap_render::{
	batch::RowFilter,
	compose::{ComposeOptions, DEFAULT_CAPTION_POSITION, DEFAULT_CAPTION_PREFIX},
	font::{FontSet, FontSpec},
	output::DEFAULT_DOWNSCALE,
};
use serde::Deserialize;

/// Environment variable prefix
const ENV_PREFIX: &str = "NIGHTMAP";

/// Input table paths.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputSettings {
	/// Pattern table, one row per map
	pub patterns: PathBuf,
	/// Location coordinate table
	pub coordinates: PathBuf,
	/// Construct placement table
	pub constructs: PathBuf,
	/// Header-less name table
	pub names: PathBuf,
}

impl Default for InputSettings {
	fn default() -> Self {
		Self {
			patterns: PathBuf::from("MAP_PATTERN.csv"),
			coordinates: PathBuf::from("坐标.csv"),
			constructs: PathBuf::from("CONSTRUCT.csv"),
			names: PathBuf::from("NAME.csv"),
		}
	}
}

/// Asset and output directories.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathSettings {
	/// Materials directory holding every image asset
	pub materials: PathBuf,
	/// Output directory for generated maps
	pub output: PathBuf,
}

impl Default for PathSettings {
	fn default() -> Self {
		Self {
			materials: PathBuf::from("素材"),
			output: PathBuf::from("输出"),
		}
	}
}

/// Default font files: caption, marker, construct, floor.
const DEFAULT_FONT_FILES: [&str; 4] = [
	"AiDianGanFengXingKai-2.ttf",
	"SmileySans-Oblique.ttf",
	"SmileySans-Oblique.ttf",
	"SmileySans-Oblique.ttf",
];

/// Font of one label role. Each unset field keeps its role default on its own.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct FontEntry {
	/// Font file; an empty path selects the built-in font
	pub path: Option<PathBuf>,
	/// Em size in pixels
	pub size: Option<f32>,
}

impl FontEntry {
	fn spec(&self, default_path: &str, default_size: f32) -> FontSpec {
		let path = match &self.path {
			Some(path) if path.as_os_str().is_empty() => None,
			Some(path) => Some(path.clone()),
			None => Some(PathBuf::from(default_path)),
		};
		FontSpec::new(path, self.size.unwrap_or(default_size))
	}
}

/// Fonts of the four label roles.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct FontSettings {
	/// Event caption
	pub caption: FontEntry,
	/// Day marker labels
	pub marker: FontEntry,
	/// Construct labels
	pub construct: FontEntry,
	/// Tower floor labels
	pub floor: FontEntry,
}

impl FontSettings {
	/// Resolves the four font specs against the role default files and sizes.
	pub fn specs(&self) -> [FontSpec; 4] {
		let entries = [&self.caption, &self.marker, &self.construct, &self.floor];
		std::array::from_fn(|role| entries[role].spec(DEFAULT_FONT_FILES[role], FontSet::DEFAULT_SIZES[role]))
	}

	/// Loads the font set, falling back to the built-in font per role.
	pub fn load(&self) -> FontSet {
		let [caption, marker, construct, floor] = self.specs();
		FontSet::load(&caption, &marker, &construct, &floor)
	}
}

/// Output rendering options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
	/// Linear downsampling factor of saved maps
	pub downscale: u32,
	/// Caption origin `[x, y]` on the full-resolution canvas
	pub caption_position: [i64; 2],
	/// Text before the event name
	pub caption_prefix: String,
}

impl Default for RenderSettings {
	fn default() -> Self {
		Self {
			downscale: DEFAULT_DOWNSCALE,
			caption_position: [DEFAULT_CAPTION_POSITION.0, DEFAULT_CAPTION_POSITION.1],
			caption_prefix: DEFAULT_CAPTION_PREFIX.to_string(),
		}
	}
}

impl RenderSettings {
	/// Returns the composer options.
	pub fn compose_options(&self) -> ComposeOptions {
		let [x, y] = self.caption_position;
		ComposeOptions {
			caption_position: (x, y),
			caption_prefix: self.caption_prefix.clone(),
		}
	}
}

/// Row selection. Everything is generated by default.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
	/// Number of leading pattern rows to skip
	pub skip_rows: usize,
	/// Only generate maps of this category
	pub only_category: Option<i64>,
}

impl FilterSettings {
	/// Returns the batch row filter.
	pub fn row_filter(&self) -> RowFilter {
		RowFilter {
			skip_rows: self.skip_rows,
			only_category: self.only_category,
		}
	}
}

/// Complete run configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Input tables
	pub input: InputSettings,
	/// Directories
	pub paths: PathSettings,
	/// Label fonts
	pub fonts: FontSettings,
	/// Rendering options
	pub render: RenderSettings,
	/// Row selection
	pub filter: FilterSettings,
}

impl Settings {
	/// Loads settings from an optional TOML file and the environment.
	pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
		let mut builder = Config::builder();
		if let Some(path) = path {
			builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
		}

		builder
			.add_source(
				Environment::with_prefix(ENV_PREFIX)
					.prefix_separator("__")
					.separator("__"),
			)
			.build()?
			.try_deserialize()
	}

	/// Parses settings from TOML text only.
	#[cfg(test)]
	pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
		Config::builder()
			.add_source(File::from_str(text, FileFormat::Toml))
			.build()?
			.try_deserialize()
	}
}
