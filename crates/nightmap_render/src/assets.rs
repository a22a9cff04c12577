//! Image asset naming and lookup.
//!
//! Every layer of a map is a PNG in one materials directory, named after
//! the code that selects it, e.g. `nightlord_3.png` or `Construct_49410.png`.

use std::{
	cell::RefCell,
	collections::HashMap,
	path::{Path, PathBuf},
};

use image::RgbaImage;
use log::debug;

use crate::error::AssetError;

/// File name of the day marker sprite
pub const MARKER_FILE_NAME: &str = "night_circle.png";

/// Identifies one image asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
	/// Category background
	Background(i64),
	/// Frenzy event overlay, by event pattern code
	Frenzy(i64),
	/// Night lord overlay
	NightLord(i64),
	/// Treasure overlay, by combined treasure code
	Treasure(i64),
	/// Cavern day-2 overlay, by day-2 location
	Day2(i64),
	/// Reward overlay
	Reward(i64),
	/// Construct icon, by construct type
	Construct(i64),
	/// Start marker overlay
	Start(i64),
	/// Day marker sprite
	Marker,
}

impl AssetKey {
	/// Returns the file name of the asset inside the materials directory.
	pub fn file_name(&self) -> String {
		match self {
			Self::Background(code) => format!("background_{code}.png"),
			Self::Frenzy(code) => format!("Frenzy_{code}.png"),
			Self::NightLord(code) => format!("nightlord_{code}.png"),
			Self::Treasure(code) => format!("treasure_{code}.png"),
			Self::Day2(code) => format!("day2_{code}.png"),
			Self::Reward(code) => format!("RotRew_{code}.png"),
			Self::Construct(code) => format!("Construct_{code}.png"),
			Self::Start(code) => format!("Start_{code}.png"),
			Self::Marker => MARKER_FILE_NAME.to_string(),
		}
	}
}

impl std::fmt::Display for AssetKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.file_name())
	}
}

/// Source of decoded RGBA assets.
pub trait AssetStore {
	/// Loads an asset as an RGBA image.
	fn load(&self, key: &AssetKey) -> Result<RgbaImage, AssetError>;
}

impl<T: AssetStore + ?Sized> AssetStore for &T {
	fn load(&self, key: &AssetKey) -> Result<RgbaImage, AssetError> {
		(**self).load(key)
	}
}

/// Assets read from a materials directory on disk.
#[derive(Debug, Clone)]
pub struct DirAssets {
	root: PathBuf,
}

impl DirAssets {
	/// Creates a store rooted at the materials directory.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	/// Returns the materials directory.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Returns the full path of an asset.
	pub fn path_of(&self, key: &AssetKey) -> PathBuf {
		self.root.join(key.file_name())
	}
}

impl AssetStore for DirAssets {
	fn load(&self, key: &AssetKey) -> Result<RgbaImage, AssetError> {
		let path = self.path_of(key);
		if !path.is_file() {
			return Err(AssetError::Missing(path.display().to_string()));
		}

		debug!("Loading asset {}", path.display());
		image::open(&path).map(image::DynamicImage::into_rgba8).map_err(|source| {
			AssetError::Decode {
				name: path.display().to_string(),
				source,
			}
		})
	}
}

/// Assets held in memory.
///
/// Every lookup is recorded, including failed ones, so callers can check
/// which layers a composition asked for and in which order.
#[derive(Debug, Default)]
pub struct MemoryAssets {
	images: HashMap<String, RgbaImage>,
	requests: RefCell<Vec<String>>,
}

impl MemoryAssets {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces an asset.
	pub fn insert(&mut self, key: AssetKey, image: RgbaImage) -> &mut Self {
		self.images.insert(key.file_name(), image);
		self
	}

	/// Builder form of [`MemoryAssets::insert`].
	pub fn with(mut self, key: AssetKey, image: RgbaImage) -> Self {
		self.insert(key, image);
		self
	}

	/// Returns the file names requested so far, in request order.
	pub fn requests(&self) -> Vec<String> {
		self.requests.borrow().clone()
	}

	/// Returns `true` if the asset was requested at least once.
	pub fn was_requested(&self, key: &AssetKey) -> bool {
		let name = key.file_name();
		self.requests.borrow().iter().any(|r| *r == name)
	}

	/// Forgets the recorded requests.
	pub fn clear_requests(&self) {
		self.requests.borrow_mut().clear();
	}
}

impl AssetStore for MemoryAssets {
	fn load(&self, key: &AssetKey) -> Result<RgbaImage, AssetError> {
		let name = key.file_name();
		self.requests.borrow_mut().push(name.clone());
		self.images.get(&name).cloned().ok_or(AssetError::Missing(name))
	}
}
