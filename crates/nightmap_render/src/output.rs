//! Output downsampling and file naming.

use std::path::{Path, PathBuf};

use image::{RgbaImage, imageops};

use crate::error::OutputError;

/// Default linear downsampling factor of saved maps
pub const DEFAULT_DOWNSCALE: u32 = 5;

/// Downsamples the canvas by an integer factor with a Lanczos filter.
///
/// A factor of 0 or 1 returns an unscaled copy. Each dimension is at least
/// one pixel.
pub fn downscale(canvas: &RgbaImage, factor: u32) -> RgbaImage {
	if factor <= 1 {
		return canvas.clone();
	}

	let width = (canvas.width() / factor).max(1);
	let height = (canvas.height() / factor).max(1);
	imageops::resize(canvas, width, height, imageops::FilterType::Lanczos3)
}

/// Returns the output file name of a map.
pub fn file_name(id: i64) -> String {
	format!("map_{id}.png")
}

/// Returns the output path of a map inside `dir`.
pub fn output_path(dir: &Path, id: i64) -> PathBuf {
	dir.join(file_name(id))
}

/// Saves an image as PNG.
pub fn save(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
	image
		.save_with_format(path, image::ImageFormat::Png)
		.map_err(|source| OutputError::Save {
			path: path.to_path_buf(),
			source,
		})
}
