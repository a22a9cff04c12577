//! Pixel blending primitives.
//!
//! Two ways of putting one image onto another are used:
//!
//! - **Masked paste**: every channel, alpha included, is mixed between
//!   destination and source by a mask value. Sprites use their own alpha as
//!   the mask; text uses glyph coverage.
//! - **Alpha composite**: Porter-Duff "over" of a full-canvas layer.

use image::{Rgba, RgbaImage, imageops};

use crate::error::AssetError;

/// Mixes `src` into `dst` by `mask` (0 keeps `dst`, 255 replaces it).
#[inline]
pub fn blend_pixel(dst: &mut Rgba<u8>, src: Rgba<u8>, mask: u8) {
	match mask {
		0 => {}
		255 => *dst = src,
		m => {
			let m = m as u32;
			for (d, s) in dst.0.iter_mut().zip(src.0) {
				*d = ((s as u32 * m + *d as u32 * (255 - m) + 127) / 255) as u8;
			}
		}
	}
}

/// Converts glyph coverage in `0.0..=1.0` to a mask value.
#[inline]
pub fn coverage_mask(coverage: f32) -> u8 {
	(coverage.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Pastes `sprite` with its top-left corner at `(x, y)`, using the sprite's
/// alpha channel as the paste mask. Parts outside the canvas are clipped.
pub fn paste_masked(canvas: &mut RgbaImage, sprite: &RgbaImage, x: i64, y: i64) {
	let (canvas_w, canvas_h) = (canvas.width() as i64, canvas.height() as i64);

	for (sx, sy, pixel) in sprite.enumerate_pixels() {
		let tx = x + sx as i64;
		let ty = y + sy as i64;
		if tx < 0 || ty < 0 || tx >= canvas_w || ty >= canvas_h {
			continue;
		}
		blend_pixel(canvas.get_pixel_mut(tx as u32, ty as u32), *pixel, pixel.0[3]);
	}
}

/// Alpha-composites a full-canvas layer over the canvas.
///
/// The layer must have the canvas dimensions.
pub fn composite_full(canvas: &mut RgbaImage, layer: &RgbaImage, name: &str) -> Result<(), AssetError> {
	if layer.dimensions() != canvas.dimensions() {
		return Err(AssetError::SizeMismatch {
			name: name.to_string(),
			expected: canvas.dimensions(),
			actual: layer.dimensions(),
		});
	}

	imageops::overlay(canvas, layer, 0, 0);
	Ok(())
}
