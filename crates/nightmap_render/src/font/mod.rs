//! Fonts for map labels.
//!
//! A label font is either an outline font (TrueType/OpenType, rendered with
//! `ab_glyph`) or the built-in bitmap font. Both expose the same two
//! operations: measuring the ink bounding box of a string, and visiting the
//! coverage of every pixel it paints.
//!
//! Coordinates are relative to the text origin: `x` grows from the left edge
//! of the first glyph cell, `y` from the top of the ascender line.

use std::path::{Path, PathBuf};

use ab_glyph::{Font as _, FontArc, GlyphId, OutlinedGlyph, PxScale, ScaleFont as _, point};
use log::{info, warn};

use crate::error::FontError;

pub mod builtin;

/// Ink bounding box of a laid-out string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBox {
	/// Left edge
	pub left: i32,
	/// Top edge
	pub top: i32,
	/// Right edge (exclusive)
	pub right: i32,
	/// Bottom edge (exclusive)
	pub bottom: i32,
}

impl TextBox {
	/// Box width in pixels
	pub fn width(&self) -> i32 {
		self.right - self.left
	}

	/// Box height in pixels
	pub fn height(&self) -> i32 {
		self.bottom - self.top
	}

	fn union(self, other: Self) -> Self {
		Self {
			left: self.left.min(other.left),
			top: self.top.min(other.top),
			right: self.right.max(other.right),
			bottom: self.bottom.max(other.bottom),
		}
	}
}

/// A sized label font.
#[derive(Clone)]
pub enum Font {
	/// Outline font at a pixel scale
	Outline {
		/// Parsed font data
		font: FontArc,
		/// Pixel scale derived from the em size
		scale: PxScale,
	},
	/// Built-in bitmap font at an integer magnification
	Builtin {
		/// Magnification of the 8x8 cells
		scale: u32,
	},
}

impl std::fmt::Debug for Font {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Outline { scale, .. } => write!(f, "Font::Outline({}px)", scale.y),
			Self::Builtin { scale } => write!(f, "Font::Builtin(x{scale})"),
		}
	}
}

impl Font {
	/// Opens an outline font with an em size of `size` pixels.
	pub fn open(path: impl AsRef<Path>, size: f32) -> Result<Self, FontError> {
		let path = path.as_ref();
		let data = std::fs::read(path).map_err(|source| FontError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let font = FontArc::try_from_vec(data).map_err(|source| FontError::Invalid {
			path: path.to_path_buf(),
			source,
		})?;
		Ok(Self::from_font(font, size))
	}

	/// Wraps parsed font data at an em size of `size` pixels.
	pub fn from_font(font: FontArc, size: f32) -> Self {
		// PxScale is the ascent-to-descent height; convert from em size.
		let units_per_em = font.units_per_em().unwrap_or(1000.0);
		let scale = PxScale::from(size * font.height_unscaled() / units_per_em);
		Self::Outline { font, scale }
	}

	/// The built-in bitmap font, magnified to roughly `size` pixels.
	pub fn builtin(size: f32) -> Self {
		let scale = (size / builtin::CELL as f32).round().max(1.0) as u32;
		Self::Builtin { scale }
	}

	/// Loads the font of a spec, falling back to the built-in font when no
	/// path is configured or the file cannot be loaded.
	pub fn load_or_builtin(spec: &FontSpec) -> Self {
		let Some(path) = spec.path.as_deref() else {
			info!("No font configured, using built-in font at {}px", spec.size);
			return Self::builtin(spec.size);
		};

		match Self::open(path, spec.size) {
			Ok(font) => {
				info!("Loaded font {} at {}px", path.display(), spec.size);
				font
			}
			Err(e) => {
				warn!("{}, using built-in font", e);
				Self::builtin(spec.size)
			}
		}
	}

	/// Returns `true` for the built-in bitmap font.
	pub fn is_builtin(&self) -> bool {
		matches!(self, Self::Builtin { .. })
	}

	fn outline(font: &FontArc, scale: PxScale, text: &str) -> Vec<OutlinedGlyph> {
		let scaled = font.as_scaled(scale);
		let mut caret = 0.0f32;
		let mut previous: Option<GlyphId> = None;
		let mut glyphs = Vec::new();

		for ch in text.chars().filter(|c| !c.is_control()) {
			let id = scaled.glyph_id(ch);
			if let Some(previous) = previous {
				caret += scaled.kern(previous, id);
			}
			let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
			caret += scaled.h_advance(id);
			previous = Some(id);

			if let Some(outlined) = font.outline_glyph(glyph) {
				glyphs.push(outlined);
			}
		}

		glyphs
	}

	/// Measures the ink bounding box of `text`. Empty or blank text yields
	/// an empty box at the origin.
	pub fn measure(&self, text: &str) -> TextBox {
		match self {
			Self::Outline { font, scale } => Self::outline(font, *scale, text)
				.iter()
				.map(|glyph| {
					let bounds = glyph.px_bounds();
					TextBox {
						left: bounds.min.x.floor() as i32,
						top: bounds.min.y.floor() as i32,
						right: bounds.max.x.ceil() as i32,
						bottom: bounds.max.y.ceil() as i32,
					}
				})
				.reduce(TextBox::union)
				.unwrap_or_default(),
			Self::Builtin { scale } => {
				let mut ink: Option<TextBox> = None;
				builtin::for_each_pixel(text, *scale, |x, y| {
					let pixel = TextBox {
						left: x,
						top: y,
						right: x + 1,
						bottom: y + 1,
					};
					ink = Some(ink.map_or(pixel, |b| b.union(pixel)));
				});
				ink.unwrap_or_default()
			}
		}
	}

	/// Visits every pixel painted by `text` with its coverage in `0.0..=1.0`.
	pub fn rasterize(&self, text: &str, mut f: impl FnMut(i32, i32, f32)) {
		match self {
			Self::Outline { font, scale } => {
				for glyph in Self::outline(font, *scale, text) {
					let bounds = glyph.px_bounds();
					let (x0, y0) = (bounds.min.x as i32, bounds.min.y as i32);
					glyph.draw(|x, y, coverage| f(x0 + x as i32, y0 + y as i32, coverage));
				}
			}
			Self::Builtin { scale } => builtin::for_each_pixel(text, *scale, |x, y| f(x, y, 1.0)),
		}
	}
}

/// Configured font file and size of one label role.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FontSpec {
	/// Font file, `None` for the built-in font
	pub path: Option<PathBuf>,
	/// Em size in pixels
	pub size: f32,
}

impl FontSpec {
	/// Creates a spec.
	pub fn new(path: Option<PathBuf>, size: f32) -> Self {
		Self { path, size }
	}
}

/// Visual role of a label, selecting its font and text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
	/// The event caption
	Caption,
	/// Day marker labels
	Marker,
	/// Construct labels
	Construct,
	/// Tower floor labels
	Floor,
}

/// The four label fonts of a run.
#[derive(Debug, Clone)]
pub struct FontSet {
	caption: Font,
	marker: Font,
	construct: Font,
	floor: Font,
}

impl FontSet {
	/// Default em sizes: caption, marker, construct, floor.
	pub const DEFAULT_SIZES: [f32; 4] = [160.0, 95.0, 65.0, 90.0];

	/// Creates a set from four fonts.
	pub fn new(caption: Font, marker: Font, construct: Font, floor: Font) -> Self {
		Self {
			caption,
			marker,
			construct,
			floor,
		}
	}

	/// Loads the four fonts, falling back to the built-in font per role.
	pub fn load(caption: &FontSpec, marker: &FontSpec, construct: &FontSpec, floor: &FontSpec) -> Self {
		Self::new(
			Font::load_or_builtin(caption),
			Font::load_or_builtin(marker),
			Font::load_or_builtin(construct),
			Font::load_or_builtin(floor),
		)
	}

	/// The built-in font at the default sizes.
	pub fn builtin() -> Self {
		let [caption, marker, construct, floor] = Self::DEFAULT_SIZES.map(Font::builtin);
		Self::new(caption, marker, construct, floor)
	}

	/// Returns the font of a role.
	pub fn get(&self, role: FontRole) -> &Font {
		match role {
			FontRole::Caption => &self.caption,
			FontRole::Marker => &self.marker,
			FontRole::Construct => &self.construct,
			FontRole::Floor => &self.floor,
		}
	}
}

impl Default for FontSet {
	fn default() -> Self {
		Self::builtin()
	}
}
