//! Deferred text labels and the final text pass.
//!
//! Labels are collected while image layers are composed and drawn in one
//! pass at the end, so text is always on top of every sprite and overlay.

use image::{Rgba, RgbaImage};
use log::{debug, warn};

use crate::{
	blend::{blend_pixel, coverage_mask},
	font::{Font, FontRole, FontSet},
};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const AMBER: Rgba<u8> = Rgba([255, 155, 0, 255]);
const YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);
const VIOLET: Rgba<u8> = Rgba([115, 15, 230, 255]);

/// Shadow passes and fill colour of a label role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
	/// Shadow passes `(dx, dy, colour)`, drawn in order before the fill
	pub shadows: &'static [(i64, i64, Rgba<u8>)],
	/// Main glyph colour
	pub fill: Rgba<u8>,
}

impl FontRole {
	/// Returns the text style of the role.
	pub fn style(self) -> TextStyle {
		match self {
			FontRole::Marker => TextStyle {
				shadows: &[
					(-3, -3, WHITE),
					(-1, -1, WHITE),
					(1, 1, BLACK),
					(3, 3, BLACK),
					(5, 5, BLACK),
					(7, 7, BLACK),
				],
				fill: AMBER,
			},
			FontRole::Construct => TextStyle {
				shadows: &[(4, 4, BLACK), (-4, -4, BLACK)],
				fill: YELLOW,
			},
			FontRole::Floor => TextStyle {
				shadows: &[(8, 8, BLACK), (-8, -8, BLACK)],
				fill: YELLOW,
			},
			FontRole::Caption => TextStyle {
				shadows: &[(15, 15, VIOLET)],
				fill: WHITE,
			},
		}
	}
}

/// A label waiting for the text pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextAnnotation {
	/// Label text
	pub text: String,
	/// Text origin on the canvas
	pub position: (i64, i64),
	/// Font and style selector
	pub role: FontRole,
}

impl TextAnnotation {
	/// Creates a label.
	pub fn new(text: impl Into<String>, position: (i64, i64), role: FontRole) -> Self {
		Self {
			text: text.into(),
			position,
			role,
		}
	}

	/// Returns `true` if the text origin lies on the canvas.
	pub fn is_on_canvas(&self, width: u32, height: u32) -> bool {
		let (x, y) = self.position;
		(0..width as i64).contains(&x) && (0..height as i64).contains(&y)
	}
}

/// All labels of one map, grouped in drawing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
	/// Day marker labels
	pub markers: Vec<TextAnnotation>,
	/// Construct labels
	pub constructs: Vec<TextAnnotation>,
	/// Tower floor labels
	pub floors: Vec<TextAnnotation>,
	/// The event caption, drawn last
	pub caption: Option<TextAnnotation>,
}

impl Annotations {
	/// Creates an empty collection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Queues a label into the group of its role. A caption replaces any
	/// previous caption.
	pub fn push(&mut self, annotation: TextAnnotation) {
		match annotation.role {
			FontRole::Marker => self.markers.push(annotation),
			FontRole::Construct => self.constructs.push(annotation),
			FontRole::Floor => self.floors.push(annotation),
			FontRole::Caption => self.caption = Some(annotation),
		}
	}

	/// Iterates labels in drawing order: markers, constructs, floors, caption.
	pub fn iter(&self) -> impl Iterator<Item = &TextAnnotation> {
		self.markers
			.iter()
			.chain(&self.constructs)
			.chain(&self.floors)
			.chain(self.caption.as_ref())
	}

	/// Returns the number of queued labels.
	pub fn len(&self) -> usize {
		self.markers.len() + self.constructs.len() + self.floors.len() + usize::from(self.caption.is_some())
	}

	/// Returns `true` if nothing is queued.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Draws `text` with its origin at `(x, y)` in a solid colour.
pub fn draw_text(canvas: &mut RgbaImage, font: &Font, text: &str, (x, y): (i64, i64), color: Rgba<u8>) {
	let (width, height) = (canvas.width() as i64, canvas.height() as i64);

	font.rasterize(text, |gx, gy, coverage| {
		let px = x + gx as i64;
		let py = y + gy as i64;
		if px < 0 || py < 0 || px >= width || py >= height {
			return;
		}
		blend_pixel(canvas.get_pixel_mut(px as u32, py as u32), color, coverage_mask(coverage));
	});
}

/// Draws queued labels with their role styles.
#[derive(Debug, Clone, Copy)]
pub struct Annotator<'a> {
	fonts: &'a FontSet,
}

impl<'a> Annotator<'a> {
	/// Creates an annotator over a font set.
	pub fn new(fonts: &'a FontSet) -> Self {
		Self { fonts }
	}

	/// Draws one label: every shadow pass, then the fill.
	pub fn draw_one(&self, canvas: &mut RgbaImage, annotation: &TextAnnotation) {
		let font = self.fonts.get(annotation.role);
		let style = annotation.role.style();
		let (x, y) = annotation.position;

		for &(dx, dy, color) in style.shadows {
			draw_text(canvas, font, &annotation.text, (x + dx, y + dy), color);
		}
		draw_text(canvas, font, &annotation.text, (x, y), style.fill);
	}

	/// Draws every label in group order. Labels whose origin lies off the
	/// canvas are skipped; only a skipped caption is reported.
	pub fn draw(&self, canvas: &mut RgbaImage, annotations: &Annotations) {
		let (width, height) = canvas.dimensions();

		for annotation in annotations.iter() {
			if !annotation.is_on_canvas(width, height) {
				if annotation.role == FontRole::Caption {
					warn!(
						"Caption position {:?} is outside the {}x{} canvas",
						annotation.position, width, height
					);
				}
				continue;
			}

			debug!("Drawing {:?} label {:?} at {:?}", annotation.role, annotation.text, annotation.position);
			self.draw_one(canvas, annotation);
		}
	}
}
