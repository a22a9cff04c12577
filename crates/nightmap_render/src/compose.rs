//! Layer composition of one map image.
//!
//! A map is built bottom to top:
//!
//! ```text
//! 1. background_<category>            base canvas, required
//! 2. Frenzy_<pattern>                 frenzy events only, masked paste at (0, 0)
//! 3. nightlord_<code>                 alpha composite
//! 4. treasure_<treasure*10+category>  alpha composite
//! 5. day2_<day2 location>             cavern only, alpha composite
//! 6. RotRew_<code>                    reward != 0 only, alpha composite
//! 7. night_circle                     day markers, centered masked paste
//! 8. Construct_<type>                 special pass, then normal pass
//! 9. Start_<code>                     alpha composite
//! ```
//!
//! Labels are queued while layers 7 and 8 are placed and drawn after layer 9.
//! Any layer except the background may be missing; it is logged and left out.

use image::RgbaImage;
use log::{debug, warn};
use nightmap_types::{
	rules::{self, CAVERN_CATEGORY},
	table::{MapRecord, MapTables, Point},
};

use crate::{
	annotate::{Annotations, Annotator, TextAnnotation},
	assets::{AssetKey, AssetStore},
	blend::{composite_full, paste_masked},
	error::ComposeError,
	font::{FontRole, FontSet},
	output,
};

/// Default caption origin on the full-resolution canvas
pub const DEFAULT_CAPTION_POSITION: (i64, i64) = (1200, 4300);

/// Default text before the event name in the caption
pub const DEFAULT_CAPTION_PREFIX: &str = "特殊事件：";

/// Gap between a day marker label and its extra line
const EXTRA_LINE_GAP: i64 = 5;

/// Gap between a construct icon and its label
const CONSTRUCT_LABEL_GAP: f64 = 10.0;

/// Rounds a canvas position to the nearest pixel, ties to even.
pub fn round_px(value: f64) -> i64 {
	value.round_ties_even() as i64
}

/// Start position of an extent of `size` pixels centered on `center`.
fn centered(center: f64, size: i64) -> i64 {
	round_px(center - (size / 2) as f64)
}

/// Caption placement and wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeOptions {
	/// Caption origin
	pub caption_position: (i64, i64),
	/// Text before the event name
	pub caption_prefix: String,
}

impl Default for ComposeOptions {
	fn default() -> Self {
		Self {
			caption_position: DEFAULT_CAPTION_POSITION,
			caption_prefix: DEFAULT_CAPTION_PREFIX.to_string(),
		}
	}
}

/// Composes map images from records and the shared lookups.
///
/// Holds only read-only state, so one composer can serve any number of
/// records in any order.
#[derive(Debug)]
pub struct Composer<A> {
	assets: A,
	tables: MapTables,
	fonts: FontSet,
	marker: Option<RgbaImage>,
	options: ComposeOptions,
}

impl<A: AssetStore> Composer<A> {
	/// Creates a composer, loading the day marker sprite once.
	///
	/// Without the sprite, day labels are still placed but no marker is drawn.
	pub fn new(assets: A, tables: MapTables, fonts: FontSet, options: ComposeOptions) -> Self {
		let marker = assets
			.load(&AssetKey::Marker)
			.inspect_err(|e| warn!("{}, day markers are not drawn", e))
			.ok();
		Self {
			assets,
			tables,
			fonts,
			marker,
			options,
		}
	}

	/// Returns `true` if the day marker sprite was loaded.
	pub fn has_marker(&self) -> bool {
		self.marker.is_some()
	}

	/// Returns the asset store.
	pub fn assets(&self) -> &A {
		&self.assets
	}

	/// Returns the shared lookups.
	pub fn tables(&self) -> &MapTables {
		&self.tables
	}

	/// Composes every image layer of a record and collects its labels,
	/// without drawing the labels.
	///
	/// # Errors
	///
	/// Returns an error only when the background cannot be loaded.
	pub fn compose_layers(&self, record: &MapRecord) -> Result<(RgbaImage, Annotations), ComposeError> {
		let mut canvas = self
			.assets
			.load(&AssetKey::Background(record.category))
			.map_err(|source| ComposeError::Background {
				category: record.category,
				source,
			})?;
		let mut annotations = Annotations::new();

		if rules::is_frenzy_event(record.event_flag) {
			match record.event_pattern {
				Some(pattern) => self.paste(&mut canvas, record, AssetKey::Frenzy(pattern)),
				None => warn!("Map {}: frenzy event without a pattern code", record.id),
			}
		}

		self.overlay_code(&mut canvas, record, record.night_lord, AssetKey::NightLord, "night lord");
		self.overlay_code(&mut canvas, record, record.treasure_code(), AssetKey::Treasure, "treasure");

		if record.category == CAVERN_CATEGORY {
			self.overlay_code(&mut canvas, record, record.day2.location, AssetKey::Day2, "day-2 location");
		}

		if let Some(reward) = record.reward_code() {
			self.overlay(&mut canvas, record, AssetKey::Reward(reward));
		}

		self.place_markers(&mut canvas, record, &mut annotations);
		self.place_constructs(&mut canvas, record, &mut annotations);

		self.overlay_code(&mut canvas, record, record.start, AssetKey::Start, "start");

		annotations.push(self.caption(record));
		Ok((canvas, annotations))
	}

	/// Composes a record into a full-resolution image with all labels drawn.
	pub fn compose(&self, record: &MapRecord) -> Result<RgbaImage, ComposeError> {
		let (mut canvas, annotations) = self.compose_layers(record)?;
		Annotator::new(&self.fonts).draw(&mut canvas, &annotations);
		Ok(canvas)
	}

	/// Composes a record and downsamples it by `factor`.
	pub fn render(&self, record: &MapRecord, factor: u32) -> Result<RgbaImage, ComposeError> {
		let canvas = self.compose(record)?;
		Ok(output::downscale(&canvas, factor))
	}

	fn overlay(&self, canvas: &mut RgbaImage, record: &MapRecord, key: AssetKey) {
		let result = self
			.assets
			.load(&key)
			.and_then(|layer| composite_full(canvas, &layer, &key.file_name()));

		match result {
			Ok(()) => debug!("Map {}: composited {}", record.id, key),
			Err(e) => warn!("Map {}: {}", record.id, e),
		}
	}

	fn overlay_code(
		&self,
		canvas: &mut RgbaImage,
		record: &MapRecord,
		code: Option<i64>,
		key: fn(i64) -> AssetKey,
		layer: &str,
	) {
		match code {
			Some(code) => self.overlay(canvas, record, key(code)),
			None => warn!("Map {}: no {} code", record.id, layer),
		}
	}

	fn paste(&self, canvas: &mut RgbaImage, record: &MapRecord, key: AssetKey) {
		match self.assets.load(&key) {
			Ok(layer) => {
				paste_masked(canvas, &layer, 0, 0);
				debug!("Map {}: pasted {}", record.id, key);
			}
			Err(e) => warn!("Map {}: {}", record.id, e),
		}
	}

	fn resolve(&self, record: &MapRecord, location: i64) -> Option<Point> {
		let point = self.tables.coords.resolve(location, record.category);
		if point.is_none() {
			warn!("Map {}: location {} is not in the coordinate table", record.id, location);
		}
		point
	}

	fn place_markers(&self, canvas: &mut RgbaImage, record: &MapRecord, annotations: &mut Annotations) {
		let names = &self.tables.names;
		let font = self.fonts.get(FontRole::Marker);

		for (day, phase) in record.day_phases() {
			let Some(location) = phase.location else {
				warn!("Map {}: day {} has no boss location", record.id, day);
				continue;
			};
			let Some(center) = self.resolve(record, location) else {
				continue;
			};

			if let Some(marker) = &self.marker {
				let (marker_w, marker_h) = marker.dimensions();
				paste_masked(
					canvas,
					marker,
					centered(center.x, marker_w as i64),
					centered(center.y, marker_h as i64),
				);
			}

			let Some(boss) = names.get_opt(phase.boss) else {
				debug!("Map {}: day {} boss {:?} has no name", record.id, day, phase.boss);
				continue;
			};

			let text = format!("DAY{day} {boss}");
			let bbox = font.measure(&text);
			let x = centered(center.x, bbox.width() as i64);
			let y = centered(center.y, bbox.height() as i64);
			annotations.push(TextAnnotation::new(text, (x, y), FontRole::Marker));

			if let Some(extra) = names.get_opt(phase.extra) {
				let extra_box = font.measure(extra);
				annotations.push(TextAnnotation::new(
					extra,
					(
						centered(center.x, extra_box.width() as i64),
						y + bbox.height() as i64 + EXTRA_LINE_GAP,
					),
					FontRole::Marker,
				));
			}
		}
	}

	fn place_constructs(&self, canvas: &mut RgbaImage, record: &MapRecord, annotations: &mut Annotations) {
		let names = &self.tables.names;

		for placement in self.tables.constructs.drawing_order(record.id) {
			let Some(center) = self.resolve(record, placement.location) else {
				continue;
			};

			// Tower floors are labelled, never drawn as icons.
			if let Some(prefix) = rules::floor_prefix(placement.location) {
				match names.get(placement.kind) {
					Some(name) => {
						let text = format!("{prefix}{name}");
						let bbox = self.fonts.get(FontRole::Floor).measure(&text);
						let position = (
							centered(center.x, bbox.width() as i64),
							centered(center.y, bbox.height() as i64),
						);
						annotations.push(TextAnnotation::new(text, position, FontRole::Floor));
					}
					None => warn!(
						"Map {}: construct {} on floor {} has no name",
						record.id, placement.kind, placement.location
					),
				}
				continue;
			}

			let icon = match self.assets.load(&AssetKey::Construct(placement.kind)) {
				Ok(icon) => icon,
				Err(e) => {
					warn!("Map {}: {}", record.id, e);
					continue;
				}
			};
			let (icon_w, icon_h) = icon.dimensions();
			paste_masked(
				canvas,
				&icon,
				centered(center.x, icon_w as i64),
				centered(center.y, icon_h as i64),
			);

			if let Some(name) = names.get(placement.kind) {
				let bbox = self.fonts.get(FontRole::Construct).measure(name);
				let position = (
					centered(center.x, bbox.width() as i64),
					round_px(center.y + (icon_h / 2) as f64 + CONSTRUCT_LABEL_GAP),
				);
				annotations.push(TextAnnotation::new(name, position, FontRole::Construct));
			}
		}
	}

	fn caption(&self, record: &MapRecord) -> TextAnnotation {
		let names = &self.tables.names;
		let mut text = format!("{}{}", self.options.caption_prefix, names.name_or_code(record.event_flag));

		if rules::is_valued_event(record.event_flag)
			&& let Some(value) = record.event_value
		{
			text.push(' ');
			text.push_str(&names.name_or_code(value));
		}

		TextAnnotation::new(text, self.options.caption_position, FontRole::Caption)
	}
}
