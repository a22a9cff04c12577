//! Benchmark helper utilities for nightmap-rs
//!
//! This module builds synthetic map assets and lookups so the composition
//! benchmarks run without a materials directory.

use image::{Rgba, RgbaImage};
use nightmap_render::prelude::*;
use nightmap_types::prelude::*;

/// Location codes laid out on a grid by [`coordinates`]
pub const LOCATIONS: std::ops::Range<i64> = 100..164;

/// Category used by every synthetic record
pub const CATEGORY: i64 = 1;

/// Construct type drawn by the synthetic placements
pub const CONSTRUCT: i64 = 320;

/// Creates a sprite with a soft alpha ramp along x, so masked pastes hit
/// every blending path.
pub fn ramp_sprite(width: u32, height: u32) -> RgbaImage {
	RgbaImage::from_fn(width, height, |x, y| {
		let alpha = (x * 255 / width.max(1)) as u8;
		Rgba([200, (y % 256) as u8, 40, alpha])
	})
}

/// Builds an in-memory asset set for a `size` x `size` canvas.
pub fn assets(size: u32) -> MemoryAssets {
	MemoryAssets::new()
		.with(AssetKey::Background(CATEGORY), RgbaImage::from_pixel(size, size, Rgba([90, 90, 90, 255])))
		.with(AssetKey::Marker, ramp_sprite(64, 64))
		.with(AssetKey::NightLord(1), ramp_sprite(size, size))
		.with(AssetKey::Treasure(10 + CATEGORY), ramp_sprite(size, size))
		.with(AssetKey::Start(1), ramp_sprite(size, size))
		.with(AssetKey::Construct(CONSTRUCT), ramp_sprite(48, 48))
}

/// Places [`LOCATIONS`] on an 8x8 grid covering the canvas.
pub fn coordinates(size: u32) -> CoordinateTable {
	let step = f64::from(size) / 8.0;
	LOCATIONS
		.enumerate()
		.map(|(i, location)| {
			let (col, row) = ((i % 8) as f64, (i / 8) as f64);
			(location, Point::new((col + 0.5) * step, (row + 0.5) * step))
		})
		.collect()
}

/// Builds lookups with `constructs` visible placements on map 1.
pub fn tables(size: u32, constructs: usize) -> MapTables {
	let names: NameLookup = [(CONSTRUCT, "Camp"), (900, "Boss"), (901, "Rival")].into_iter().collect();
	let placements: Vec<ConstructPlacement> = LOCATIONS
		.cycle()
		.take(constructs)
		.map(|location| ConstructPlacement {
			map_id: 1,
			kind: CONSTRUCT,
			visible: 1,
			location,
		})
		.collect();
	MapTables::new(coordinates(size), names, &placements)
}

/// A record using every synthetic layer.
pub fn record() -> MapRecord {
	MapRecord {
		id: 1,
		category: CATEGORY,
		event_flag: 7700,
		night_lord: Some(1),
		treasure: Some(1),
		reward: Some(0),
		start: Some(1),
		day1: DayPhase {
			location: Some(LOCATIONS.start),
			boss: Some(900),
			extra: Some(901),
		},
		day2: DayPhase {
			location: Some(LOCATIONS.start + 9),
			boss: Some(901),
			extra: None,
		},
		..MapRecord::default()
	}
}

/// Common canvas edge lengths
pub mod sizes {
	/// Small canvas: 512x512
	pub const SMALL: u32 = 512;
	/// Medium canvas: 1024x1024
	pub const MEDIUM: u32 = 1024;
	/// Production canvas: 5000x5000, saved at 1000x1000
	pub const FULL: u32 = 5000;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_grid_stays_on_canvas() {
		let coords = coordinates(sizes::SMALL);
		assert_eq!(coords.len(), 64);
		for location in LOCATIONS {
			let point = coords.get(location).unwrap();
			assert!(point.x > 0.0 && point.x < 512.0);
			assert!(point.y > 0.0 && point.y < 512.0);
		}
	}

	#[test]
	fn test_record_composes() {
		let composer = Composer::new(
			assets(sizes::SMALL),
			tables(sizes::SMALL, 16),
			FontSet::builtin(),
			ComposeOptions::default(),
		);
		assert!(composer.has_marker());
		let (_, annotations) = composer.compose_layers(&record()).unwrap();
		assert_eq!(annotations.constructs.len(), 16);
		assert_eq!(annotations.markers.len(), 3);
	}
}
