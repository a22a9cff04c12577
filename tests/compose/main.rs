//! Composition tests for `nightmap-rs`, driven by in-memory assets and the
//! built-in font.

mod batch;
mod labels;

use image::{Rgba, RgbaImage};
use nightmap_rs::prelude::*;

pub(crate) const SIZE: u32 = 200;

pub(crate) const GRAY: Rgba<u8> = Rgba([128, 128, 128, 255]);
pub(crate) const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub(crate) const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
pub(crate) const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
pub(crate) const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Surface location at (50, 50)
pub(crate) const SURFACE_LOC: i64 = 100;
/// Second surface location at (150, 50)
pub(crate) const SURFACE_LOC_2: i64 = 101;
/// Cavern location, lands near (50, 45) after the cavern transform
pub(crate) const CAVERN_LOC: i64 = 200;
/// Tower floor location
pub(crate) const FLOOR_LOC: i64 = 1111;
/// Location missing from the coordinate table
pub(crate) const UNKNOWN_LOC: i64 = 999;

pub(crate) const BOSS: i64 = 901;
pub(crate) const BOSS_EXTRA: i64 = 950;
pub(crate) const CHURCH: i64 = 49410;
pub(crate) const CAMP: i64 = 320;

pub(crate) fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
	RgbaImage::from_pixel(width, height, color)
}

/// Backgrounds for categories 1 and 4, the marker sprite, clear full-canvas
/// overlays and construct icons.
pub(crate) fn base_assets() -> MemoryAssets {
	MemoryAssets::new()
		.with(AssetKey::Background(1), solid(SIZE, SIZE, GRAY))
		.with(AssetKey::Background(4), solid(SIZE, SIZE, GRAY))
		.with(AssetKey::Marker, solid(10, 10, RED))
		.with(AssetKey::NightLord(1), solid(SIZE, SIZE, CLEAR))
		.with(AssetKey::Treasure(51), solid(SIZE, SIZE, CLEAR))
		.with(AssetKey::Treasure(54), solid(SIZE, SIZE, CLEAR))
		.with(AssetKey::Day2(SURFACE_LOC_2), solid(SIZE, SIZE, CLEAR))
		.with(AssetKey::Reward(3), solid(SIZE, SIZE, CLEAR))
		.with(AssetKey::Start(1), solid(SIZE, SIZE, CLEAR))
		.with(AssetKey::Construct(CHURCH), solid(8, 8, BLUE))
		.with(AssetKey::Construct(CAMP), solid(6, 6, GREEN))
}

pub(crate) fn coordinates() -> CoordinateTable {
	[
		(SURFACE_LOC, Point::new(50.0, 50.0)),
		(SURFACE_LOC_2, Point::new(150.0, 50.0)),
		(CAVERN_LOC, Point::new(350.0, 300.0)),
		(FLOOR_LOC, Point::new(100.0, 150.0)),
	]
	.into_iter()
	.collect()
}

pub(crate) fn names() -> NameLookup {
	[
		(BOSS, "Gaping Jaw"),
		(BOSS_EXTRA, "Twin"),
		(CHURCH, "Church"),
		(CAMP, "Camp"),
		(7705, "Night Raid"),
		(3001, "Bell"),
	]
	.into_iter()
	.collect()
}

pub(crate) fn placement(kind: i64, location: i64) -> ConstructPlacement {
	ConstructPlacement {
		map_id: 1,
		kind,
		visible: 1,
		location,
	}
}

/// A plain surface record: no frenzy, no reward, day 1 at `SURFACE_LOC`.
pub(crate) fn record() -> MapRecord {
	MapRecord {
		id: 1,
		category: 1,
		event_flag: 7700,
		event_pattern: None,
		event_value: None,
		night_lord: Some(1),
		treasure: Some(5),
		reward: Some(0),
		start: Some(1),
		day1: DayPhase {
			location: Some(SURFACE_LOC),
			boss: Some(BOSS),
			extra: None,
		},
		day2: DayPhase {
			location: Some(SURFACE_LOC_2),
			boss: None,
			extra: None,
		},
	}
}

pub(crate) fn options() -> ComposeOptions {
	ComposeOptions {
		caption_position: (5, 170),
		..ComposeOptions::default()
	}
}

pub(crate) fn composer_with(assets: MemoryAssets, placements: &[ConstructPlacement]) -> Composer<MemoryAssets> {
	let tables = MapTables::new(coordinates(), names(), placements);
	Composer::new(assets, tables, FontSet::builtin(), options())
}

pub(crate) fn requested_prefix(composer: &Composer<MemoryAssets>, prefix: &str) -> Vec<String> {
	composer
		.assets()
		.requests()
		.into_iter()
		.filter(|name| name.starts_with(prefix))
		.collect()
}

pub(crate) fn position_of(requests: &[String], name: &str) -> usize {
	requests
		.iter()
		.position(|r| r == name)
		.unwrap_or_else(|| panic!("{name} was not requested: {requests:?}"))
}
