//! Label placement and the final text pass.

use nightmap_rs::prelude::*;

use crate::*;

fn texts(labels: &[TextAnnotation]) -> Vec<&str> {
	labels.iter().map(|a| a.text.as_str()).collect()
}

fn caption_of(composer: &Composer<MemoryAssets>, record: &MapRecord) -> String {
	let (_, annotations) = composer.compose_layers(record).unwrap();
	annotations.caption.map(|c| c.text).unwrap_or_default()
}

#[test]
fn test_marker_label_and_extra_line() {
	let composer = composer_with(base_assets(), &[]);
	let record = MapRecord {
		day1: DayPhase {
			extra: Some(BOSS_EXTRA),
			..record().day1
		},
		..record()
	};

	let (_, annotations) = composer.compose_layers(&record).unwrap();
	assert_eq!(texts(&annotations.markers), vec!["DAY1 Gaping Jaw", "Twin"]);

	let fonts = FontSet::builtin();
	let label = fonts.get(FontRole::Marker).measure("DAY1 Gaping Jaw");
	let extra = fonts.get(FontRole::Marker).measure("Twin");
	let (x, y) = annotations.markers[0].position;
	assert_eq!(x, (50.0 - (label.width() / 2) as f64) as i64);
	assert_eq!(y, (50.0 - (label.height() / 2) as f64) as i64);
	assert_eq!(
		annotations.markers[1].position,
		(
			(50.0 - (extra.width() / 2) as f64) as i64,
			y + label.height() as i64 + 5
		)
	);
}

#[test]
fn test_unnamed_boss_keeps_marker_without_label() {
	let composer = composer_with(base_assets(), &[]);
	let record = MapRecord {
		day1: DayPhase {
			boss: Some(12345),
			..record().day1
		},
		..record()
	};

	let (canvas, annotations) = composer.compose_layers(&record).unwrap();
	assert!(annotations.markers.is_empty());
	assert_eq!(*canvas.get_pixel(50, 50), RED);
}

#[test_log::test]
fn test_unknown_location_omits_marker_and_label() {
	let composer = composer_with(base_assets(), &[]);
	let record = MapRecord {
		day1: DayPhase {
			location: Some(UNKNOWN_LOC),
			..record().day1
		},
		day2: DayPhase::default(),
		..record()
	};

	let (canvas, annotations) = composer.compose_layers(&record).unwrap();
	assert!(annotations.markers.is_empty());
	assert!(canvas.pixels().all(|p| *p != RED));
	assert!(composer.compose(&record).is_ok());
}

#[test]
fn test_tower_floor_gets_floor_label_only() {
	let composer = composer_with(base_assets(), &[placement(CAMP, FLOOR_LOC)]);

	let (canvas, annotations) = composer.compose_layers(&record()).unwrap();

	assert_eq!(texts(&annotations.floors), vec!["1F Camp"]);
	assert!(annotations.constructs.is_empty());
	assert!(requested_prefix(&composer, "Construct_").is_empty());
	assert_eq!(*canvas.get_pixel(100, 150), GRAY);

	let bbox = FontSet::builtin().get(FontRole::Floor).measure("1F Camp");
	assert_eq!(
		annotations.floors[0].position,
		(
			(100.0 - (bbox.width() / 2) as f64) as i64,
			(150.0 - (bbox.height() / 2) as f64) as i64
		)
	);
}

#[test]
fn test_unnamed_floor_construct_is_skipped() {
	let composer = composer_with(base_assets(), &[placement(555, FLOOR_LOC)]);

	let (_, annotations) = composer.compose_layers(&record()).unwrap();
	assert!(annotations.floors.is_empty());
	assert!(requested_prefix(&composer, "Construct_").is_empty());
}

#[test]
fn test_construct_label_below_icon() {
	let composer = composer_with(base_assets(), &[placement(CHURCH, SURFACE_LOC_2)]);

	let (canvas, annotations) = composer.compose_layers(&record()).unwrap();
	assert_eq!(*canvas.get_pixel(150, 50), BLUE);

	// 8px icon: half height 4, plus the 10px gap
	let bbox = FontSet::builtin().get(FontRole::Construct).measure("Church");
	assert_eq!(
		annotations.constructs[0].position,
		((150.0 - (bbox.width() / 2) as f64) as i64, 64)
	);
}

#[test]
fn test_unnamed_construct_draws_icon_only() {
	let assets = base_assets().with(AssetKey::Construct(777), solid(4, 4, GREEN));
	let composer = composer_with(assets, &[placement(777, SURFACE_LOC_2)]);

	let (canvas, annotations) = composer.compose_layers(&record()).unwrap();
	assert_eq!(*canvas.get_pixel(150, 50), GREEN);
	assert!(annotations.constructs.is_empty());
}

#[test]
fn test_missing_construct_icon_is_skipped() {
	let composer = composer_with(base_assets(), &[placement(888, SURFACE_LOC_2)]);

	let (_, annotations) = composer.compose_layers(&record()).unwrap();
	assert!(composer.assets().was_requested(&AssetKey::Construct(888)));
	assert!(annotations.constructs.is_empty());
}

#[test]
fn test_caption_text() {
	let composer = composer_with(base_assets(), &[]);
	let base = record();

	assert_eq!(caption_of(&composer, &base), "特殊事件：7700");

	let valued = MapRecord {
		event_flag: 7705,
		event_value: Some(3001),
		..base
	};
	assert_eq!(caption_of(&composer, &valued), "特殊事件：Night Raid Bell");

	let unnamed_value = MapRecord {
		event_value: Some(4444),
		..valued
	};
	assert_eq!(caption_of(&composer, &unnamed_value), "特殊事件：Night Raid 4444");

	let no_value = MapRecord {
		event_flag: 7725,
		event_value: None,
		..base
	};
	assert_eq!(caption_of(&composer, &no_value), "特殊事件：7725");

	// Frenzy events never append the value
	let frenzy = MapRecord {
		event_flag: 7707,
		event_value: Some(3001),
		..base
	};
	assert_eq!(caption_of(&composer, &frenzy), "特殊事件：7707");
}

#[test]
fn test_caption_options() {
	let tables = MapTables::new(coordinates(), names(), &[]);
	let options = ComposeOptions {
		caption_position: (12, 34),
		caption_prefix: "Event: ".to_string(),
	};
	let composer = Composer::new(base_assets(), tables, FontSet::builtin(), options);

	let (_, annotations) = composer.compose_layers(&record()).unwrap();
	let caption = annotations.caption.unwrap();
	assert_eq!(caption.text, "Event: 7700");
	assert_eq!(caption.position, (12, 34));
	assert_eq!(caption.role, FontRole::Caption);
}

#[test]
fn test_text_drawn_above_start_overlay() {
	let assets = base_assets().with(AssetKey::Start(1), solid(SIZE, SIZE, GREEN));
	let composer = composer_with(assets, &[]);

	let (layers, _) = composer.compose_layers(&record()).unwrap();
	assert!(layers.pixels().all(|p| *p == GREEN));

	// The caption fill is white and lands on top of the opaque start layer.
	let canvas = composer.compose(&record()).unwrap();
	assert!(canvas.pixels().any(|p| *p == Rgba([255, 255, 255, 255])));
}

#[test]
fn test_off_canvas_caption_is_not_drawn() {
	let tables = MapTables::new(coordinates(), names(), &[]);
	let composer = Composer::new(base_assets(), tables, FontSet::builtin(), ComposeOptions::default());
	let record = MapRecord {
		day1: DayPhase {
			boss: None,
			..record().day1
		},
		..record()
	};

	let (layers, annotations) = composer.compose_layers(&record).unwrap();
	assert_eq!(annotations.len(), 1);
	assert_eq!(composer.compose(&record).unwrap(), layers);
}
