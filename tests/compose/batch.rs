//! Batch runs writing into a scratch directory.

use std::path::PathBuf;

use nightmap_rs::prelude::*;

use crate::*;

struct ScratchDir(PathBuf);

impl ScratchDir {
	fn new(name: &str) -> Self {
		let path = std::env::temp_dir().join(format!("nightmap-{}-{}", name, std::process::id()));
		let _ = std::fs::remove_dir_all(&path);
		Self(path)
	}
}

impl Drop for ScratchDir {
	fn drop(&mut self) {
		let _ = std::fs::remove_dir_all(&self.0);
	}
}

fn map(id: i64, category: i64) -> MapRecord {
	MapRecord {
		id,
		category,
		..record()
	}
}

#[test_log::test]
fn test_batch_writes_downscaled_maps() {
	let dir = ScratchDir::new("write");
	let composer = composer_with(base_assets(), &[placement(CHURCH, SURFACE_LOC_2)]);
	let records = [map(1, 1), map(2, 9), map(3, 4)];

	let report = Batch::new(&composer, &dir.0).run(&records).unwrap();

	assert_eq!(report.generated, vec![1, 3]);
	assert_eq!(report.skipped.len(), 1);
	assert_eq!(report.skipped[0].id, 2);
	assert!(report.skipped[0].reason.contains("category 9"));
	assert_eq!(report.filtered, 0);

	let written = image::open(dir.0.join("map_1.png")).unwrap();
	assert_eq!((written.width(), written.height()), (SIZE / 5, SIZE / 5));
	assert!(dir.0.join("map_3.png").exists());
	assert!(!dir.0.join("map_2.png").exists());
}

#[test]
fn test_batch_filter_and_factor() {
	let dir = ScratchDir::new("filter");
	let composer = composer_with(base_assets(), &[]);
	let records = [map(1, 1), map(2, 1), map(3, 4)];

	let report = Batch::new(&composer, &dir.0)
		.downscale(10)
		.filter(RowFilter {
			skip_rows: 1,
			only_category: Some(1),
		})
		.run(&records)
		.unwrap();

	assert_eq!(report.generated, vec![2]);
	assert_eq!(report.filtered, 2);

	let written = image::open(dir.0.join("map_2.png")).unwrap();
	assert_eq!((written.width(), written.height()), (SIZE / 10, SIZE / 10));
}

#[test]
fn test_unknown_locations_still_written() {
	let dir = ScratchDir::new("unknown");
	let composer = composer_with(base_assets(), &[placement(CAMP, UNKNOWN_LOC)]);
	let record = MapRecord {
		day1: DayPhase {
			location: Some(UNKNOWN_LOC),
			..record().day1
		},
		..record()
	};

	let report = Batch::new(&composer, &dir.0).run(&[record]).unwrap();
	assert_eq!(report.generated, vec![1]);
	assert!(report.skipped.is_empty());
}

#[test]
fn test_report_json() {
	let report = RunReport {
		generated: vec![10, 11],
		skipped: vec![SkippedRecord {
			id: 12,
			reason: "missing background".to_string(),
		}],
		filtered: 3,
	};

	let json: serde_json::Value = serde_json::to_value(&report).unwrap();
	assert_eq!(json["generated"], serde_json::json!([10, 11]));
	assert_eq!(json["skipped"][0]["id"], 12);
	assert_eq!(json["filtered"], 3);
}
