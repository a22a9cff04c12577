//! `nightmap` command-line tool
//!
//! Generates one annotated map image per row of the pattern table.
//!
//! # Usage
//!
//! ```bash
//! # Use nightmap.toml (if present) and the default file names
//! nightmap
//!
//! # Explicit inputs, only cavern maps, with a JSON run report
//! nightmap --patterns MAP_PATTERN.csv --materials assets/ --output out/ \
//!     --only-category 4 --report report.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::info;
use nightmap_rs::prelude::*;

mod settings;

use settings::Settings;

#[derive(Parser)]
#[command(name = "nightmap")]
#[command(version)]
#[command(about = "Batch-generate annotated map images from pattern tables", long_about = None)]
struct Cli {
	/// Configuration file (TOML)
	#[arg(short, long, value_name = "CONFIG", env = "NIGHTMAP_CONFIG", default_value = "nightmap.toml")]
	config: PathBuf,

	/// Pattern table CSV
	#[arg(long, value_name = "CSV")]
	patterns: Option<PathBuf>,

	/// Coordinate table CSV
	#[arg(long, value_name = "CSV")]
	coordinates: Option<PathBuf>,

	/// Construct table CSV
	#[arg(long, value_name = "CSV")]
	constructs: Option<PathBuf>,

	/// Name table CSV (no header)
	#[arg(long, value_name = "CSV")]
	names: Option<PathBuf>,

	/// Materials directory
	#[arg(short, long, value_name = "DIR")]
	materials: Option<PathBuf>,

	/// Output directory
	#[arg(short, long, value_name = "DIR")]
	output: Option<PathBuf>,

	/// Linear downsampling factor of saved maps
	#[arg(long, value_name = "FACTOR")]
	downscale: Option<u32>,

	/// Skip this many leading pattern rows
	#[arg(long, value_name = "ROWS")]
	skip_rows: Option<usize>,

	/// Only generate maps of this category
	#[arg(long, value_name = "CATEGORY")]
	only_category: Option<i64>,

	/// Write a JSON run report to this file
	#[arg(long, value_name = "FILE")]
	report: Option<PathBuf>,

	/// Show debug output
	#[arg(short, long)]
	verbose: bool,
}

impl Cli {
	/// Applies command-line overrides on top of the loaded settings.
	fn apply(&self, mut settings: Settings) -> Settings {
		let input = &mut settings.input;
		let overrides = [
			(&self.patterns, &mut input.patterns),
			(&self.coordinates, &mut input.coordinates),
			(&self.constructs, &mut input.constructs),
			(&self.names, &mut input.names),
			(&self.materials, &mut settings.paths.materials),
			(&self.output, &mut settings.paths.output),
		];
		for (flag, target) in overrides {
			if let Some(value) = flag {
				target.clone_from(value);
			}
		}

		if let Some(factor) = self.downscale {
			settings.render.downscale = factor;
		}
		if let Some(rows) = self.skip_rows {
			settings.filter.skip_rows = rows;
		}
		if self.only_category.is_some() {
			settings.filter.only_category = self.only_category;
		}

		settings
	}
}

fn load_tables(settings: &Settings) -> anyhow::Result<(Vec<MapRecord>, MapTables)> {
	let input = &settings.input;

	info!("Reading pattern table {}", input.patterns.display());
	let records = open_records(&input.patterns).with_context(|| format!("Cannot read {}", input.patterns.display()))?;

	info!("Reading coordinate table {}", input.coordinates.display());
	let coords = CoordinateTable::open(&input.coordinates)
		.with_context(|| format!("Cannot read {}", input.coordinates.display()))?;

	info!("Reading construct table {}", input.constructs.display());
	let placements =
		open_placements(&input.constructs).with_context(|| format!("Cannot read {}", input.constructs.display()))?;

	info!("Reading name table {}", input.names.display());
	let names = NameLookup::open(&input.names).with_context(|| format!("Cannot read {}", input.names.display()))?;

	let tables = MapTables::new(coords, names, &placements);
	info!(
		"Loaded {} records, {} locations, {} visible constructs, {} names",
		records.len(),
		tables.coords.len(),
		tables.constructs.len(),
		tables.names.len()
	);

	Ok((records, tables))
}

fn write_report(path: &Path, report: &RunReport) -> anyhow::Result<()> {
	let json = serde_json::to_string_pretty(report)?;
	std::fs::write(path, json).with_context(|| format!("Cannot write report {}", path.display()))?;
	info!("Report written to {}", path.display());
	Ok(())
}

fn run(settings: &Settings, report_path: Option<&Path>) -> anyhow::Result<()> {
	let (records, tables) = load_tables(settings)?;
	let fonts = settings.fonts.load();

	let assets = DirAssets::new(&settings.paths.materials);
	let composer = Composer::new(assets, tables, fonts, settings.render.compose_options());

	let report = Batch::new(&composer, &settings.paths.output)
		.downscale(settings.render.downscale)
		.filter(settings.filter.row_filter())
		.run(&records)?;

	if let Some(path) = report_path {
		write_report(path, &report)?;
	}

	Ok(())
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let level = if cli.verbose { "debug" } else { "info" };
	env_logger::init_from_env(env_logger::Env::default().default_filter_or(level));

	let settings = Settings::load(Some(&cli.config)).with_context(|| format!("Invalid configuration {}", cli.config.display()))?;
	let settings = cli.apply(settings);

	run(&settings, cli.report.as_deref())
}
