//! Benchmark suite for map composition
//!
//! Measures the layer stack, the text pass and the final downscale on
//! synthetic in-memory assets.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nightmap_benches::{assets, ramp_sprite, record, sizes, tables};
use nightmap_render::{
	annotate::Annotator,
	blend::{composite_full, paste_masked},
	compose::{ComposeOptions, Composer},
	font::FontSet,
	output::downscale,
};

fn composer(size: u32, constructs: usize) -> Composer<nightmap_render::assets::MemoryAssets> {
	Composer::new(
		assets(size),
		tables(size, constructs),
		FontSet::builtin(),
		ComposeOptions::default(),
	)
}

/// Benchmark the full-canvas alpha composite
fn bench_composite_full(c: &mut Criterion) {
	let mut group = c.benchmark_group("composite_full");

	for size in [sizes::SMALL, sizes::MEDIUM] {
		let base = ramp_sprite(size, size);
		let layer = ramp_sprite(size, size);
		group.throughput(Throughput::Elements(u64::from(size) * u64::from(size)));
		group.bench_with_input(BenchmarkId::from_parameter(size), &layer, |b, layer| {
			b.iter(|| {
				let mut canvas = base.clone();
				composite_full(&mut canvas, black_box(layer), "layer").ok();
				black_box(canvas)
			});
		});
	}

	group.finish();
}

/// Benchmark masked sprite pastes, including clipped ones
fn bench_paste_masked(c: &mut Criterion) {
	let mut group = c.benchmark_group("paste_masked");
	let base = ramp_sprite(sizes::SMALL, sizes::SMALL);
	let sprite = ramp_sprite(64, 64);

	for (name, x, y) in [("inside", 100, 100), ("clipped", -32, 480)] {
		group.bench_function(name, |b| {
			b.iter(|| {
				let mut canvas = base.clone();
				paste_masked(&mut canvas, black_box(&sprite), x, y);
				black_box(canvas)
			});
		});
	}

	group.finish();
}

/// Benchmark layer composition with a growing number of constructs
fn bench_compose_layers(c: &mut Criterion) {
	let mut group = c.benchmark_group("compose_layers");
	let record = record();

	for constructs in [0, 16, 64] {
		let composer = composer(sizes::MEDIUM, constructs);
		group.bench_with_input(BenchmarkId::from_parameter(constructs), &composer, |b, composer| {
			b.iter(|| black_box(composer.compose_layers(black_box(&record))));
		});
	}

	group.finish();
}

/// Benchmark the text pass on its own
fn bench_text_pass(c: &mut Criterion) {
	let mut group = c.benchmark_group("text_pass");
	let composer = composer(sizes::MEDIUM, 16);
	let fonts = FontSet::builtin();
	let Ok((canvas, annotations)) = composer.compose_layers(&record()) else {
		eprintln!("Warning: Could not compose the synthetic record");
		return;
	};

	group.bench_function("builtin_font", |b| {
		b.iter(|| {
			let mut canvas = canvas.clone();
			Annotator::new(&fonts).draw(&mut canvas, black_box(&annotations));
			black_box(canvas)
		});
	});

	group.finish();
}

/// Benchmark the production-size downscale
fn bench_downscale(c: &mut Criterion) {
	let mut group = c.benchmark_group("downscale");
	let canvas = ramp_sprite(sizes::FULL, sizes::FULL);

	group.sample_size(10);
	group.throughput(Throughput::Elements(u64::from(sizes::FULL) * u64::from(sizes::FULL)));
	group.bench_function("lanczos3_x5", |b| {
		b.iter(|| black_box(downscale(black_box(&canvas), 5)));
	});

	group.finish();
}

criterion_group!(
	benches,
	bench_composite_full,
	bench_paste_masked,
	bench_compose_layers,
	bench_text_pass,
	bench_downscale,
);

criterion_main!(benches);
