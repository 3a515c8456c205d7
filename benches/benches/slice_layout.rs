//! Benchmark suite for sheet slicing and page layout
//!
//! Measures the two hot paths of the viewer: cutting a sheet into frames and
//! composing the paginated overview.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sheetview_benches::{generate_sheet, generate_table, sizes};
use sheetview_types::color::ColorKey;
use sheetview_types::sheet::slice_sheet;
use sheetview_types::view::{BitmapFont, LineGrid, PageLayout};
use std::hint::black_box;

/// Benchmark slicing sheets of different sizes
fn bench_slice(c: &mut Criterion) {
	let mut group = c.benchmark_group("slice_sheet");

	for (name, (cell, frames)) in [("small", sizes::SMALL), ("medium", sizes::MEDIUM), ("large", sizes::LARGE)] {
		let sheet = generate_sheet(cell, frames);
		group.throughput(Throughput::Elements(u64::from(sheet.width()) * u64::from(sheet.height())));
		group.bench_with_input(BenchmarkId::new("slice", name), &sheet, |b, sheet| {
			b.iter(|| {
				let result = slice_sheet("bench.png", black_box(sheet), cell, cell);
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark color keying a whole sheet
fn bench_color_key(c: &mut Criterion) {
	let mut group = c.benchmark_group("color_key");
	let (cell, frames) = sizes::MEDIUM;
	let key = ColorKey::default();

	group.bench_function("apply_white", |b| {
		b.iter_batched(
			|| generate_sheet(cell, frames),
			|mut sheet| {
				key.apply(&mut sheet);
				black_box(sheet)
			},
			criterion::BatchSize::SmallInput,
		);
	});

	group.finish();
}

/// Benchmark rendering and fitting pages
fn bench_layout(c: &mut Criterion) {
	let mut group = c.benchmark_group("page_layout");
	let font = BitmapFont::default();

	for rows in [6usize, 24, 96] {
		let table = generate_table(32, rows / 6, 6, 8);
		let layout = PageLayout::new(32, PageLayout::DEFAULT_MAX_ROWS).unwrap();

		group.throughput(Throughput::Elements(rows as u64));
		group.bench_with_input(BenchmarkId::new("render", rows), &table, |b, table| {
			b.iter(|| black_box(layout.render(black_box(table), &font, &LineGrid)));
		});
		group.bench_with_input(BenchmarkId::new("fit_720p", rows), &table, |b, table| {
			b.iter(|| black_box(layout.layout(black_box(table), &font, &LineGrid, (1280, 720))));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_slice, bench_color_key, bench_layout);
criterion_main!(benches);
