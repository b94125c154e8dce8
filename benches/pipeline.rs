//! Benchmarks for the pixcode pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pixcode::{Coding, Colour, ColourCodec, Raster};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// A `size × size` raster cycling through `colours` colours in diagonal bands.
fn banded_raster(size: usize, colours: usize) -> Raster {
    let rows = (0..size)
        .map(|y| (0..size).map(|x| ((x + y) / 3) % colours).collect())
        .collect();
    Raster::from_rows(rows).unwrap()
}

// -- Colour benchmarks --

fn bench_colours(c: &mut Criterion) {
    let mut group = c.benchmark_group("colours");
    let codec = ColourCodec::standard();

    group.bench_function("parse_hex", |b| {
        b.iter(|| codec.parse(black_box("#1a1a2e80")).unwrap())
    });

    group.bench_function("parse_functional", |b| {
        b.iter(|| codec.parse(black_box("rgba(100%, 50%, 0%, 0.5)")).unwrap())
    });

    group.bench_function("parse_named", |b| {
        b.iter(|| codec.parse(black_box("Blu Chiaro")).unwrap())
    });

    let colour = Colour::new(1, 2, 3, 128);
    group.bench_function("to_name", |b| b.iter(|| codec.to_name(black_box(colour))));

    group.finish();
}

// -- Coding benchmarks --

fn bench_coding(c: &mut Criterion) {
    let mut group = c.benchmark_group("coding");

    let house = load_fixture("house.txt");
    group.bench_function("parse_small", |b| {
        b.iter(|| Coding::parse(black_box(&house)).unwrap())
    });

    let colours: Vec<Colour> = (0..16u8).map(|i| Colour::rgb(i * 16, 0, 255 - i * 16)).collect();
    let raster = banded_raster(128, colours.len());
    let large = Coding::from_raster(&raster, &colours).unwrap();
    let large_text = large.to_string();

    group.bench_function("parse_large", |b| {
        b.iter(|| Coding::parse(black_box(&large_text)).unwrap())
    });

    group.bench_function("serialize_large", |b| b.iter(|| black_box(&large).to_string()));

    group.bench_function("to_raster_large", |b| b.iter(|| black_box(&large).to_raster()));

    group.bench_function("from_raster_large", |b| {
        b.iter(|| Coding::from_raster(black_box(&raster), &colours).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_colours, bench_coding);
criterion_main!(benches);
