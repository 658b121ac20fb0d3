//! Performance measurement for the effect renderers at varying image sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use image::{DynamicImage, GrayImage, Luma};
use pixmorph::effects::shift::BandOffsetSource;
use pixmorph::effects::{halftone, shift, stripes, Direction};
use std::hint::black_box;

fn gradient_image(size: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(size, size, |x, y| {
        Luma([((x * 13 + y * 7) % 256) as u8])
    }))
}

/// Measures halftone rendering cost as the source grows
fn bench_halftone(c: &mut Criterion) {
    let mut group = c.benchmark_group("halftone");

    for size in &[64_u32, 128, 256] {
        let source = gradient_image(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let rendered = halftone::render(black_box(&source), 6);
                black_box(rendered)
            });
        });
    }

    group.finish();
}

/// Measures stripe rendering with rotation bookkeeping
fn bench_stripes(c: &mut Criterion) {
    let mut group = c.benchmark_group("stripes");

    for size in &[64_u32, 128, 256] {
        let source = gradient_image(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let rendered = stripes::render(black_box(&source), 6, 30.0);
                black_box(rendered)
            });
        });
    }

    group.finish();
}

/// Measures band displacement over single-row bands
fn bench_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift");

    for size in &[64_u32, 128, 256] {
        let source = gradient_image(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut offsets = BandOffsetSource::new(42);
                let rendered =
                    shift::render(black_box(&source), 20, Direction::Horizontal, 1, &mut offsets);
                black_box(rendered)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_halftone, bench_stripes, bench_shift);
criterion_main!(benches);
