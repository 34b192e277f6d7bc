// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the responsive fit calculation.
//!
//! Measures the cost of sizing an artwork on every resize event:
//! - Wide and narrow viewports with landscape and portrait images
//! - The loading case where the image size is not known yet

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use viewing_room::domain::gallery::{ImageSize, ViewportSize};
use viewing_room::gallery::fit::{container_size, fit_image};

fn bench_fit_image(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_calculation");

    let cases = [
        ("wide_landscape", ViewportSize::new(1920.0, 1080.0), ImageSize::new(4000, 2000)),
        ("wide_portrait", ViewportSize::new(1920.0, 1080.0), ImageSize::new(1000, 3000)),
        ("narrow_landscape", ViewportSize::new(390.0, 844.0), ImageSize::new(4000, 2000)),
        ("narrow_portrait", ViewportSize::new(390.0, 844.0), ImageSize::new(1000, 3000)),
    ];

    for (name, viewport, image) in cases {
        group.bench_function(name, |b| {
            b.iter(|| black_box(fit_image(black_box(viewport), black_box(Some(image)))));
        });
    }

    group.bench_function("unknown_image", |b| {
        let viewport = ViewportSize::new(1280.0, 720.0);
        b.iter(|| black_box(fit_image(black_box(viewport), None)));
    });

    group.finish();
}

/// Simulates a window drag: one container per intermediate width.
fn bench_resize_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_calculation");
    let image = ImageSize::new(3000, 2000);

    group.bench_function("resize_sweep_320_to_2560", |b| {
        b.iter(|| {
            for width in (320..=2560).step_by(8) {
                let viewport = ViewportSize::new(width as f32, 900.0);
                black_box(container_size(viewport));
                black_box(fit_image(viewport, Some(image)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_fit_image, bench_resize_sweep);
criterion_main!(benches);
