//! Benchmarks for the radial orbit layout.

use appton_layout::{Breakpoint, RadialLayout};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_positions(c: &mut Criterion) {
    let layout = RadialLayout::new(Breakpoint::Large.radii());

    c.bench_function("radial_positions_8", |b| {
        b.iter(|| layout.positions(black_box(8)));
    });

    c.bench_function("radial_positions_64", |b| {
        b.iter(|| layout.positions(black_box(64)));
    });
}

fn bench_breakpoint(c: &mut Criterion) {
    c.bench_function("breakpoint_for_width", |b| {
        b.iter(|| {
            for width in [320.0f32, 480.0, 768.0, 1440.0] {
                black_box(Breakpoint::for_width(black_box(width)));
            }
        });
    });
}

criterion_group!(benches, bench_positions, bench_breakpoint);
criterion_main!(benches);
