//! Criterion benchmarks for rasterizing and filling random shapes.
//! Focus sizes: vertex counts in {2, 10, 50, 200} on a 512x512 plane.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use pointplane::prelude::*;
use pointplane::rand::CoordRange;

fn shape(n: usize, seed: u64) -> Vec<Point> {
    let cfg = ShapeCfg {
        vertex_count: VertexCount::Fixed(n),
        x_range: CoordRange { start: 0, end: 512 },
        y_range: CoordRange { start: 0, end: 512 },
        close: true,
    };
    draw_random_shape(cfg, ReplayToken { seed, index: n as u64 })
}

fn bench_plane(c: &mut Criterion) {
    let mut group = c.benchmark_group("plane");
    for &n in &[2usize, 10, 50, 200] {
        group.bench_with_input(BenchmarkId::new("join_points", n), &n, |b, &n| {
            b.iter_batched(
                || shape(n, 43),
                |vs| {
                    let _pts = join_points(&vs);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("join_and_fill_points", n), &n, |b, &n| {
            b.iter_batched(
                || shape(n, 44),
                |vs| {
                    let _pts = join_and_fill_points(&vs);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("write_and_flip", n), &n, |b, &n| {
            let outline = join_points(&shape(n, 45));
            b.iter_batched(
                || Plane::new((512, 512)),
                |mut plane| {
                    let _ = plane.write_points(&outline, false);
                    plane.flip(Axis::Y);
                    plane
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_plane);
criterion_main!(benches);
