use criterion::{Bencher, BenchmarkId, Criterion, criterion_group, criterion_main};
use rounded_polygon::polygon::{PolygonVertex, build_outline};
use std::f64::consts::TAU;

/// Star polygon with `vertex_count` vertexes alternating between an outer and inner radius,
/// every other vertex rounded.
fn star(vertex_count: usize) -> Vec<PolygonVertex> {
    (0..vertex_count)
        .map(|i| {
            let angle = TAU * i as f64 / vertex_count as f64;
            let r = if i % 2 == 0 { 100.0 } else { 60.0 };
            PolygonVertex::new(r * angle.cos(), r * angle.sin(), i % 2 == 0)
        })
        .collect()
}

fn bench_build_outline(b: &mut Bencher, vertexes: &[PolygonVertex]) {
    b.iter(|| build_outline(vertexes, 2.0).unwrap())
}

fn bench_build_and_resolve(b: &mut Bencher, vertexes: &[PolygonVertex]) {
    b.iter(|| build_outline(vertexes, 2.0).unwrap().resolve().area())
}

fn outline_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline");
    let vertex_counts = &[10, 100, 1000];
    for &i in vertex_counts {
        let vertexes = star(i);
        group.bench_with_input(BenchmarkId::new("build", i), &vertexes, |b, v| {
            bench_build_outline(b, v)
        });
        group.bench_with_input(BenchmarkId::new("build_and_resolve", i), &vertexes, |b, v| {
            bench_build_and_resolve(b, v)
        });
    }

    group.finish();
}

criterion_group!(outline, outline_group);
criterion_main!(outline);
