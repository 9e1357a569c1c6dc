// Copyright 2025 the Isocontour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use isocontour::{Contour, Rectangle, dac::horizontal_edges, extract_contours, run_dac};

/// Disjoint cells with a gap, so every cell contributes its four sides.
fn gen_grid_rects(n: i64, cell: i64) -> Vec<Rectangle> {
    let rows = (0..n).flat_map(|y| {
        (0..n).map(move |x| {
            let (x0, y0) = (x * cell, y * cell);
            [x0, x0 + cell - 1, y0, y0 + cell - 1]
        })
    });
    Rectangle::from_bounds(rows).unwrap()
}

/// Cells grown past their neighbours, so most edges are hidden.
fn gen_overlap_grid_rects(n: i64, cell: i64, scale: i64) -> Vec<Rectangle> {
    let rows = (0..n).flat_map(|y| {
        (0..n).map(move |x| {
            let (x0, y0) = (x * cell, y * cell);
            [x0, x0 + cell * scale, y0, y0 + cell * scale]
        })
    });
    Rectangle::from_bounds(rows).unwrap()
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: u64) -> i64 {
        (self.next_u64() % n) as i64
    }
}

fn gen_random_rects(count: usize, extent: u64, max_side: u64, seed: u64) -> Vec<Rectangle> {
    let mut rng = Rng::new(seed);
    let rows: Vec<_> = (0..count)
        .map(|_| {
            let w = 1 + rng.below(max_side);
            let h = 1 + rng.below(max_side);
            let x0 = rng.below(extent);
            let y0 = rng.below(extent);
            [x0, x0 + w, y0, y0 + h]
        })
        .collect();
    Rectangle::from_bounds(rows).unwrap()
}

fn bench_contour(c: &mut Criterion) {
    let mut group = c.benchmark_group("contour");
    for &n in &[16_i64, 32, 64] {
        let rects = gen_grid_rects(n, 10);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter(|| black_box(Contour::compute(black_box(&rects)).unwrap().len()));
        });
    }
    let rects = gen_overlap_grid_rects(32, 10, 3);
    group.bench_function("overlap_grid_n32", |b| {
        b.iter(|| black_box(Contour::compute(black_box(&rects)).unwrap().len()));
    });
    for &count in &[256_usize, 1024, 4096] {
        let rects = gen_random_rects(count, 10_000, 400, 0x9E37_79B9_7F4A_7C15);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("random_{}", count), |b| {
            b.iter(|| black_box(Contour::compute(black_box(&rects)).unwrap().perimeter()));
        });
    }
    group.finish();
}

fn bench_phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("phases");
    let rects = gen_random_rects(2048, 10_000, 400, 42);
    group.throughput(Throughput::Elements(rects.len() as u64));
    group.bench_function("stripes_random_2048", |b| {
        b.iter(|| black_box(run_dac(black_box(&rects)).unwrap().stripes().len()));
    });
    let stripes = run_dac(&rects).unwrap();
    let edges = horizontal_edges(&rects);
    group.bench_function("extract_random_2048", |b| {
        b.iter(|| black_box(extract_contours(&stripes, black_box(&edges)).unwrap().0.len()));
    });
    group.finish();
}

criterion_group!(benches, bench_contour, bench_phases);
criterion_main!(benches);
