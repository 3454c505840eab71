// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use planar_topo::{Point2, gabriel_graph, obtain_polygons, relative_neighborhood_graph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn scattered_points(n: usize) -> Vec<Point2<f64>> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..n)
        .map(|_| Point2::new(rng.random_range(0.0..512.0), rng.random_range(0.0..512.0)))
        .collect()
}

fn bench_proximity(c: &mut Criterion) {
    let pts = scattered_points(2_000);

    c.bench_function("gabriel_2k", |b| {
        b.iter(|| {
            let g = gabriel_graph(black_box(&pts)).unwrap();
            black_box(g.len());
        });
    });

    c.bench_function("rng_2k", |b| {
        b.iter(|| {
            let g = relative_neighborhood_graph(black_box(&pts)).unwrap();
            black_box(g.len());
        });
    });
}

fn bench_polygons(c: &mut Criterion) {
    let pts = scattered_points(2_000);
    let edges = relative_neighborhood_graph(&pts).unwrap();

    c.bench_function("obtain_polygons_rng_2k", |b| {
        b.iter(|| {
            let p = obtain_polygons(black_box(&edges), black_box(&pts)).unwrap();
            black_box((p.len(), p.points.len()));
        });
    });
}

criterion_group!(benches, bench_proximity, bench_polygons);
criterion_main!(benches);
