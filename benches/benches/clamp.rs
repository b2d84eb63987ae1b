// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for transform clamping over a deterministic proposal grid.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};
use pinchview_transform::{ZoomLimits, ZoomTransform, clamp_transform, max_pan};

fn proposal_grid() -> Vec<ZoomTransform> {
    let zooms = [0.5, 1.0, 1.25, 2.0, 3.5, 5.0, 8.0];
    let pans = [-2500.0, -500.0, -1.0, 0.0, 333.3, 500.0, 2500.0];
    let mut proposals = Vec::with_capacity(zooms.len() * pans.len() * pans.len());
    for zoom in zooms {
        for px in pans {
            for py in pans {
                proposals.push(ZoomTransform::new(zoom, Vec2::new(px, py)));
            }
        }
    }
    proposals
}

fn bench_clamp(c: &mut Criterion) {
    let limits = ZoomLimits::default();
    let content = Size::new(1000.0, 1000.0);
    let proposals = proposal_grid();

    c.bench_function("clamp_transform_grid", |b| {
        b.iter(|| {
            for &proposal in &proposals {
                black_box(clamp_transform(
                    black_box(proposal),
                    black_box(content),
                    limits,
                ));
            }
        });
    });

    c.bench_function("max_pan", |b| {
        b.iter(|| black_box(max_pan(black_box(3.0), black_box(content))));
    });
}

criterion_group!(benches, bench_clamp);
criterion_main!(benches);
