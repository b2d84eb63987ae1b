// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks replaying a deterministic synthetic two-finger gesture stream
//! through a controller, approximating the event rate of a live pinch.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use pinchview::PinchZoom;

/// Builds a stream of touch snapshots: fingers land, spread while the
/// midpoint drifts, a third finger taps, the pair resumes, then all lift.
fn synthetic_stream() -> Vec<Vec<Point>> {
    let mut stream = Vec::new();
    stream.push(vec![Point::new(450.0, 500.0), Point::new(550.0, 500.0)]);
    for i in 1..=120 {
        let t = f64::from(i);
        let spread = 50.0 + t * 2.5;
        let mid = Point::new(500.0 + t * 1.5, 500.0 - t);
        stream.push(vec![
            Point::new(mid.x - spread, mid.y),
            Point::new(mid.x + spread, mid.y),
        ]);
    }
    stream.push(vec![
        Point::new(100.0, 200.0),
        Point::new(900.0, 200.0),
        Point::new(500.0, 800.0),
    ]);
    for i in 0..60 {
        let t = f64::from(i);
        let spread = 350.0 - t * 2.0;
        stream.push(vec![
            Point::new(500.0 - spread, 400.0),
            Point::new(500.0 + spread, 400.0),
        ]);
    }
    stream.push(vec![Point::new(500.0, 400.0)]);
    stream.push(Vec::new());
    stream
}

fn bench_gesture_stream(c: &mut Criterion) {
    let content = Size::new(1000.0, 1000.0);
    let stream = synthetic_stream();

    c.bench_function("pinch_gesture_stream", |b| {
        b.iter_batched(
            PinchZoom::new,
            |mut view| {
                for snapshot in &stream {
                    view.on_touches_changed(snapshot, content);
                }
                black_box(view.transform())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_gesture_stream);
criterion_main!(benches);
