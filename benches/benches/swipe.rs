// Copyright 2026 the Swipecell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Vec2;
use swipecell::{Action, SwipeCell, rubber_band};

fn bench_rubber_band(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipecell/rubber_band");

    // Within the limit the mapping is a branch and a copy; past it there is
    // a powf per call. Measure both regimes.
    for (name, raw) in [("tracking", 50.0_f64), ("overshoot", 180.0)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &raw, |b, &raw| {
            b.iter(|| black_box(rubber_band(black_box(raw), black_box(80.0))));
        });
    }

    group.finish();
}

fn bench_pan_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipecell/pan");

    // A realistic gesture: one pan-start, a trail of move events, one end.
    for moves in [16_usize, 64, 256] {
        let trail: Vec<Vec2> = (0..moves)
            .map(|i| Vec2::new(i as f64 * 0.75, (i % 5) as f64 * 0.1))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(moves), &trail, |b, trail| {
            b.iter_batched(
                || {
                    let mut cell = SwipeCell::new()
                        .with_left(vec![Action::new("Archive")])
                        .with_right(vec![Action::new("Delete")]);
                    cell.set_measured_widths(80.0, 120.0);
                    cell
                },
                |mut cell| {
                    cell.on_pan_start(Vec2::ZERO);
                    for &delta in trail {
                        cell.on_pan(delta);
                    }
                    cell.on_pan_end(*trail.last().unwrap());
                    black_box(cell.state());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rubber_band, bench_pan_session);
criterion_main!(benches);
