// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel navigation operations.
//!
//! Measures the performance of:
//! - Wrap-around navigation (advance/retreat/go_to)
//! - Eager-load window computation
//! - Swipe gesture classification

use criterion::{criterion_group, criterion_main, Criterion};
use image_carousel::carousel::subcomponents::position;
use image_carousel::carousel::subcomponents::swipe::{self, Point};
use std::hint::black_box;

/// Benchmark wrap-around navigation over a large strip.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    group.bench_function("advance_full_cycle", |b| {
        b.iter(|| {
            let mut state = position::State::new(1000);
            for _ in 0..1000 {
                state.handle(position::Message::Advance);
            }
            black_box(state.index());
        });
    });

    group.bench_function("go_to_modulo", |b| {
        b.iter(|| {
            let mut state = position::State::new(7);
            state.handle(position::Message::GoTo(black_box(123_456_789)));
            black_box(state.index());
        });
    });

    group.finish();
}

/// Benchmark the eager-load window computation.
fn bench_prefetch_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    let mut state = position::State::new(500);
    state.handle(position::Message::GoTo(499));

    group.bench_function("prefetch_window", |b| {
        b.iter(|| {
            black_box(state.prefetch_window());
        });
    });

    group.finish();
}

/// Benchmark a full gesture session through classification.
fn bench_swipe_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_gestures");

    group.bench_function("swipe_session", |b| {
        b.iter(|| {
            let mut state = swipe::State::new(50.0);
            state.handle(swipe::Message::Started(Point::new(200.0, 200.0)));
            state.handle(swipe::Message::Moved(Point::new(140.0, 205.0)));
            black_box(state.handle(swipe::Message::Ended));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_navigate,
    bench_prefetch_window,
    bench_swipe_classification
);
criterion_main!(benches);
