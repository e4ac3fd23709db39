//! Criterion micro-benchmarks for path planners.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use plaza_core::{Position, Rect};
use plaza_planner::{Planner, StepPlanner, UpPlanner};

/// Benchmark: Up candidates for every cell of a 64x64 board.
fn bench_up_candidates_4k(c: &mut Criterion) {
    let mut planner = UpPlanner::new(0, Rect::board(64, 64));

    c.bench_function("up_candidates_4k", |b| {
        b.iter(|| {
            for y in 0..64 {
                for x in 0..64 {
                    black_box(planner.future_positions(Position::new(x, y)).unwrap());
                }
            }
        });
    });
}

/// Benchmark: Step candidates along a 63-cell diagonal walk.
fn bench_step_walk_diagonal(c: &mut Criterion) {
    let bounds = Rect::board(64, 64);
    let goal = Position::new(63, 40);

    c.bench_function("step_walk_diagonal", |b| {
        b.iter(|| {
            let mut planner = StepPlanner::seeded(goal, bounds, 42);
            let mut at = Position::new(0, 0);
            while !planner.at_end(at) {
                let candidates = planner.future_positions(at).unwrap();
                at = candidates[0];
            }
            black_box(at)
        });
    });
}

criterion_group!(benches, bench_up_candidates_4k, bench_step_walk_diagonal);
criterion_main!(benches);
