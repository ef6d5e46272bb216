//! Benchmarks for the cube engine and cross solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rubiks::connectivity::connected_facelets;
use rubiks::moves::{all_moves, parse_moves};
use rubiks::scramble::Scrambler;
use rubiks::{Face, Facelet, FaceletState, Solver};

/// Benchmark applying every one of the 54 tokens in turn.
fn bench_apply_moves(c: &mut Criterion) {
    let moves = all_moves();

    c.bench_function("apply_all_tokens", |b| {
        b.iter(|| {
            let mut state = FaceletState::solved();
            state.apply_all(black_box(&moves));
            state
        })
    });
}

/// Benchmark parsing and applying a short algorithm.
fn bench_apply_notation(c: &mut Criterion) {
    c.bench_function("parse_and_apply_sexy_move", |b| {
        b.iter(|| {
            let mut state = FaceletState::solved();
            state.apply_all(&parse_moves(black_box("R U R' U'")).unwrap_or_default());
            state
        })
    });
}

/// Benchmark generating a 50 move scramble.
fn bench_scramble(c: &mut Criterion) {
    let mut scrambler = Scrambler::with_seed(1);

    c.bench_function("generate_scramble_50", |b| {
        b.iter(|| scrambler.generate(black_box(50), &[]))
    });
}

/// Benchmark the adjacency lookup for a corner sticker.
fn bench_connected_facelets(c: &mut Criterion) {
    let corner = Facelet::new(Face::F, 0, 0);

    c.bench_function("connected_facelets_corner", |b| {
        b.iter(|| connected_facelets(black_box(corner)))
    });
}

/// Benchmark solving the cross of a fixed scramble.
fn bench_solve(c: &mut Criterion) {
    let scramble = Scrambler::with_seed(7).generate(50, &[]).unwrap();
    let mut start = FaceletState::solved();
    start.apply_all(&scramble);

    let mut group = c.benchmark_group("cross");
    group.sample_size(50);
    group.bench_function("solve_scramble_50", |b| {
        b.iter(|| Solver::new(black_box(&start)).solve())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_apply_moves,
    bench_apply_notation,
    bench_scramble,
    bench_connected_facelets,
    bench_solve
);
criterion_main!(benches);
