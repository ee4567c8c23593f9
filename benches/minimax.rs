//! Criterion benches for the minimax search.
//!
//! Compares the sequential search against the rayon root split on a
//! Gomoku middlegame, and measures full-depth tic-tac-toe.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gomoku::eval::{PatternEvaluator, TerminalEvaluator};
use gomoku::search::{AllEmpty, Neighborhood, Searcher};
use gomoku::{Board, Stone};

const MIDDLEGAME: &str = "\
...............
...............
...............
...............
...............
.....O.........
......XO.......
......XX.......
.....OXO.......
.......X.......
...............
...............
...............
...............
...............";

fn bench_sequential_vs_parallel(c: &mut Criterion) {
    let board = Board::parse(MIDDLEGAME, 5).expect("valid board");
    let searcher = Searcher::new(Neighborhood::new(1), PatternEvaluator);

    let mut group = c.benchmark_group("gomoku_middlegame");
    group.sample_size(10);
    for depth in [2u32, 3] {
        group.bench_with_input(BenchmarkId::new("sequential", depth), &depth, |b, &depth| {
            b.iter(|| searcher.search(&board, Stone::White, depth).expect("search"));
        });
        group.bench_with_input(BenchmarkId::new("parallel", depth), &depth, |b, &depth| {
            b.iter(|| searcher.search_parallel(&board, Stone::White, depth).expect("search"));
        });
    }
    group.finish();
}

fn bench_tic_tac_toe(c: &mut Criterion) {
    let board = Board::parse("X../.../...", 3).expect("valid board");
    let searcher = Searcher::new(AllEmpty, TerminalEvaluator);

    c.bench_function("tic_tac_toe_full_depth", |b| {
        b.iter(|| searcher.search(std::hint::black_box(&board), Stone::White, 8).expect("search"));
    });
}

criterion_group!(benches, bench_sequential_vs_parallel, bench_tic_tac_toe);
criterion_main!(benches);
