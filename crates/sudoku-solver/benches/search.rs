//! Benchmarks for the backtracking search.
//!
//! Measures `solve` with each propagation strategy on fixed boards, from a
//! propagation-only easy puzzle up to a board that needs deep search.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench search
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sudoku_core::Board;
use sudoku_solver::{Propagator, null_propagation, propagate_forced_moves, solve};

const EASY: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

const HARD: &str = "
    7__ ___ ___
    6__ 41_ 25_
    _13 _95 ___
    86_ ___ ___
    3_1 ___ 4_5
    ___ ___ _86
    ___ 84_ 53_
    _42 _36 __7
    ___ ___ __9
";

const EMPTY: &str = "
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
";

fn strategies() -> [(&'static str, Propagator); 2] {
    [
        ("simple", null_propagation as Propagator),
        ("smart", propagate_forced_moves as Propagator),
    ]
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for (board_name, input) in [("easy", EASY), ("hard", HARD), ("empty", EMPTY)] {
        let board: Board = input.parse().unwrap();
        for (strategy_name, propagate) in strategies() {
            group.bench_with_input(
                BenchmarkId::new(board_name, strategy_name),
                &board,
                |b, board| {
                    b.iter_batched(
                        || *board,
                        |mut board| hint::black_box(solve(&mut board, propagate)),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
}

fn bench_propagation(c: &mut Criterion) {
    // the easy puzzle falls entirely to forced-move chains
    let board: Board = EASY.parse().unwrap();
    c.bench_function("propagate_forced_moves/easy", |b| {
        b.iter_batched(
            || board,
            |mut board| hint::black_box(propagate_forced_moves(&mut board)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_solve, bench_propagation);
criterion_main!(benches);
