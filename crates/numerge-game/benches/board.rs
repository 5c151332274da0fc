//! Benchmarks for board moves.

use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use numerge_core::Grid;
use numerge_game::{Board, Direction};

fn busy_grid() -> Grid {
    Grid::from_rows([
        [Some(2), Some(2), Some(4), None],
        [None, Some(8), Some(8), Some(16)],
        [Some(4), None, Some(4), Some(4)],
        [Some(32), Some(32), None, Some(2)],
    ])
}

fn bench_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift");
    for direction in Direction::ALL {
        group.bench_function(direction.to_string(), |b| {
            b.iter_batched(
                || Board::from_grid(busy_grid(), 1),
                |mut board| black_box(board.shift(black_box(direction))),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_spawn(c: &mut Criterion) {
    c.bench_function("insert_random_number", |b| {
        b.iter_batched(
            || Board::from_grid(Grid::new(), 1),
            |mut board| black_box(board.insert_random_number()),
            BatchSize::SmallInput,
        );
    });
}

fn bench_game_over(c: &mut Criterion) {
    let board = Board::from_grid(busy_grid(), 1);
    c.bench_function("is_game_over", |b| {
        b.iter(|| black_box(&board).is_game_over());
    });
}

criterion_group!(benches, bench_shift, bench_spawn, bench_game_over);
criterion_main!(benches);
