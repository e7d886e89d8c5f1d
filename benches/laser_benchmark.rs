//! Benchmarks for laser resolution and full turn application, the
//! per-move hot path a busy server runs for every game.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use laser_chess::{fire, initial_board, Game, MoveSpec, Player, Position, Rotation};

fn bench_resolution_initial(c: &mut Criterion) {
    let board = initial_board();
    c.bench_function("fire_initial_board", |b| {
        b.iter(|| fire(black_box(&board), black_box(Player::Red)));
    });
}

fn bench_resolution_long_chain(c: &mut Criterion) {
    // The six-mirror chain across the whole board.
    let mut game = Game::new();
    game.apply_move(
        Player::Red,
        MoveSpec::Rotate {
            position: Position::new(5, 9),
            delta: Rotation::Cw,
        },
    )
    .unwrap();
    let board = game.state().board().clone();

    c.bench_function("fire_six_mirror_chain", |b| {
        b.iter(|| fire(black_box(&board), black_box(Player::Red)));
    });
}

fn bench_full_turn(c: &mut Criterion) {
    let spec = MoveSpec::Rotate {
        position: Position::new(6, 4),
        delta: Rotation::Cw,
    };

    c.bench_function("apply_move_full_turn", |b| {
        b.iter_batched(
            Game::new,
            |mut game| {
                let snapshot = game.apply_move(Player::Red, black_box(spec));
                black_box(snapshot)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_resolution_initial,
    bench_resolution_long_chain,
    bench_full_turn
);
criterion_main!(benches);
