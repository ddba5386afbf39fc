//! Benchmarks for move legality and game bookkeeping.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_judge::board::{standard_position, Coordinate};
use chess_judge::judge::{ChessJudge, MovementData, MovementJudge, TeamPieces};
use chess_judge::{GameMediator, Team};

fn at(column: i32, row: i32) -> Coordinate {
    Coordinate::new(column, row).unwrap()
}

/// A quiet opening position with many pieces still on the board.
fn italian_game() -> GameMediator {
    let mut game = GameMediator::default();
    for ((c1, r1), (c2, r2)) in [
        ((5, 2), (5, 4)),
        ((5, 7), (5, 5)),
        ((7, 1), (6, 3)),
        ((2, 8), (3, 6)),
        ((6, 1), (3, 4)),
        ((6, 8), (3, 5)),
    ] {
        game.move_piece(at(c1, r1), at(c2, r2));
    }
    game
}

fn bench_single_move(c: &mut Criterion) {
    let board = standard_position();
    let white = TeamPieces::scan(&board, Team::White);
    let black = TeamPieces::scan(&board, Team::Black);
    let data = MovementData::new(at(5, 2), at(5, 4), &board).with_teams(&white, &black);

    c.bench_function("is_legal_move/e2e4", |b| {
        b.iter(|| ChessJudge.is_legal_move(black_box(&data)))
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    let start = GameMediator::default();
    group.bench_function("startpos", |b| b.iter(|| black_box(start.legal_moves())));

    let italian = italian_game();
    group.bench_function("italian", |b| b.iter(|| black_box(italian.legal_moves())));

    group.finish();
}

fn bench_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("playout");

    for plies in [10usize, 40] {
        group.bench_with_input(BenchmarkId::new("first_move", plies), &plies, |b, &plies| {
            b.iter(|| {
                let mut game = GameMediator::default();
                for _ in 0..plies {
                    let Some(&(origin, destination)) = game.legal_moves().first() else {
                        break;
                    };
                    game.move_piece(origin, destination);
                    if game.state() != chess_judge::GameState::Movement {
                        break;
                    }
                }
                black_box(game.current_turn())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_move, bench_legal_moves, bench_playout);
criterion_main!(benches);
