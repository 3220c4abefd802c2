use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use tictactoe_core::game::{
    Board, GameMode, GameState, GameStatus, Mark, SessionRng, calculate_random_move, check_win,
};

fn full_board_without_winner() -> Board {
    [
        [Mark::X, Mark::O, Mark::X],
        [Mark::O, Mark::X, Mark::O],
        [Mark::O, Mark::X, Mark::O],
    ]
}

fn play_random_game(seed: u64) -> GameStatus {
    let mut state = GameState::new(GameMode::TwoPlayers);
    let mut rng = SessionRng::new(seed);

    while state.status() == GameStatus::InProgress {
        let Some(pos) = calculate_random_move(state.board(), &mut rng) else {
            break;
        };
        let _ = state.place_mark(pos.row, pos.col);
    }
    state.status()
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("check_win_full_board", |b| {
        let board = full_board_without_winner();
        b.iter(|| check_win(black_box(&board), Mark::X));
    });

    c.bench_function("random_move_near_full_board", |b| {
        let mut board = full_board_without_winner();
        board[2][1] = Mark::Empty;
        let mut rng = SessionRng::new(42);
        b.iter(|| calculate_random_move(black_box(&board), &mut rng));
    });

    c.bench_function("full_random_game", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            play_random_game(black_box(seed))
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
