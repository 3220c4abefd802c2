mod board;
mod bot_controller;
mod game_state;
mod session;
mod session_rng;
mod types;
mod win_detector;

pub use board::{Board, empty_board, get_available_moves, is_board_full};
pub use bot_controller::calculate_random_move;
pub use game_state::GameState;
pub use session::{GamePresenter, GameSession, InputEvent};
pub use session_rng::SessionRng;
pub use types::{BOARD_SIZE, GameMode, GameStatus, Mark, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
