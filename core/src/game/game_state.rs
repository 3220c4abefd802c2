use super::board::{self, Board};
use super::types::{BOARD_SIZE, GameMode, GameStatus, Mark, Position};
use super::win_detector;

#[derive(Debug)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    mode: GameMode,
    status: GameStatus,
    last_move: Option<Position>,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: board::empty_board(),
            current_mark: Mark::X,
            mode,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }

        if self.board[row][col] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board[row][col] = self.current_mark;
        self.last_move = Some(Position::new(row, col));

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    // Evaluated for the mover, before any turn switch.
    pub fn check_win(&self) -> bool {
        win_detector::check_win(&self.board, self.current_mark)
    }

    pub fn is_draw(&self) -> bool {
        board::is_board_full(&self.board)
            && !win_detector::check_win(&self.board, Mark::X)
            && !win_detector::check_win(&self.board, Mark::O)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.board = board::empty_board();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    pub fn set_cells(&mut self, cells: Board) {
        self.board = cells;
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        if win_detector::check_win(&self.board, self.current_mark) {
            self.status = match self.current_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if board::is_board_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}
