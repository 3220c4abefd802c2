use crate::log;

use super::bot_controller::calculate_random_move;
use super::game_state::GameState;
use super::session_rng::SessionRng;
use super::types::{GameMode, GameStatus, Mark, Position, WinningLine};
use super::win_detector::check_win_with_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    CellActivated { row: usize, col: usize },
    ResetRequested,
    ModeChanged(GameMode),
}

pub trait GamePresenter {
    fn render_mark(&mut self, position: Position, mark: Mark);
    fn announce_winner(&mut self, mark: Mark, line: WinningLine);
    fn announce_draw(&mut self);
    fn clear_board(&mut self);
}

pub struct GameSession<P: GamePresenter> {
    state: GameState,
    rng: SessionRng,
    presenter: P,
}

impl<P: GamePresenter> GameSession<P> {
    pub fn new(state: GameState, rng: SessionRng, presenter: P) -> Self {
        Self {
            state,
            rng,
            presenter,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CellActivated { row, col } => self.handle_cell_activated(row, col),
            InputEvent::ResetRequested => {
                self.state.reset();
                self.presenter.clear_board();
                log!("Game reset");
            }
            InputEvent::ModeChanged(mode) => {
                self.state.set_mode(mode);
                self.presenter.clear_board();
                log!("Game mode changed to {:?}", mode);
            }
        }
    }

    fn handle_cell_activated(&mut self, row: usize, col: usize) {
        let mover = self.state.current_mark();
        if self.state.place_mark(row, col).is_err() {
            return;
        }
        self.report_move(mover, Position::new(row, col));

        if self.state.status() == GameStatus::InProgress
            && self.state.mode() == GameMode::Computer
            && self.state.current_mark() == Mark::O
        {
            self.play_computer_turn();
        }
    }

    fn play_computer_turn(&mut self) {
        let Some(position) = calculate_random_move(self.state.board(), &mut self.rng) else {
            return;
        };

        let mover = self.state.current_mark();
        if self.state.place_mark(position.row, position.col).is_err() {
            return;
        }
        self.report_move(mover, position);
    }

    fn report_move(&mut self, mover: Mark, position: Position) {
        self.presenter.render_mark(position, mover);

        match self.state.status() {
            GameStatus::XWon | GameStatus::OWon => {
                if let Some(line) = check_win_with_line(self.state.board(), mover) {
                    log!("{} won at ({}, {})", mover.as_char(), position.row, position.col);
                    self.presenter.announce_winner(mover, line);
                }
            }
            GameStatus::Draw => {
                log!("Game ended in a draw");
                self.presenter.announce_draw();
            }
            GameStatus::InProgress => {}
        }
    }
}
