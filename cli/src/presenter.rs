use tictactoe_core::config::MessageConfig;
use tictactoe_core::game::{GamePresenter, Mark, Position, WinningLine};

pub struct TerminalPresenter {
    messages: MessageConfig,
}

impl TerminalPresenter {
    pub fn new(messages: MessageConfig) -> Self {
        Self { messages }
    }
}

impl GamePresenter for TerminalPresenter {
    fn render_mark(&mut self, position: Position, mark: Mark) {
        println!(
            "{} placed at ({}, {})",
            mark.as_char(),
            position.row,
            position.col
        );
    }

    fn announce_winner(&mut self, mark: Mark, line: WinningLine) {
        println!("{}", self.messages.winner_text(mark.as_char()));
        println!(
            "Winning line: ({}, {}) to ({}, {})",
            line.start.row, line.start.col, line.end.row, line.end.col
        );
    }

    fn announce_draw(&mut self) {
        println!("{}", self.messages.draw);
    }

    fn clear_board(&mut self) {
        println!("Board cleared");
    }
}
