use tictactoe_core::game::{GameMode, InputEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Game(InputEvent),
    Quit,
}

pub fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next()?;

    let command = match keyword {
        "quit" | "exit" => Command::Quit,
        "reset" => Command::Game(InputEvent::ResetRequested),
        "mode" => {
            let mode = match parts.next()? {
                "computer" => GameMode::Computer,
                "two" | "2p" | "two-players" => GameMode::TwoPlayers,
                _ => return None,
            };
            Command::Game(InputEvent::ModeChanged(mode))
        }
        _ => {
            let row: usize = keyword.parse().ok()?;
            let col: usize = parts.next()?.parse().ok()?;
            Command::Game(InputEvent::CellActivated { row, col })
        }
    };

    if parts.next().is_some() {
        return None;
    }

    Some(command)
}
