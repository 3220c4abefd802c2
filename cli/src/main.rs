mod input;
mod presenter;

use std::io::BufRead;

use clap::{Parser, ValueEnum};

use tictactoe_core::config::load_config;
use tictactoe_core::game::{Board, GameMode, GameSession, GameState, GameStatus, SessionRng};
use tictactoe_core::{log, logger};

use input::{Command, parse_command};
use presenter::TerminalPresenter;

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Computer,
    TwoPlayers,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Computer => GameMode::Computer,
            ModeArg::TwoPlayers => GameMode::TwoPlayers,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    #[arg(long, default_value = "tictactoe_config.yaml")]
    config: String,

    #[arg(long)]
    mode: Option<ModeArg>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = load_config(&args.config)?;
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting game: mode {:?}, seed {}", config.mode, rng.seed());

    let presenter = TerminalPresenter::new(config.messages.clone());
    let state = GameState::new(config.mode);
    let mut session = GameSession::new(state, rng, presenter);

    print_help();
    print_board(session.state().board());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(line.trim()) {
            Some(Command::Quit) => break,
            Some(Command::Game(event)) => {
                session.handle_event(event);
                print_board(session.state().board());
                if session.state().status() == GameStatus::InProgress {
                    println!("{} to move", session.state().current_mark().as_char());
                }
            }
            None => print_help(),
        }
    }

    log!("Session finished");
    Ok(())
}

fn print_board(board: &Board) {
    for row in board.iter() {
        let cells: Vec<String> = row.iter().map(|mark| mark.as_char().to_string()).collect();
        println!("[{}]", cells.join("]["));
    }
}

fn print_help() {
    println!("Commands: <row> <col> | reset | mode computer | mode two | quit");
}
