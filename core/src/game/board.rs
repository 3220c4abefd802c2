use super::types::{BOARD_SIZE, Mark, Position};

pub type Board = [[Mark; BOARD_SIZE]; BOARD_SIZE];

pub fn empty_board() -> Board {
    [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE]
}

pub fn get_available_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    for (row, cells) in board.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}

pub fn is_board_full(board: &Board) -> bool {
    board
        .iter()
        .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
}
