use super::board::{Board, get_available_moves};
use super::session_rng::SessionRng;
use super::types::Position;

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::empty_board;
    use crate::game::types::{BOARD_SIZE, Mark};

    #[test]
    fn test_random_move_lands_on_an_empty_cell() {
        let mut board = empty_board();
        board[0][0] = Mark::X;
        board[1][1] = Mark::O;
        board[2][2] = Mark::X;

        let mut rng = SessionRng::new(1);
        for _ in 0..50 {
            let pos = calculate_random_move(&board, &mut rng).unwrap();
            assert_eq!(board[pos.row][pos.col], Mark::Empty);
        }
    }

    #[test]
    fn test_single_empty_cell_is_always_chosen() {
        let mut board = [[Mark::X; BOARD_SIZE]; BOARD_SIZE];
        board[2][1] = Mark::Empty;

        let mut rng = SessionRng::new(3);
        let pos = calculate_random_move(&board, &mut rng).unwrap();
        assert_eq!(pos, Position::new(2, 1));
    }

    #[test]
    fn test_full_board_yields_no_move() {
        let board = [[Mark::O; BOARD_SIZE]; BOARD_SIZE];
        let mut rng = SessionRng::new(5);
        assert_eq!(calculate_random_move(&board, &mut rng), None);
    }
}
