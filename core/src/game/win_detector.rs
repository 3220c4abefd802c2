use super::board::Board;
use super::types::{Mark, Position, WinningLine};

const WIN_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(board: &Board, mark: Mark) -> bool {
    check_win_with_line(board, mark).is_some()
}

pub fn check_win_with_line(board: &Board, mark: Mark) -> Option<WinningLine> {
    if mark == Mark::Empty {
        return None;
    }

    WIN_LINES.iter().find_map(|line| {
        if line.iter().all(|&(row, col)| board[row][col] == mark) {
            let (start_row, start_col) = line[0];
            let (end_row, end_col) = line[2];
            Some(WinningLine::new(
                mark,
                Position::new(start_row, start_col),
                Position::new(end_row, end_col),
            ))
        } else {
            None
        }
    })
}
