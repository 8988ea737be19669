//! k-in-a-row win detection

use crate::board::{Board, Pos};
use crate::game::Player;

/// Line directions (each covers both ways along the line).
const LINES: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// True if `player` has `k` or more in a row through `p`.
///
/// Only lines through `p` are examined, which is sufficient after a move:
/// a placement can only complete a line containing the placed stone, and
/// captures never add stones. No allocation.
pub fn has_line_through(board: &Board, p: Pos, player: Player, k: usize) -> bool {
    let own = player.board_value();
    if !board.on_board(p) || board.get(p) != own {
        return false;
    }

    for &(dr, dc) in &LINES {
        let mut count = 1;
        for sign in [1, -1] {
            let mut step = 1;
            loop {
                let q = p.offset(dr * sign, dc * sign, step);
                if !board.on_board(q) || board.get(q) != own {
                    break;
                }
                count += 1;
                step += 1;
            }
        }
        if count >= k {
            return true;
        }
    }
    false
}

/// True if `player` has `k` or more in a row anywhere on the board.
///
/// Full-board scan; game code uses [`has_line_through`] after each move,
/// this exists for positions built up out of move order (tests, analysis).
pub fn has_row_of(board: &Board, player: Player, k: usize) -> bool {
    for row in 0..board.row_size() as i32 {
        for col in 0..board.col_size() as i32 {
            if has_line_through(board, Pos::new(row, col), player, k) {
                return true;
            }
        }
    }
    false
}
