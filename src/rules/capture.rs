//! Pair capture rule (Pente-style custodial capture)
//!
//! Capture pattern: X-O-O-X along any of the 8 compass directions, where X
//! is the capturing player and O the opponent. The freshly placed stone is
//! one flank; exactly the two sandwiched opponent stones are removed.

use crate::board::{Board, Pos};
use crate::game::Player;

/// The 8 compass directions a capture can run in.
const DIRECTIONS: [(i32, i32); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Find the stones captured by `player`'s stone at `p`.
///
/// `board` must already contain the placed stone (the scan never reads `p`
/// itself, so scanning before placement gives the same answer). Each
/// direction is examined independently against the same snapshot, so the
/// returned set does not depend on direction order. The result holds the
/// two sandwiched opponent cells of every capturing direction, in direction
/// order; its length is always even.
pub fn captured_positions(board: &Board, p: Pos, player: Player) -> Vec<Pos> {
    let mut captured = Vec::new();
    let own = player.board_value();
    let opp = player.opponent().board_value();

    for &(dr, dc) in &DIRECTIONS {
        let p1 = p.offset(dr, dc, 1);
        let p2 = p.offset(dr, dc, 2);
        let p3 = p.offset(dr, dc, 3);

        // The nearer cells are on board whenever the farthest one is, but
        // the board may be arbitrarily small, so check all three.
        if !board.on_board(p1) || !board.on_board(p2) || !board.on_board(p3) {
            continue;
        }

        if board.get(p1) == opp && board.get(p2) == opp && board.get(p3) == own {
            captured.push(p1);
            captured.push(p2);
        }
    }

    captured
}

/// True if placing `player`'s stone at `p` would capture at least one pair.
#[inline]
pub fn has_capture(board: &Board, p: Pos, player: Player) -> bool {
    let own = player.board_value();
    let opp = player.opponent().board_value();

    DIRECTIONS.iter().any(|&(dr, dc)| {
        let p1 = p.offset(dr, dc, 1);
        let p2 = p.offset(dr, dc, 2);
        let p3 = p.offset(dr, dc, 3);
        board.on_board(p1)
            && board.on_board(p2)
            && board.on_board(p3)
            && board.get(p1) == opp
            && board.get(p2) == opp
            && board.get(p3) == own
    })
}
