//! Pente game state
//!
//! Pente is an m,n,k game with a custodial capture rule: two adjacent
//! stones bracketed by the opponent on both ends are removed as a pair, and
//! capturing five pairs wins outright. Played here on the classic 8x8
//! board with five in a row to win.

use std::fmt;

use super::{GameResult, MnkGame, Player};
use crate::board::Pos;
use crate::rules::{capture, win};

/// Captured pairs needed for a capture win.
pub const PAIRS_TO_WIN: u8 = 5;

const ROWS: usize = 8;
const COLS: usize = 8;
const WIN_LENGTH: usize = 5;

/// A Pente game.
///
/// Mutated only through [`make_move`](Pente::make_move) or cloned; equality
/// and hashing are value-based over the full logical state (board, current
/// player, turn, result, both capture counters), which is the contract the
/// transposition table keys on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pente {
    game: MnkGame,
    /// Captured pairs per player, indexed by [`Player::index`].
    captured_pairs: [u8; 2],
}

impl Pente {
    /// Create a fresh 8-by-8 Pente game.
    #[must_use]
    pub fn new() -> Self {
        Self {
            game: MnkGame::new(ROWS, COLS, WIN_LENGTH),
            captured_pairs: [0, 0],
        }
    }

    #[inline]
    pub fn board(&self) -> &crate::board::Board {
        self.game.board()
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.game.current_player()
    }

    #[inline]
    pub fn turn(&self) -> u32 {
        self.game.turn()
    }

    #[inline]
    pub fn result(&self) -> GameResult {
        self.game.result()
    }

    /// True once the game is decided: five in a row, five captured pairs,
    /// or a full board.
    #[inline]
    pub fn has_ended(&self) -> bool {
        self.game.has_ended()
    }

    /// Number of pairs `player` has captured.
    #[inline]
    pub fn captured_pairs(&self, player: Player) -> u8 {
        self.captured_pairs[player.index()]
    }

    /// Play the current player's stone at `p`.
    ///
    /// Performs all captures the placement triggers, updates the result if
    /// the move decides the game, then passes the turn. Total: returns
    /// `false` (with no state mutated) for an off-board or occupied cell,
    /// or when the game has already ended.
    pub fn make_move(&mut self, p: Pos) -> bool {
        if self.has_ended() || !self.game.board().valid_pos(p) {
            return false;
        }

        let mover = self.game.current_player();
        self.game.board_mut().place(p, mover);

        let captured = capture::captured_positions(self.game.board(), p, mover);
        for &c in &captured {
            self.game.board_mut().erase(c);
        }
        let pairs = (captured.len() / 2) as u8;
        self.captured_pairs[mover.index()] += pairs;

        // Decide the result now so that `has_ended` stays a pure read and
        // state identity is independent of the path that reached it.
        if self.captured_pairs[mover.index()] >= PAIRS_TO_WIN
            || win::has_line_through(self.game.board(), p, mover, self.game.win_length())
        {
            self.game.set_result(mover.win_result());
        } else if self.game.board().is_full() {
            self.game.set_result(GameResult::Draw);
        }

        self.game.change_player();
        self.game.advance_turn();
        true
    }

    /// The state of the game after the current player moves at `p`, leaving
    /// `self` untouched. An illegal `p` yields an unchanged copy.
    #[must_use]
    pub fn apply_move(&self, p: Pos) -> Pente {
        let mut next = self.clone();
        next.make_move(p);
        next
    }

    /// True if the two games have the same state.
    #[inline]
    pub fn state_eq(&self, other: &Pente) -> bool {
        self == other
    }
}

impl Default for Pente {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Pente {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.game)?;
        write!(
            f,
            "Captured pairs: first: {}, second: {}",
            self.captured_pairs(Player::First),
            self.captured_pairs(Player::Second)
        )
    }
}
