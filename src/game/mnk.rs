//! Base m,n,k game state: board plus turn-order bookkeeping

use std::fmt;

use super::{GameResult, Player};
use crate::board::Board;

/// Shared state of an m,n,k-style game: the board, whose turn it is, how
/// many moves have been played, and the result so far.
///
/// Equality and hashing are value-based over every field, which is what
/// makes two states reached by transposing move orders indistinguishable to
/// the transposition table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MnkGame {
    board: Board,
    current: Player,
    turn: u32,
    result: GameResult,
    win_length: usize,
}

impl MnkGame {
    /// Create a new `rows`-by-`cols` game won by `win_length` in a row.
    /// The first player moves first.
    #[must_use]
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Self {
        Self {
            board: Board::new(rows, cols),
            current: Player::First,
            turn: 0,
            result: GameResult::InProgress,
            win_length,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Number of moves played so far.
    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[inline]
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Stones in a row needed to win.
    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// True once the result has been decided.
    #[inline]
    pub fn has_ended(&self) -> bool {
        self.result != GameResult::InProgress
    }

    #[inline]
    pub(crate) fn change_player(&mut self) {
        self.current = self.current.opponent();
    }

    #[inline]
    pub(crate) fn advance_turn(&mut self) {
        self.turn += 1;
    }

    #[inline]
    pub(crate) fn set_result(&mut self, result: GameResult) {
        self.result = result;
    }

    /// True if the two games have the same state.
    #[inline]
    pub fn state_eq(&self, other: &MnkGame) -> bool {
        self == other
    }
}

impl fmt::Display for MnkGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
