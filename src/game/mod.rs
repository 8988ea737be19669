//! Game state types for Pente
//!
//! [`MnkGame`] carries the bookkeeping shared by m,n,k-style games (board,
//! turn order, result); [`Pente`] layers the pair-capture rule and the
//! capture win condition on top of it.

pub mod mnk;
pub mod pente;

// Re-exports
pub use mnk::MnkGame;
pub use pente::{Pente, PAIRS_TO_WIN};

/// The two players, in move order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// The cell code this player's stones occupy on the board.
    #[inline]
    pub fn board_value(self) -> u8 {
        match self {
            Player::First => 1,
            Player::Second => 2,
        }
    }

    /// Get the other player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Index into per-player arrays (first = 0, second = 1).
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// The result representing a win for this player.
    #[inline]
    pub fn win_result(self) -> GameResult {
        match self {
            Player::First => GameResult::FirstPlayerWon,
            Player::Second => GameResult::SecondPlayerWon,
        }
    }
}

/// Outcome of a game, `InProgress` until decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    InProgress,
    FirstPlayerWon,
    SecondPlayerWon,
    Draw,
}
