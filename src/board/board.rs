//! Board structure: an m-by-n grid of cell occupants

use std::fmt;

use super::Pos;
use crate::game::Player;

/// Cell code for an empty cell. Occupied cells hold a player's
/// [`board_value`](Player::board_value).
pub const EMPTY: u8 = 0;

/// A mutable m-by-n board where each cell is empty or occupied by a player.
///
/// Cells are stored in one contiguous buffer of length
/// `row_size * col_size`, indexed as `row * col_size + col`. Dimensions are
/// fixed at construction. Equality and hashing cover dimensions and every
/// cell, so two boards with the same contents are interchangeable as
/// transposition-table keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Vec<u8>,
    row_size: usize,
    col_size: usize,
}

impl Board {
    /// Create a new, empty `row_size`-by-`col_size` board.
    #[must_use]
    pub fn new(row_size: usize, col_size: usize) -> Self {
        Self {
            cells: vec![EMPTY; row_size * col_size],
            row_size,
            col_size,
        }
    }

    /// Occupant code at `p`: 0 if empty, otherwise the occupying player's
    /// board value.
    ///
    /// Requires `p` on board.
    #[inline]
    pub fn get(&self, p: Pos) -> u8 {
        self.cells[self.index(p)]
    }

    /// Place a stone for `player` at `p`.
    ///
    /// Requires `p` on board and empty. Game-state code only; captures and
    /// turn bookkeeping live in the game types.
    #[inline]
    pub(crate) fn place(&mut self, p: Pos, player: Player) {
        let value = player.board_value();
        debug_assert!(value > 0 && value < 127);
        debug_assert!(self.valid_pos(p));
        let idx = self.index(p);
        self.cells[idx] = value;
    }

    /// Set the cell at `p` back to empty.
    ///
    /// Requires `p` on board.
    #[inline]
    pub(crate) fn erase(&mut self, p: Pos) {
        let idx = self.index(p);
        self.cells[idx] = EMPTY;
    }

    /// True if `p` is on the board and currently empty.
    #[inline]
    pub fn valid_pos(&self, p: Pos) -> bool {
        self.on_board(p) && self.cells[self.index(p)] == EMPTY
    }

    /// True if `p` is within the board bounds.
    #[inline]
    pub fn on_board(&self, p: Pos) -> bool {
        p.row >= 0
            && (p.row as usize) < self.row_size
            && p.col >= 0
            && (p.col as usize) < self.col_size
    }

    #[inline]
    pub fn row_size(&self) -> usize {
        self.row_size
    }

    #[inline]
    pub fn col_size(&self) -> usize {
        self.col_size
    }

    /// True if no cell is empty.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != EMPTY)
    }

    /// The buffer index at which `p` is stored. Requires `p` on board.
    #[inline]
    fn index(&self, p: Pos) -> usize {
        debug_assert!(self.on_board(p));
        p.row as usize * self.col_size + p.col as usize
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.row_size {
            for col in 0..self.col_size {
                let ch = match self.get(Pos::new(row as i32, col as i32)) {
                    EMPTY => '.',
                    1 => 'X',
                    2 => 'O',
                    other => (b'0' + other % 10) as char,
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
