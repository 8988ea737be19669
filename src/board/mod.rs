//! Board representation for Pente

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Position on a board.
///
/// Components are signed so that neighbor arithmetic (capture and line
/// scans step up to three cells in a compass direction) can form off-board
/// coordinates and let [`Board::on_board`] decide. `Pos` itself performs no
/// bounds checking; bounds are a board concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The position `steps` cells away in direction `(dr, dc)`.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32) -> Self {
        Self {
            row: self.row + dr * steps,
            col: self.col + dc * steps,
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
