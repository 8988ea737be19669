//! Pente game core and search support
//!
//! The state model and memoization layer underneath a minimax/alpha-beta
//! Pente player:
//! - 8x8 board, 5-in-a-row to win
//! - Pair capture rule: X-O-O-X removes the O-O pair
//! - Capture win: 5 captured pairs
//! - A chaining, depth-aware transposition table keyed on state identity
//!
//! # Architecture
//!
//! - [`board`]: the m-by-n grid and positions
//! - [`game`]: turn-order bookkeeping ([`MnkGame`]) and the Pente rules
//!   layered on top ([`Pente`])
//! - [`rules`]: capture and win detection primitives
//! - [`search`]: the transposition table a search driver memoizes into
//!
//! The search driver, heuristic evaluator, and any front-end live outside
//! this crate; they consume the value-based equality/hash contract the game
//! states provide and the table keys on.
//!
//! # Quick Start
//!
//! ```
//! use pente::{Pente, Pos, TranspositionTable};
//!
//! let game = Pente::new();
//!
//! // States are cloned-and-advanced, never mutated in place by the search
//! let next = game.apply_move(Pos::new(3, 3));
//! assert_eq!(game.turn(), 0);
//! assert_eq!(next.turn(), 1);
//!
//! // Memoize an evaluation and find it again through a value-equal key
//! let mut tt = TranspositionTable::new();
//! tt.add(next.clone(), 4, 120);
//! assert_eq!(tt.get_info(&next).map(|info| info.value), Some(120));
//! ```

pub mod board;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos};
pub use game::{GameResult, MnkGame, Pente, Player, PAIRS_TO_WIN};
pub use search::{StateInfo, TranspositionTable};
