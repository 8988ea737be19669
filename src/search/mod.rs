//! Search support for a minimax/alpha-beta driver
//!
//! The driver itself lives outside this crate; what it needs from us is a
//! depth-aware transposition table keyed on game-state value identity.

pub mod tt;

pub use tt::{StateInfo, TranspositionTable};
