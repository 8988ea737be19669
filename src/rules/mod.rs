//! Game rules for Pente
//!
//! - Custodial pair capture (the X-O-O-X pattern)
//! - k-in-a-row win detection

pub mod capture;
pub mod win;

// Re-exports for convenient access
pub use capture::{captured_positions, has_capture};
pub use win::{has_line_through, has_row_of};
