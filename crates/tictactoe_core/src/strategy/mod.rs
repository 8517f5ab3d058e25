//! Computer move-selection strategies.
//!
//! Both strategies take the board by shared reference and return `None`
//! on a full board, so a misused selector can neither loop nor mutate.

pub mod minimax;
pub mod random;
