//! Error types for board access and move submission.

use derive_more::{Display, Error};

/// Reason a board access or move submission was rejected.
///
/// All variants are local validation failures. A rejected move leaves the
/// game exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Coordinate outside the 3x3 board.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Target cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },

    /// No match is being played.
    #[display("No game in progress")]
    NotInProgress,

    /// The submitter is not the human whose turn it is.
    #[display("Not this player's turn")]
    OutOfTurn,
}
