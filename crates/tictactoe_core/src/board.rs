//! The 3x3 board and terminal-state detection.

use crate::error::GameError;
use crate::types::{Cell, Coord, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board-level terminal result, before it is attributed to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// A full line of this mark.
    Win(Mark),
    /// Full board with no line.
    Tie,
}

/// Lines checked for a win: diagonals, then rows, then columns.
const LINES: [[(usize, usize); 3]; 8] = [
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
];

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Returns the board size as `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (Coord::SIZE, Coord::SIZE)
    }

    /// Gets the cell at `(row, col)`.
    pub fn get_cell(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        Coord::new(row, col).map(|coord| self.get(coord))
    }

    /// Sets the cell at `(row, col)`, overwriting whatever is there.
    ///
    /// Occupancy is the caller's concern.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GameError> {
        let coord = Coord::new(row, col)?;
        self.set(coord, cell);
        Ok(())
    }

    /// Gets the cell at a validated coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Sets the cell at a validated coordinate.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row()][coord.col()] = cell;
    }

    /// Checks if the cell at `coord` is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_empty()
    }

    /// Checks if at least one cell is empty.
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().flatten().any(|cell| cell.is_empty())
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::ALL.into_iter().filter(|&coord| self.is_empty(coord))
    }

    /// Evaluates the board.
    ///
    /// Returns the mark of the first complete line, `Tie` for a full board
    /// without one, and `None` while play can continue.
    pub fn evaluate_outcome(&self) -> Option<Verdict> {
        for [a, b, c] in LINES {
            let first = self.cells[a.0][a.1];
            if let Cell::Occupied(mark) = first
                && first == self.cells[b.0][b.1]
                && first == self.cells[c.0][c.1]
            {
                return Some(Verdict::Win(mark));
            }
        }

        if self.has_empty_cell() {
            None
        } else {
            Some(Verdict::Tie)
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; 3]; 3];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Renders rows as `X|O|3`; empty cells show their keypad number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, "{}", row * Coord::SIZE + col + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::Occupied(Mark::X),
                    'O' => Cell::Occupied(Mark::O),
                    _ => Cell::Empty,
                };
                board.set_cell(row, col, cell).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_outcome() {
        let board = Board::new();
        assert!(board.has_empty_cell());
        assert_eq!(board.evaluate_outcome(), None);
    }

    #[test]
    fn test_get_cell_out_of_range() {
        let board = Board::new();
        assert_eq!(
            board.get_cell(0, 3),
            Err(GameError::OutOfRange { row: 0, col: 3 })
        );
    }

    #[test]
    fn test_set_cell_out_of_range_leaves_board() {
        let mut board = Board::new();
        let result = board.set_cell(5, 0, Cell::Occupied(Mark::X));
        assert_eq!(result, Err(GameError::OutOfRange { row: 5, col: 0 }));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_set_cell_overwrites() {
        let mut board = Board::new();
        board.set_cell(1, 1, Cell::Occupied(Mark::X)).unwrap();
        board.set_cell(1, 1, Cell::Occupied(Mark::O)).unwrap();
        assert_eq!(board.get_cell(1, 1), Ok(Cell::Occupied(Mark::O)));
    }

    #[test]
    fn test_winner_row() {
        let board = board_from(["...", "OO.", "XXX"]);
        assert_eq!(board.evaluate_outcome(), Some(Verdict::Win(Mark::X)));
    }

    #[test]
    fn test_winner_column() {
        let board = board_from(["XO.", "XO.", ".OX"]);
        assert_eq!(board.evaluate_outcome(), Some(Verdict::Win(Mark::O)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from(["XXO", ".O.", "OX."]);
        assert_eq!(board.evaluate_outcome(), Some(Verdict::Win(Mark::O)));
    }

    #[test]
    fn test_win_on_full_board_is_not_tie() {
        let board = board_from(["XOX", "OXO", "OXX"]);
        assert_eq!(board.evaluate_outcome(), Some(Verdict::Win(Mark::X)));
    }

    #[test]
    fn test_tie() {
        let board = board_from(["XOX", "XOO", "OXX"]);
        assert!(!board.has_empty_cell());
        assert_eq!(board.evaluate_outcome(), Some(Verdict::Tie));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = board_from(["X.O", ".X.", "OOX"]);
        let empties: Vec<_> = board.empty_cells().map(|c| (c.row(), c.col())).collect();
        assert_eq!(empties, vec![(0, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn test_reset() {
        let mut board = board_from(["XOX", "XOO", "OXX"]);
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let board = board_from(["X..", ".O.", "..."]);
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
        assert_eq!(board.dimensions(), (3, 3));
    }
}
