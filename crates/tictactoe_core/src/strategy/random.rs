//! Uniformly random move selection.

use crate::board::Board;
use crate::types::Coord;
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks a uniformly random empty cell.
///
/// Enumerates the empty cells first, so a full board yields `None`
/// instead of spinning.
pub fn select_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coord> {
    let empty: Vec<Coord> = board.empty_cells().collect();
    empty.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Mark};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_only_empty_cells_chosen() {
        let mut board = Board::new();
        for coord in Coord::ALL.iter().take(6) {
            board.set(*coord, Cell::Occupied(Mark::X));
        }
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let coord = select_move(&board, &mut rng).unwrap();
            assert!(board.is_empty(coord));
            seen.insert(coord);
        }
        // 200 draws over 3 cells hit every one
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_single_empty_cell() {
        let mut board = Board::new();
        for coord in Coord::ALL {
            board.set(coord, Cell::Occupied(Mark::O));
        }
        let last = Coord::new(2, 1).unwrap();
        board.set(last, Cell::Empty);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_move(&board, &mut rng), Some(last));
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut board = Board::new();
        for coord in Coord::ALL {
            board.set(coord, Cell::Occupied(Mark::X));
        }
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(select_move(&board, &mut rng), None);
    }
}
