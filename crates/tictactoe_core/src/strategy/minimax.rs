//! Exhaustive minimax search.
//!
//! The search visits every legal continuation with no pruning and no depth
//! discount: a win is worth the same whether it comes now or five plies
//! later. Among equally scored moves the first in row-major order wins.

use crate::board::{Board, Verdict};
use crate::types::{Cell, Coord, Mark};
use tracing::{debug, instrument};

/// Score of a position the searching player has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a position the opponent has won.
pub const LOSS_SCORE: i32 = -10;

/// Score of a drawn position.
pub const TIE_SCORE: i32 = 0;

/// Picks the best cell for `mark`, assuming the opponent replies optimally.
///
/// Trial marks are placed on a private copy, so the caller's board is never
/// touched. Returns `None` on a full board.
#[instrument(skip(board), fields(empty = board.empty_cells().count()))]
pub fn select_move(board: &Board, mark: Mark) -> Option<Coord> {
    let mut scratch = board.clone();
    let mut best: Option<(Coord, i32)> = None;

    for coord in Coord::ALL {
        if !scratch.is_empty(coord) {
            continue;
        }
        scratch.set(coord, Cell::Occupied(mark));
        let score = minimax(&mut scratch, mark, mark.opponent());
        scratch.set(coord, Cell::Empty);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((coord, score));
        }
    }

    debug!(best = ?best, "Minimax search complete");
    best.map(|(coord, _)| coord)
}

/// Value of `board` for `mark` when `mark` is the side to move.
pub fn evaluate_position(board: &Board, mark: Mark) -> i32 {
    let mut scratch = board.clone();
    minimax(&mut scratch, mark, mark)
}

/// Recursive position value from `me`'s point of view.
///
/// Every trial mark is reverted before the loop moves on, so `board` leaves
/// in the state it arrived in.
fn minimax(board: &mut Board, me: Mark, to_move: Mark) -> i32 {
    match board.evaluate_outcome() {
        Some(Verdict::Win(winner)) if winner == me => return WIN_SCORE,
        Some(Verdict::Win(_)) => return LOSS_SCORE,
        Some(Verdict::Tie) => return TIE_SCORE,
        None => {}
    }

    let maximizing = to_move == me;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for coord in Coord::ALL {
        if !board.is_empty(coord) {
            continue;
        }
        board.set(coord, Cell::Occupied(to_move));
        let score = minimax(board, me, to_move.opponent());
        board.set(coord, Cell::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
