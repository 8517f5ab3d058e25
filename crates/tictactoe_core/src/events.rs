//! Notifications sent from the game to its presenter.

use crate::game::Outcome;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Receives board and outcome changes as they happen.
///
/// Every placement is reported, including each computer move in a
/// resolution chain. `on_game_over` fires exactly once per finished match.
pub trait GameObserver {
    /// A mark was placed at `(row, col)`.
    fn on_cell_changed(&mut self, row: usize, col: usize, mark: Mark);

    /// The match finished.
    fn on_game_over(&mut self, outcome: &Outcome);
}

/// Observer that ignores everything.
impl GameObserver for () {
    fn on_cell_changed(&mut self, _row: usize, _col: usize, _mark: Mark) {}

    fn on_game_over(&mut self, _outcome: &Outcome) {}
}

/// A notification in value form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A mark was placed.
    CellChanged {
        /// Row of the placed mark.
        row: usize,
        /// Column of the placed mark.
        col: usize,
        /// The mark.
        mark: Mark,
    },
    /// The match finished.
    GameOver {
        /// Final result.
        outcome: Outcome,
    },
}

/// Records every notification in order.
impl GameObserver for Vec<GameEvent> {
    fn on_cell_changed(&mut self, row: usize, col: usize, mark: Mark) {
        self.push(GameEvent::CellChanged { row, col, mark });
    }

    fn on_game_over(&mut self, outcome: &Outcome) {
        self.push(GameEvent::GameOver {
            outcome: outcome.clone(),
        });
    }
}
