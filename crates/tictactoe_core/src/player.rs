//! Players and their kinds.

use crate::board::Board;
use crate::strategy;
use crate::types::{Coord, Mark};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Move-selection policy of a computer player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    /// Uniformly random empty cell.
    Random,
    /// Exhaustive minimax; never loses.
    Optimal,
}

/// Who decides a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves arrive from outside through `Game::submit_move`.
    Human,
    /// Moves are chosen by the engine.
    Computer(Strategy),
}

/// A participant in a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    mark: Mark,
    kind: PlayerKind,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, mark: Mark, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            mark,
            kind,
        }
    }

    /// Creates a human player.
    pub fn human(name: impl Into<String>, mark: Mark) -> Self {
        Self::new(name, mark, PlayerKind::Human)
    }

    /// Creates a computer player.
    pub fn computer(name: impl Into<String>, mark: Mark, strategy: Strategy) -> Self {
        Self::new(name, mark, PlayerKind::Computer(strategy))
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the player's kind.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Checks if the player is human.
    pub fn is_human(&self) -> bool {
        matches!(self.kind, PlayerKind::Human)
    }

    /// Returns the computer strategy, or `None` for a human.
    pub fn strategy(&self) -> Option<Strategy> {
        match self.kind {
            PlayerKind::Human => None,
            PlayerKind::Computer(strategy) => Some(strategy),
        }
    }

    /// Picks a move for a computer player.
    ///
    /// Returns `None` for humans and for a full board.
    #[instrument(skip(self, board, rng), fields(player = %self.name, mark = %self.mark))]
    pub fn select_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Coord> {
        let choice = match self.strategy()? {
            Strategy::Random => strategy::random::select_move(board, rng),
            Strategy::Optimal => strategy::minimax::select_move(board, self.mark),
        };
        debug!(choice = ?choice, "Computer selected move");
        choice
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}
