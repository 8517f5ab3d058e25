//! Match coordinator: turn order, move application and the resolution chain.

use crate::board::{Board, Verdict};
use crate::error::GameError;
use crate::events::GameObserver;
use crate::player::Player;
use crate::types::{Cell, Coord, Mark, Move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Final result of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// This player completed a line.
    Win(Player),
    /// Board filled with no line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the match was tied.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{} wins", player.name()),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Lifecycle of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No match running.
    Idle,
    /// Moves are accepted.
    InProgress,
    /// The match is over.
    Finished(Outcome),
}

/// Tic-tac-toe match coordinator.
///
/// Owns the board, both players and the observer. A human move submitted
/// through [`Game::submit_move`] triggers the resolution chain: every
/// computer player whose turn follows moves automatically, and control only
/// returns once a human is to move or the match is over.
#[derive(Debug, Clone)]
pub struct Game<O = ()> {
    board: Board,
    players: Option<[Player; 2]>,
    turn_index: usize,
    state: GameState,
    history: Vec<Move>,
    rng: StdRng,
    observer: O,
}

impl Game<()> {
    /// Creates an idle game with no observer.
    pub fn new() -> Self {
        Self::with_observer(())
    }
}

impl Default for Game<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: GameObserver> Game<O> {
    /// Creates an idle game reporting to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self::build(observer, StdRng::from_entropy())
    }

    /// Creates an idle game whose random strategies replay from `seed`.
    pub fn with_seed(observer: O, seed: u64) -> Self {
        Self::build(observer, StdRng::seed_from_u64(seed))
    }

    fn build(observer: O, rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            players: None,
            turn_index: 0,
            state: GameState::Idle,
            history: Vec::new(),
            rng,
            observer,
        }
    }

    /// Starts a match. `player1` always moves first, whatever its mark.
    ///
    /// If `player1` is a computer, it moves immediately, and so on until a
    /// human is to move or the match ends.
    #[instrument(skip(self, player1, player2), fields(first = %player1, second = %player2))]
    pub fn start_game(&mut self, player1: Player, player2: Player) {
        self.board.reset();
        self.history.clear();
        self.turn_index = 0;
        self.players = Some([player1, player2]);
        self.state = GameState::InProgress;
        info!("Game started");

        self.run_computer_turns();
    }

    /// Places the current human player's mark at `(row, col)`.
    ///
    /// On rejection the game is left exactly as it was.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        let coord = self.validate_move(row, col).inspect_err(|error| {
            warn!(%error, "Move rejected");
        })?;

        let mark = self.current_mark()?;
        self.place(coord, mark);
        self.resolve_after_move();
        Ok(())
    }

    /// Like [`Game::submit_move`], but also rejects the move when `mark`
    /// is not the mark of the player at turn.
    #[instrument(skip(self))]
    pub fn submit_move_as(&mut self, mark: Mark, row: usize, col: usize) -> Result<(), GameError> {
        let expected = self.current_mark().inspect_err(|error| {
            warn!(%error, "Move rejected");
        })?;
        if expected != mark {
            warn!(%expected, "Move rejected: other player's turn");
            return Err(GameError::OutOfTurn);
        }
        self.submit_move(row, col)
    }

    /// Abandons the current match and returns to idle.
    #[instrument(skip(self))]
    pub fn new_match(&mut self) {
        self.board.reset();
        self.history.clear();
        self.turn_index = 0;
        self.state = GameState::Idle;
        info!("Returned to idle");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns true while moves are accepted.
    pub fn is_in_progress(&self) -> bool {
        matches!(self.state, GameState::InProgress)
    }

    /// Returns the outcome of a finished match.
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.state {
            GameState::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Returns both players, first mover first.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Index (0 or 1) of the player to move.
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    /// Returns the player at turn.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[self.turn_index])
    }

    /// Moves made in the current match, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Mark of the player at turn, if a match is running.
    fn current_mark(&self) -> Result<Mark, GameError> {
        if !self.is_in_progress() {
            return Err(GameError::NotInProgress);
        }
        self.current_player()
            .map(Player::mark)
            .ok_or(GameError::NotInProgress)
    }

    fn validate_move(&self, row: usize, col: usize) -> Result<Coord, GameError> {
        if !self.is_in_progress() {
            return Err(GameError::NotInProgress);
        }
        let coord = Coord::new(row, col)?;
        match self.current_player() {
            Some(player) if player.is_human() => {}
            Some(_) => return Err(GameError::OutOfTurn),
            None => return Err(GameError::NotInProgress),
        }
        if !self.board.is_empty(coord) {
            return Err(GameError::CellOccupied { row, col });
        }
        Ok(coord)
    }

    fn place(&mut self, coord: Coord, mark: Mark) {
        self.board.set(coord, Cell::Occupied(mark));
        self.history.push(Move::new(mark, coord));
        debug!(%mark, %coord, "Mark placed");
        self.observer.on_cell_changed(coord.row(), coord.col(), mark);
    }

    fn resolve_after_move(&mut self) {
        if self.finish_if_terminal() {
            return;
        }
        self.advance_turn();
        self.run_computer_turns();
    }

    /// Plays computer moves until a human is to move or the match ends.
    ///
    /// Each pass fills one empty cell, so the loop runs at most nine times.
    fn run_computer_turns(&mut self) {
        while self.is_in_progress() {
            let Some(players) = &self.players else {
                break;
            };
            let player = &players[self.turn_index];
            if player.is_human() {
                break;
            }

            let mark = player.mark();
            let Some(coord) = player.select_move(&self.board, &mut self.rng) else {
                warn!(%mark, "Computer found no empty cell on a live board");
                break;
            };
            debug!(player = %player, %coord, "Computer move");

            self.place(coord, mark);
            if self.finish_if_terminal() {
                break;
            }
            self.advance_turn();
        }
    }

    fn advance_turn(&mut self) {
        self.turn_index = 1 - self.turn_index;
    }

    /// Finishes the match if the board is terminal.
    ///
    /// Only the mover's mark can have completed a line, so a win is
    /// credited to the player at turn.
    fn finish_if_terminal(&mut self) -> bool {
        let Some(verdict) = self.board.evaluate_outcome() else {
            return false;
        };
        let Some(mover) = self.current_player() else {
            return false;
        };
        let outcome = match verdict {
            Verdict::Win(_) => Outcome::Win(mover.clone()),
            Verdict::Tie => Outcome::Tie,
        };

        info!(%outcome, moves = self.history.len(), "Game over");
        self.observer.on_game_over(&outcome);
        self.state = GameState::Finished(outcome);
        true
    }
}
