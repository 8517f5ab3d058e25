//! Tic-tac-toe engine with human and computer players.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid and win/tie detection
//! - **Player**: name, mark and kind (human, or computer with a strategy)
//! - **Strategy**: uniform random, or exhaustive minimax that never loses
//! - **Game**: turn order, move validation and the resolution chain that
//!   plays every pending computer move before returning
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameEvent, GameState, Mark, Player, Strategy};
//!
//! let mut game = Game::with_observer(Vec::<GameEvent>::new());
//! game.start_game(
//!     Player::human("Alice", Mark::X),
//!     Player::computer("Hal", Mark::O, Strategy::Optimal),
//! );
//!
//! game.submit_move(0, 0).unwrap();
//!
//! // Hal answered in the same call.
//! assert_eq!(game.history().len(), 2);
//! assert_eq!(game.state(), &GameState::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod events;
mod game;
mod player;
pub mod strategy;
mod types;

pub use board::{Board, Verdict};
pub use error::GameError;
pub use events::{GameEvent, GameObserver};
pub use game::{Game, GameState, Outcome};
pub use player::{Player, PlayerKind, Strategy};
pub use types::{Cell, Coord, Mark, Move};
