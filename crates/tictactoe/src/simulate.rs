//! Computer-versus-computer batches.

use crate::config::{KindChoice, Side};
use derive_more::Display;
use serde::Serialize;
use tictactoe_core::{Game, Mark, Outcome, Player, PlayerKind};
use tracing::{debug, info, instrument};

/// Results of a batch of matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display)]
#[display("X wins: {}, O wins: {}, ties: {}", x_wins, o_wins, ties)]
pub struct Tally {
    /// Matches won by X.
    pub x_wins: u32,
    /// Matches won by O.
    pub o_wins: u32,
    /// Tied matches.
    pub ties: u32,
}

impl Tally {
    fn record(&mut self, outcome: &Outcome) {
        match outcome.winner().map(Player::mark) {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None => self.ties += 1,
        }
    }
}

/// Plays `games` matches between two computer players.
///
/// Match `i` seeds its random source with `seed + i` when a seed is given.
#[instrument]
pub fn run_batch(
    x: KindChoice,
    o: KindChoice,
    first: Side,
    games: u32,
    seed: Option<u64>,
) -> anyhow::Result<Tally> {
    let (x_kind, o_kind) = (x.to_kind(), o.to_kind());
    if x_kind == PlayerKind::Human || o_kind == PlayerKind::Human {
        anyhow::bail!("simulation needs two computer players");
    }

    let player_x = Player::new(format!("{x:?} X"), Mark::X, x_kind);
    let player_o = Player::new(format!("{o:?} O"), Mark::O, o_kind);

    let mut tally = Tally::default();
    for i in 0..games {
        let mut game = match seed {
            Some(seed) => Game::with_seed((), seed.wrapping_add(u64::from(i))),
            None => Game::new(),
        };
        match first {
            Side::X => game.start_game(player_x.clone(), player_o.clone()),
            Side::O => game.start_game(player_o.clone(), player_x.clone()),
        }

        let Some(outcome) = game.outcome() else {
            anyhow::bail!("match {i} did not finish");
        };
        debug!(match_index = i, %outcome, "Match finished");
        tally.record(outcome);
    }

    info!(%tally, "Batch complete");
    Ok(tally)
}
