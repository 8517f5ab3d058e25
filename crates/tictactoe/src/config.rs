//! Match configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{Mark, Player, PlayerKind, Strategy};
use tracing::{debug, info, instrument};

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KindChoice {
    /// Moves typed at the terminal.
    Human,
    /// Computer picking uniformly random cells.
    Random,
    /// Computer running full minimax.
    Optimal,
}

impl KindChoice {
    /// Converts to the engine's player kind.
    pub fn to_kind(self) -> PlayerKind {
        match self {
            KindChoice::Human => PlayerKind::Human,
            KindChoice::Random => PlayerKind::Computer(Strategy::Random),
            KindChoice::Optimal => PlayerKind::Computer(Strategy::Optimal),
        }
    }
}

/// One of the two marks, as spelled in config files and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Mark X.
    X,
    /// Mark O.
    O,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

/// Configuration for one seat.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Display name.
    name: String,

    /// Who controls the seat.
    kind: KindChoice,
}

impl SeatConfig {
    /// Creates a seat configuration.
    pub fn new(name: impl Into<String>, kind: KindChoice) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Configuration for a match.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Mark that moves first.
    #[serde(default = "default_first")]
    first: Side,

    /// Seat playing X.
    #[serde(default = "default_x")]
    x: SeatConfig,

    /// Seat playing O.
    #[serde(default = "default_o")]
    o: SeatConfig,
}

fn default_first() -> Side {
    Side::X
}

fn default_x() -> SeatConfig {
    SeatConfig::new("Player X", KindChoice::Human)
}

fn default_o() -> SeatConfig {
    SeatConfig::new("Computer", KindChoice::Optimal)
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            first: default_first(),
            x: default_x(),
            o: default_o(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read match file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(x = %config.x.name, o = %config.o.name, "Match file loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse match file: {}", e)))
    }

    /// Applies command-line overrides.
    ///
    /// An overridden seat keeps its configured name unless the new kind
    /// changes it from human to computer or back, in which case it gets a
    /// matching default name.
    pub fn with_overrides(
        mut self,
        x: Option<KindChoice>,
        o: Option<KindChoice>,
        first: Option<Side>,
    ) -> Self {
        if let Some(kind) = x {
            self.x = override_seat(self.x, kind, Side::X);
        }
        if let Some(kind) = o {
            self.o = override_seat(self.o, kind, Side::O);
        }
        if let Some(first) = first {
            self.first = first;
        }
        self
    }

    /// Builds both players, first mover first.
    pub fn players(&self) -> (Player, Player) {
        let x = Player::new(self.x.name.clone(), Mark::X, self.x.kind.to_kind());
        let o = Player::new(self.o.name.clone(), Mark::O, self.o.kind.to_kind());
        match self.first {
            Side::X => (x, o),
            Side::O => (o, x),
        }
    }
}

fn override_seat(seat: SeatConfig, kind: KindChoice, side: Side) -> SeatConfig {
    let was_human = seat.kind == KindChoice::Human;
    let is_human = kind == KindChoice::Human;
    if was_human == is_human {
        return SeatConfig { kind, ..seat };
    }
    let name = match (is_human, side) {
        (true, Side::X) => "Player X",
        (true, Side::O) => "Player O",
        (false, Side::X) => "Computer X",
        (false, Side::O) => "Computer O",
    };
    SeatConfig::new(name, kind)
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
