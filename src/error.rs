//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during game setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Invalid game state for setup.
    #[error("invalid game state for setup")]
    InvalidState,
    /// No player names were given.
    #[error("no player names were given")]
    NoPlayers,
    /// The old maid card is missing from the deck.
    #[error("the old maid card is missing from the deck")]
    OldMaidMissing,
}

/// Errors that can occur while discarding the pre-dealt matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Invalid game state for discarding matches.
    #[error("invalid game state for discarding matches")]
    InvalidState,
}

/// Errors that can occur during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Invalid game state for taking a turn.
    #[error("invalid game state for taking a turn")]
    InvalidState,
    /// No other hand has cards left to draw from.
    #[error("no other hand has cards left to draw from")]
    NoNeighbor,
}

/// Errors that can occur while playing a full game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Setup failed.
    #[error(transparent)]
    Setup(#[from] SetupError),
    /// Discarding the pre-dealt matches failed.
    #[error(transparent)]
    Match(#[from] MatchError),
    /// A turn failed.
    #[error(transparent)]
    Turn(#[from] TurnError),
}
