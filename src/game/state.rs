//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for player names and the initial deal.
    Setup,
    /// Cards are dealt; pre-dealt matches must be discarded before play.
    InitialMatching,
    /// Players take turns drawing from their neighbor.
    Playing,
    /// One unmatched card remains; the game has ended.
    GameOver,
}
