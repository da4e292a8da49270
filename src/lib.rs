//! An Old Maid card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full game flow:
//! removing the old maid card, dealing, discarding matched pairs, and the
//! draw-from-your-neighbor turn loop that runs until a single unmatched
//! card remains.
//!
//! # Example
//!
//! ```no_run
//! use omrs::{Game, GameOptions, TOTAL_PAIRS};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let summary = game.play(&["Alice", "Bob", "Carol"]).expect("fresh game");
//! assert_eq!(summary.pairs_discarded, TOTAL_PAIRS);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pile;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{GameError, MatchError, SetupError, TurnError};
pub use game::{Game, GameState, TOTAL_PAIRS};
pub use hand::Hand;
pub use options::{GameOptions, MatchAccounting};
pub use pile::Pile;
pub use result::{GameSummary, HandMatches, MatchedPair, TurnOutcome};
