//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::GameOptions;

mod setup;
pub mod state;
mod turn;

pub use state::GameState;

/// Number of matchable pairs once the old maid card is removed.
pub const TOTAL_PAIRS: usize = (DECK_SIZE - 1) / 2;

/// An Old Maid game engine that manages the deck, the hands, and the
/// turn loop.
///
/// All randomness flows from a single generator seeded at construction,
/// so two games built from the same options and seed play out
/// identically.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards not yet dealt.
    pub deck: Deck,
    /// One hand per player, in turn order.
    pub hands: Vec<Hand>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Index of the hand whose turn is next.
    turn: usize,
    /// Pairs discarded so far, including the pre-play discards.
    pairs_discarded: usize,
    /// Turns taken so far.
    turns_played: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The standard deck is built and shuffled immediately.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use omrs::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);

        Self {
            deck,
            hands: Vec::new(),
            options,
            state: GameState::Setup,
            turn: 0,
            pairs_discarded: 0,
            turns_played: 0,
            rng,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the index of the hand whose turn is next.
    #[must_use]
    pub const fn current_turn(&self) -> usize {
        self.turn
    }

    /// Returns the number of pairs discarded so far.
    #[must_use]
    pub const fn pairs_discarded(&self) -> usize {
        self.pairs_discarded
    }

    /// Returns the number of turns taken so far.
    #[must_use]
    pub const fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the index of the hand left holding the lone unmatched
    /// card.
    ///
    /// Returns `None` until the game is over.
    #[must_use]
    pub fn old_maid_holder(&self) -> Option<usize> {
        if self.state != GameState::GameOver {
            return None;
        }
        self.hands.iter().position(|hand| !hand.is_empty())
    }
}
