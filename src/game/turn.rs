use alloc::vec::Vec;

use crate::error::{GameError, TurnError};
use crate::result::{GameSummary, TurnOutcome};

use super::{Game, GameState, TOTAL_PAIRS};

impl Game {
    /// Returns the index of the hand the given hand draws from: the
    /// first hand after it in cyclic turn order that still has cards.
    ///
    /// Never returns `index` itself. Returns `None` when every other
    /// hand is empty or `index` is out of range.
    #[must_use]
    pub fn neighbor_of(&self, index: usize) -> Option<usize> {
        let count = self.hands.len();
        if index >= count {
            return None;
        }

        let mut next = (index + 1) % count;
        while next != index {
            if !self.hands[next].is_empty() {
                return Some(next);
            }
            next = (next + 1) % count;
        }
        None
    }

    /// Plays one turn for the current hand.
    ///
    /// An empty hand passes without drawing. Otherwise the hand draws
    /// the end card from its neighbor, discards any matches the draw
    /// enabled, and is reshuffled; without the reshuffle, two hands can
    /// trade the same card back and forth indefinitely. The turn
    /// advances to the next hand either way.
    ///
    /// # Errors
    ///
    /// Returns an error if play has not begun or is already over, or if
    /// no other hand has cards left to draw from.
    #[expect(
        clippy::missing_panics_doc,
        reason = "the neighbor hand was verified non-empty"
    )]
    pub fn play_turn(&mut self) -> Result<TurnOutcome, TurnError> {
        if self.state != GameState::Playing {
            return Err(TurnError::InvalidState);
        }

        let player = self.turn;
        let mut drew_from = None;
        let mut drawn = None;
        let mut matches = Vec::new();

        if !self.hands[player].is_empty() {
            let neighbor = self.neighbor_of(player).ok_or(TurnError::NoNeighbor)?;

            let card = self.hands[neighbor]
                .pop_card()
                .expect("neighbor_of only returns hands with cards");
            self.hands[player].add_card(card);

            matches = self.hands[player].remove_matches();
            self.pairs_discarded += matches.len();
            self.hands[player].shuffle(&mut self.rng);

            drew_from = Some(neighbor);
            drawn = Some(card);
        }

        self.turn = (self.turn + 1) % self.hands.len();
        self.turns_played += 1;

        if self.pairs_discarded >= TOTAL_PAIRS {
            self.state = GameState::GameOver;
        }

        Ok(TurnOutcome {
            player,
            drew_from,
            drawn,
            matches,
            pairs_discarded: self.pairs_discarded,
        })
    }

    /// Plays a full game from setup to the last match.
    ///
    /// Deals to one hand per name, discards the pre-dealt matches, then
    /// runs the turn loop until every matchable pair is gone.
    ///
    /// # Errors
    ///
    /// Returns an error if the game was already started, `names` is
    /// empty, the old maid card is not in the deck, or the turn loop
    /// runs out of hands to draw from.
    pub fn play(&mut self, names: &[&str]) -> Result<GameSummary, GameError> {
        self.setup(names)?;
        let initial_matches = self.discard_initial_matches()?;

        let mut turns = Vec::new();
        while self.state == GameState::Playing {
            turns.push(self.play_turn()?);
        }

        Ok(GameSummary {
            initial_matches,
            turns,
            pairs_discarded: self.pairs_discarded,
            old_maid_holder: self.old_maid_holder(),
        })
    }
}
