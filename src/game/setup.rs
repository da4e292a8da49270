use alloc::vec::Vec;

use crate::error::{MatchError, SetupError};
use crate::hand::Hand;
use crate::options::MatchAccounting;
use crate::result::HandMatches;

use super::{Game, GameState, TOTAL_PAIRS};

impl Game {
    /// Removes the old maid card, builds one hand per player, and deals
    /// the whole deck round-robin.
    ///
    /// Hands are created in `names` order, which fixes the turn order and
    /// neighbor adjacency for the rest of the game. Returns the number of
    /// cards dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already been set up, no names
    /// were given, or the old maid card is not in the deck.
    pub fn setup(&mut self, names: &[&str]) -> Result<usize, SetupError> {
        if self.state != GameState::Setup {
            return Err(SetupError::InvalidState);
        }

        if names.is_empty() {
            return Err(SetupError::NoPlayers);
        }

        if !self.deck.remove_card(&self.options.old_maid) {
            return Err(SetupError::OldMaidMissing);
        }

        self.hands = names.iter().map(|name| Hand::new(name)).collect();
        let dealt = self.deck.deal(&mut self.hands, None);

        self.state = GameState::InitialMatching;

        Ok(dealt)
    }

    /// Discards the matched pairs dealt into the hands before any turn
    /// is taken, per the configured [`MatchAccounting`].
    ///
    /// Returns the discards hand by hand; hands without matches are
    /// omitted. When every pair is already gone after this step (a
    /// single-player game), the game ends without a turn being taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have not been dealt yet or play has
    /// already begun.
    pub fn discard_initial_matches(&mut self) -> Result<Vec<HandMatches>, MatchError> {
        if self.state != GameState::InitialMatching {
            return Err(MatchError::InvalidState);
        }

        let mut discards = Vec::new();

        match self.options.match_accounting {
            MatchAccounting::AllHands => {
                for (index, hand) in self.hands.iter_mut().enumerate() {
                    let pairs = hand.remove_matches();
                    if !pairs.is_empty() {
                        self.pairs_discarded += pairs.len();
                        discards.push(HandMatches { hand: index, pairs });
                    }
                }
            }
            MatchAccounting::FirstHandOnly => {
                if let Some(hand) = self.hands.first_mut() {
                    let pairs = hand.remove_matches();
                    if !pairs.is_empty() {
                        self.pairs_discarded += pairs.len();
                        discards.push(HandMatches { hand: 0, pairs });
                    }
                }
            }
        }

        self.state = if self.pairs_discarded >= TOTAL_PAIRS {
            GameState::GameOver
        } else {
            GameState::Playing
        };

        Ok(discards)
    }
}
