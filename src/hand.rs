//! Player hands and match removal.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use core::fmt;

use rand::Rng;

use crate::card::Card;
use crate::pile::Pile;
use crate::result::MatchedPair;

/// A named hand of cards held by one player.
///
/// Hands start empty no matter how the deck they draw from was built.
/// Cards are added and removed at the same end, so a hand behaves like a
/// stack for its own cards: the card just drawn is the next one drawn
/// away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// The owning player's name.
    name: String,
    /// Cards in the hand.
    pile: Pile,
}

impl Hand {
    /// Creates a new empty hand for the named player.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
            pile: Pile::new(),
        }
    }

    /// Returns the owning player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.pile.push(card);
    }

    /// Removes and returns the most recently added card.
    ///
    /// Returns `None` if the hand is empty.
    pub fn pop_card(&mut self) -> Option<Card> {
        self.pile.pop()
    }

    /// Removes the first card equal to `card`, if present.
    ///
    /// Returns whether a card was removed.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        self.pile.remove(card)
    }

    /// Returns whether the hand holds a card equal to `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.pile.contains(card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pile.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    /// Sorts the hand by suit, then rank.
    pub fn sort(&mut self) {
        self.pile.sort();
    }

    /// Shuffles the hand in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pile.shuffle(rng);
    }

    /// Discards every matched pair currently in the hand.
    ///
    /// Scans a snapshot of the cards taken at call start; for each card
    /// whose [mirror](Card::mirror) is still present, removes both and
    /// records the pair. A card consumed by an earlier match in the same
    /// scan is no longer present, so the containment check keeps it from
    /// matching twice.
    pub fn remove_matches(&mut self) -> Vec<MatchedPair> {
        let snapshot: Vec<Card> = self.pile.cards().to_vec();

        let mut pairs = Vec::new();
        for card in snapshot {
            let mirror = card.mirror();
            if self.pile.contains(&mirror) {
                self.pile.remove(&card);
                self.pile.remove(&mirror);
                pairs.push(MatchedPair { card, mirror });
            }
        }
        pairs
    }
}

impl fmt::Display for Hand {
    /// `Hand <name> is empty`, or `Hand <name> contains` followed by one
    /// indented line per card.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pile.is_empty() {
            writeln!(f, "Hand {} is empty", self.name)
        } else {
            writeln!(f, "Hand {} contains", self.name)?;
            fmt::Display::fmt(&self.pile, f)
        }
    }
}
