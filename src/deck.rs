//! Deck construction and dealing.

use core::fmt;

use rand::Rng;

use crate::card::{Card, Suit};
use crate::hand::Hand;
use crate::pile::Pile;

/// A deck of playing cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    /// Cards in the deck.
    pub pile: Pile,
}

impl Deck {
    /// Creates a standard 52-card deck.
    ///
    /// Cards are generated suit by suit in ascending order, ranks 1..=13
    /// within each suit. This is the deck's canonical order before any
    /// shuffle.
    #[must_use]
    pub fn standard() -> Self {
        let mut pile = Pile::new();
        for suit in Suit::ALL {
            for rank in 1..=13 {
                pile.push(Card::new(suit, rank));
            }
        }
        Self { pile }
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pile.shuffle(rng);
    }

    /// Removes the first card equal to `card`, if present.
    ///
    /// Returns whether a card was removed. An absent card is a normal
    /// outcome, not an error.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        self.pile.remove(card)
    }

    /// Removes and returns the card at the end of the deck.
    ///
    /// Returns `None` if the deck is empty; callers draw only after
    /// checking [`is_empty`](Self::is_empty).
    pub fn pop_card(&mut self) -> Option<Card> {
        self.pile.pop()
    }

    /// Returns the cards in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pile.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    /// Deals cards round-robin to `hands` in order.
    ///
    /// Cards come off the end of the deck one at a time, the first going
    /// to the first hand. Dealing stops when the deck runs out or after
    /// `max_cards` cards, whichever comes first; `None` deals the whole
    /// deck. Returns the number of cards dealt. Dealing to an empty hand
    /// list deals nothing.
    pub fn deal(&mut self, hands: &mut [Hand], max_cards: Option<usize>) -> usize {
        if hands.is_empty() {
            return 0;
        }

        let limit = max_cards.unwrap_or(usize::MAX);
        let mut dealt = 0;
        while dealt < limit {
            let Some(card) = self.pile.pop() else { break };
            hands[dealt % hands.len()].add_card(card);
            dealt += 1;
        }
        dealt
    }
}

impl fmt::Display for Deck {
    /// One line per card, indented by the card's position in the deck.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.pile, f)
    }
}
