//! The ordered card collection shared by decks and hands.

use alloc::vec::Vec;

use core::fmt;

use rand::Rng;

use crate::card::Card;

/// An ordered, mutable collection of cards.
///
/// Piles behave like stacks: [`push`](Self::push) and [`pop`](Self::pop)
/// work on the same end, so the most recently added card is the next one
/// removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a card to the end of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at the end of the pile.
    ///
    /// Returns `None` if the pile is empty.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Removes the first card equal to `card`, if present.
    ///
    /// Returns whether a card was removed. An absent card is a normal
    /// outcome, not an error.
    pub fn remove(&mut self, card: &Card) -> bool {
        if let Some(index) = self.cards.iter().position(|c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Returns whether the pile holds a card equal to `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the cards in the pile.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sorts the pile by suit, then rank.
    pub fn sort(&mut self) {
        self.cards.sort();
    }

    /// Shuffles the pile in place.
    ///
    /// Walks the pile front to back and swaps each position with a
    /// uniformly chosen position from the remaining suffix (a self-swap is
    /// a no-op). Passing a seeded generator makes the permutation
    /// reproducible.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let n = self.cards.len();
        for i in 0..n {
            let j = rng.random_range(i..n);
            self.cards.swap(i, j);
        }
    }
}

impl fmt::Display for Pile {
    /// One line per card, indented by the card's position in the pile.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (indent, card) in self.cards.iter().enumerate() {
            writeln!(f, "{:indent$}{card}", "")?;
        }
        Ok(())
    }
}
