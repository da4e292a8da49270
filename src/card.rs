//! Card types and deck-wide constants.

use core::fmt;

/// Card suit, ordered Clubs < Diamonds < Hearts < Spades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in ascending order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit that pairs with this one under the Old Maid
    /// matching rule: Clubs with Spades, Diamonds with Hearts.
    #[must_use]
    pub const fn mirror(self) -> Self {
        match self {
            Self::Clubs => Self::Spades,
            Self::Diamonds => Self::Hearts,
            Self::Hearts => Self::Diamonds,
            Self::Spades => Self::Clubs,
        }
    }

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }
}

/// Rank names indexed by rank value. Index 0 is an unused placeholder so
/// that valid ranks start at 1.
const RANK_NAMES: [&str; 14] = [
    "?", "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King",
];

/// A playing card.
///
/// Cards compare lexicographically: suit first, then rank. Two cards are
/// equal only when both suit and rank are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but display with a placeholder rank name.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the card this one pairs with under the Old Maid matching
    /// rule: the same rank in the [mirror suit](Suit::mirror).
    #[must_use]
    pub const fn mirror(self) -> Self {
        Self {
            suit: self.suit.mirror(),
            rank: self.rank,
        }
    }
}

impl fmt::Display for Card {
    /// Formats the card as `<Rank> of <Suit>`, e.g. `Ace of Spades`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = RANK_NAMES
            .get(usize::from(self.rank))
            .copied()
            .unwrap_or(RANK_NAMES[0]);
        write!(f, "{rank} of {}", self.suit.name())
    }
}

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;
