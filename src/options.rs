//! Game configuration options.

use crate::card::{Card, Suit};

/// How pre-dealt matches are discarded before play begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum MatchAccounting {
    /// Every hand discards its pre-dealt matches, and every discard
    /// counts toward the pair total.
    #[default]
    AllHands,
    /// Only the first hand discards before play. The other hands keep
    /// their pairs until their first draw, when the whole-hand scan picks
    /// them up; the pair total still reaches the full target, after extra
    /// turns.
    FirstHandOnly,
}

/// Configuration options for an Old Maid game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use omrs::{Card, GameOptions, MatchAccounting, Suit};
///
/// let options = GameOptions::default()
///     .with_old_maid(Card::new(Suit::Hearts, 3))
///     .with_match_accounting(MatchAccounting::FirstHandOnly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// The single card removed before dealing, leaving its mirror
    /// unmatched for the rest of the game.
    pub old_maid: Card,
    /// How pre-dealt matches are discarded before play begins.
    pub match_accounting: MatchAccounting,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            old_maid: Card::new(Suit::Clubs, 12),
            match_accounting: MatchAccounting::AllHands,
        }
    }
}

impl GameOptions {
    /// Sets the card removed before dealing.
    ///
    /// Removing any single card leaves the same number of matchable
    /// pairs; its mirror becomes the card nobody can shed.
    ///
    /// # Example
    ///
    /// ```
    /// use omrs::{Card, GameOptions, Suit};
    ///
    /// let options = GameOptions::default().with_old_maid(Card::new(Suit::Diamonds, 7));
    /// assert_eq!(options.old_maid, Card::new(Suit::Diamonds, 7));
    /// ```
    #[must_use]
    pub const fn with_old_maid(mut self, card: Card) -> Self {
        self.old_maid = card;
        self
    }

    /// Sets how pre-dealt matches are discarded before play begins.
    ///
    /// # Example
    ///
    /// ```
    /// use omrs::{GameOptions, MatchAccounting};
    ///
    /// let options = GameOptions::default().with_match_accounting(MatchAccounting::FirstHandOnly);
    /// assert_eq!(options.match_accounting, MatchAccounting::FirstHandOnly);
    /// ```
    #[must_use]
    pub const fn with_match_accounting(mut self, accounting: MatchAccounting) -> Self {
        self.match_accounting = accounting;
        self
    }
}
