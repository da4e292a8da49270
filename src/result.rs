//! Event and outcome types returned by the game engine.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// A matched pair discarded from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedPair {
    /// The card whose scan found the match.
    pub card: Card,
    /// Its mirror card.
    pub mirror: Card,
}

/// Matched pairs discarded from a single hand before play began.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandMatches {
    /// Index of the hand in turn order.
    pub hand: usize,
    /// The pairs discarded from that hand.
    pub pairs: Vec<MatchedPair>,
}

/// Outcome of a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Index of the hand that acted.
    pub player: usize,
    /// Index of the neighbor drawn from, or `None` if the acting hand was
    /// empty and the turn passed.
    pub drew_from: Option<usize>,
    /// The card drawn from the neighbor.
    pub drawn: Option<Card>,
    /// Pairs discarded after the draw.
    pub matches: Vec<MatchedPair>,
    /// Running pair total after this turn.
    pub pairs_discarded: usize,
}

/// Summary of a completed game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    /// Matches discarded hand by hand before the first turn.
    pub initial_matches: Vec<HandMatches>,
    /// Every turn taken, in order.
    pub turns: Vec<TurnOutcome>,
    /// Total pairs discarded over the whole game.
    pub pairs_discarded: usize,
    /// Index of the hand left holding the lone unmatched card.
    pub old_maid_holder: Option<usize>,
}
