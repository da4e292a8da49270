//! Game integration tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use omrs::{
    Card, DECK_SIZE, Deck, Game, GameError, GameOptions, GameState, Hand, MatchAccounting,
    MatchError, SetupError, Suit, TOTAL_PAIRS, TurnError,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn set_deck_from_draws(game: &mut Game, draws: &[Card]) {
    let mut deck = Deck::default();
    for &card in draws.iter().rev() {
        deck.pile.push(card);
    }
    game.deck = deck;
}

#[test]
fn standard_deck_is_canonical() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    let mut expected = Vec::new();
    for suit in [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades] {
        for rank in 1..=13 {
            expected.push(card(suit, rank));
        }
    }
    assert_eq!(deck.cards(), expected.as_slice());
}

#[test]
fn shuffle_is_a_seeded_permutation() {
    let mut deck = Deck::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);
    assert_ne!(deck.cards(), Deck::standard().cards());

    // Sorting restores the canonical order, so no card was lost or duplicated.
    let mut sorted = deck.clone();
    sorted.pile.sort();
    assert_eq!(sorted.cards(), Deck::standard().cards());

    // The same seed produces the same permutation.
    let mut again = Deck::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    again.shuffle(&mut rng);
    assert_eq!(deck.cards(), again.cards());
}

#[test]
fn deal_is_round_robin_from_the_deck_end() {
    let mut deck = Deck::standard();
    let mut hands = vec![Hand::new("a"), Hand::new("b")];

    let dealt = deck.deal(&mut hands, Some(5));
    assert_eq!(dealt, 5);
    assert_eq!(deck.len(), DECK_SIZE - 5);

    assert_eq!(
        hands[0].cards(),
        [
            card(Suit::Spades, 13),
            card(Suit::Spades, 11),
            card(Suit::Spades, 9),
        ]
    );
    assert_eq!(
        hands[1].cards(),
        [card(Suit::Spades, 12), card(Suit::Spades, 10)]
    );
}

#[test]
fn deal_stops_when_the_deck_runs_out() {
    let mut deck = Deck::standard();
    let mut hands = vec![Hand::new("a"), Hand::new("b"), Hand::new("c")];

    let dealt = deck.deal(&mut hands, None);
    assert_eq!(dealt, DECK_SIZE);
    assert!(deck.is_empty());

    assert_eq!(hands[0].len(), 18);
    assert_eq!(hands[1].len(), 17);
    assert_eq!(hands[2].len(), 17);

    // A further deal has nothing left to hand out.
    assert_eq!(deck.deal(&mut hands, Some(3)), 0);
}

#[test]
fn remove_matches_discards_the_mirrored_pair() {
    let mut hand = Hand::new("test");
    hand.add_card(card(Suit::Clubs, 5));
    hand.add_card(card(Suit::Spades, 5));
    hand.add_card(card(Suit::Hearts, 13));

    let pairs = hand.remove_matches();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].card, card(Suit::Clubs, 5));
    assert_eq!(pairs[0].mirror, card(Suit::Spades, 5));
    assert_eq!(hand.cards(), [card(Suit::Hearts, 13)]);
}

#[test]
fn remove_matches_ignores_same_rank_non_mirrors() {
    let mut hand = Hand::new("test");
    // Diamonds mirrors Hearts, not Clubs: no pair here.
    hand.add_card(card(Suit::Clubs, 5));
    hand.add_card(card(Suit::Diamonds, 5));
    hand.add_card(card(Suit::Spades, 9));

    let before = hand.cards().to_vec();
    assert!(hand.remove_matches().is_empty());
    assert_eq!(hand.cards(), before.as_slice());
}

#[test]
fn card_display_names() {
    assert_eq!(card(Suit::Spades, 1).to_string(), "Ace of Spades");
    assert_eq!(card(Suit::Clubs, 12).to_string(), "Queen of Clubs");
    assert_eq!(card(Suit::Diamonds, 10).to_string(), "10 of Diamonds");
    assert_eq!(card(Suit::Hearts, 11).to_string(), "Jack of Hearts");
}

#[test]
fn cards_order_by_suit_then_rank() {
    assert!(card(Suit::Clubs, 13) < card(Suit::Diamonds, 1));
    assert!(card(Suit::Hearts, 2) < card(Suit::Hearts, 3));
    assert_eq!(card(Suit::Spades, 7), card(Suit::Spades, 7));

    let mut hand = Hand::new("sorted");
    hand.add_card(card(Suit::Spades, 1));
    hand.add_card(card(Suit::Clubs, 13));
    hand.add_card(card(Suit::Clubs, 2));
    hand.sort();
    assert_eq!(
        hand.cards(),
        [
            card(Suit::Clubs, 2),
            card(Suit::Clubs, 13),
            card(Suit::Spades, 1),
        ]
    );
}

#[test]
fn mirror_is_an_involution() {
    assert_eq!(card(Suit::Clubs, 9).mirror(), card(Suit::Spades, 9));
    assert_eq!(card(Suit::Spades, 9).mirror(), card(Suit::Clubs, 9));
    assert_eq!(card(Suit::Diamonds, 4).mirror(), card(Suit::Hearts, 4));
    assert_eq!(card(Suit::Hearts, 4).mirror(), card(Suit::Diamonds, 4));
}

#[test]
fn hand_display_indents_by_position() {
    let mut hand = Hand::new("Alice");
    assert_eq!(hand.to_string(), "Hand Alice is empty\n");

    hand.add_card(card(Suit::Clubs, 1));
    hand.add_card(card(Suit::Diamonds, 2));
    hand.add_card(card(Suit::Hearts, 3));
    assert_eq!(
        hand.to_string(),
        "Hand Alice contains\nAce of Clubs\n 2 of Diamonds\n  3 of Hearts\n"
    );
}

#[test]
fn deck_display_indents_by_position() {
    let mut deck = Deck::default();
    deck.pile.push(card(Suit::Clubs, 1));
    deck.pile.push(card(Suit::Clubs, 2));
    assert_eq!(deck.to_string(), "Ace of Clubs\n 2 of Clubs\n");
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_old_maid(card(Suit::Hearts, 3))
        .with_match_accounting(MatchAccounting::FirstHandOnly);

    assert_eq!(options.old_maid, card(Suit::Hearts, 3));
    assert_eq!(options.match_accounting, MatchAccounting::FirstHandOnly);
}

#[test]
fn setup_removes_the_old_maid_and_deals_everything() {
    let mut game = Game::new(GameOptions::default(), 5);
    let dealt = game.setup(&["a", "b", "c"]).unwrap();

    assert_eq!(dealt, DECK_SIZE - 1);
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(game.state(), GameState::InitialMatching);
    assert_eq!(game.old_maid_holder(), None);

    let total: usize = game.hands.iter().map(Hand::len).sum();
    assert_eq!(total, DECK_SIZE - 1);
    assert!(
        game.hands
            .iter()
            .all(|hand| !hand.contains(&card(Suit::Clubs, 12)))
    );
}

#[test]
fn setup_rejects_empty_names() {
    let mut game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.setup(&[]).unwrap_err(), SetupError::NoPlayers);
}

#[test]
fn setup_rejects_a_missing_old_maid() {
    let mut game = Game::new(GameOptions::default(), 1);
    game.deck.remove_card(&card(Suit::Clubs, 12));
    assert_eq!(
        game.setup(&["a", "b"]).unwrap_err(),
        SetupError::OldMaidMissing
    );
}

#[test]
fn operations_reject_the_wrong_state() {
    let mut game = Game::new(GameOptions::default(), 1);
    assert_eq!(
        game.discard_initial_matches().unwrap_err(),
        MatchError::InvalidState
    );
    assert_eq!(game.play_turn().unwrap_err(), TurnError::InvalidState);

    game.setup(&["a", "b"]).unwrap();
    assert_eq!(game.setup(&["a", "b"]).unwrap_err(), SetupError::InvalidState);
    assert_eq!(game.play_turn().unwrap_err(), TurnError::InvalidState);
}

#[test]
fn play_rejects_a_started_game() {
    let mut game = Game::new(GameOptions::default(), 3);
    game.setup(&["a", "b"]).unwrap();
    assert_eq!(
        game.play(&["a", "b"]).unwrap_err(),
        GameError::Setup(SetupError::InvalidState)
    );
}

#[test]
fn neighbor_skips_empty_hands_and_never_self() {
    let mut game = Game::new(GameOptions::default(), 3);
    game.setup(&["a", "b", "c", "d"]).unwrap();

    while game.hands[1].pop_card().is_some() {}
    while game.hands[2].pop_card().is_some() {}

    assert_eq!(game.neighbor_of(0), Some(3));
    assert_eq!(game.neighbor_of(1), Some(3));
    assert_eq!(game.neighbor_of(3), Some(0));

    while game.hands[3].pop_card().is_some() {}
    while game.hands[0].pop_card().is_some() {}
    assert_eq!(game.neighbor_of(0), None);
}

#[test]
fn play_turn_draws_from_the_neighbor_and_discards() {
    let mut game = Game::new(GameOptions::default(), 1);
    // Draw order for the deal; the old maid card sits at the bottom and
    // is removed before dealing, so it never reaches a hand.
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Diamonds, 1),
            card(Suit::Hearts, 1),
            card(Suit::Spades, 5),
            card(Suit::Clubs, 5),
            card(Suit::Clubs, 12),
        ],
    );

    game.setup(&["a", "b"]).unwrap();
    assert!(game.discard_initial_matches().unwrap().is_empty());

    // "a" holds Ace of Diamonds + 5 of Spades; "b" holds their mirrors,
    // so neither hand pairs up until a draw crosses them over.
    let first = game.play_turn().unwrap();
    assert_eq!(first.player, 0);
    assert_eq!(first.drew_from, Some(1));
    assert_eq!(first.drawn, Some(card(Suit::Clubs, 5)));
    assert_eq!(first.matches.len(), 1);
    assert_eq!(first.matches[0].card, card(Suit::Spades, 5));
    assert_eq!(first.matches[0].mirror, card(Suit::Clubs, 5));
    assert_eq!(first.pairs_discarded, 1);

    let second = game.play_turn().unwrap();
    assert_eq!(second.player, 1);
    assert_eq!(second.drew_from, Some(0));
    assert_eq!(second.drawn, Some(card(Suit::Diamonds, 1)));
    assert_eq!(second.matches.len(), 1);
    assert_eq!(second.pairs_discarded, 2);

    // Both hands are now empty; turns pass without drawing.
    let third = game.play_turn().unwrap();
    assert_eq!(third.player, 0);
    assert_eq!(third.drew_from, None);
    assert_eq!(third.drawn, None);
    assert!(third.matches.is_empty());
}

#[test]
fn turn_fails_fast_when_no_neighbor_has_cards() {
    let mut game = Game::new(GameOptions::default(), 1);
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Diamonds, 1),
            card(Suit::Spades, 5),
            card(Suit::Clubs, 12),
        ],
    );

    game.setup(&["a", "b"]).unwrap();
    game.discard_initial_matches().unwrap();

    game.play_turn().unwrap(); // "a" takes the only card "b" has
    game.play_turn().unwrap(); // "b" passes with an empty hand
    assert_eq!(game.play_turn().unwrap_err(), TurnError::NoNeighbor);
}

#[test]
fn full_game_discards_every_pair() {
    for seed in [0, 42, 99] {
        let mut game = Game::new(GameOptions::default(), seed);
        let summary = game.play(&["a", "b", "c"]).unwrap();

        assert_eq!(summary.pairs_discarded, TOTAL_PAIRS);
        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.turns_played(), summary.turns.len());

        let remaining: usize = game.hands.iter().map(Hand::len).sum();
        assert_eq!(remaining, 1);

        // Queen of Clubs was removed, so its mirror survives unmatched.
        let holder = summary.old_maid_holder.unwrap();
        assert_eq!(game.hands[holder].cards(), [card(Suit::Spades, 12)]);
    }
}

#[test]
fn stepwise_play_matches_the_driver() {
    let mut game = Game::new(GameOptions::default(), 7);
    game.setup(&["a", "b", "c"]).unwrap();
    game.discard_initial_matches().unwrap();

    let mut turns = 0;
    while game.state() == GameState::Playing {
        let outcome = game.play_turn().unwrap();
        if let Some(source) = outcome.drew_from {
            assert_ne!(source, outcome.player);
        }
        turns += 1;
        assert!(turns < 100_000, "game did not terminate");
    }

    assert_eq!(game.pairs_discarded(), TOTAL_PAIRS);
    assert_eq!(game.turns_played(), turns);

    let mut replay = Game::new(GameOptions::default(), 7);
    let summary = replay.play(&["a", "b", "c"]).unwrap();
    assert_eq!(summary.turns.len(), turns);
}

#[test]
fn first_hand_only_accounting_still_reaches_the_target() {
    let options = GameOptions::default().with_match_accounting(MatchAccounting::FirstHandOnly);
    let mut game = Game::new(options, 42);
    let summary = game.play(&["a", "b", "c"]).unwrap();

    // Only the first hand discards before play begins.
    assert!(summary.initial_matches.iter().all(|m| m.hand == 0));
    assert_eq!(summary.pairs_discarded, TOTAL_PAIRS);

    let remaining: usize = game.hands.iter().map(Hand::len).sum();
    assert_eq!(remaining, 1);
}

#[test]
fn custom_old_maid_changes_the_survivor() {
    let options = GameOptions::default().with_old_maid(card(Suit::Hearts, 3));
    let mut game = Game::new(options, 11);
    let summary = game.play(&["a", "b", "c"]).unwrap();

    let holder = summary.old_maid_holder.unwrap();
    assert_eq!(game.hands[holder].cards(), [card(Suit::Diamonds, 3)]);
}

#[test]
fn single_player_matches_out_before_any_turn() {
    let mut game = Game::new(GameOptions::default(), 2);
    let summary = game.play(&["solo"]).unwrap();

    assert_eq!(summary.pairs_discarded, TOTAL_PAIRS);
    assert!(summary.turns.is_empty());
    assert_eq!(summary.old_maid_holder, Some(0));
    assert_eq!(game.hands[0].cards(), [card(Suit::Spades, 12)]);
}
