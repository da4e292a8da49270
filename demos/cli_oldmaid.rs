//! CLI Old Maid demo.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use omrs::{Game, GameOptions, GameState, HandMatches, TurnOutcome};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let names: Vec<&str> = if args.is_empty() {
        vec!["Alice", "Bob", "Carol"]
    } else {
        args.iter().map(String::as_str).collect()
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    let dealt = match game.setup(&names) {
        Ok(dealt) => dealt,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };
    println!("---------- {dealt} cards have been dealt");
    print_hands(&game);

    let discards = match game.discard_initial_matches() {
        Ok(discards) => discards,
        Err(err) => {
            println!("Match error: {err}");
            return;
        }
    };
    for hand_matches in &discards {
        print_matches(&game, hand_matches);
    }
    println!(
        "---------- {} matches discarded, play begins",
        game.pairs_discarded()
    );

    while game.state() == GameState::Playing {
        match game.play_turn() {
            Ok(outcome) => print_turn(&game, &outcome),
            Err(err) => {
                println!("Turn error: {err}");
                return;
            }
        }
    }

    println!("---------- Game is over after {} turns", game.turns_played());
    print_hands(&game);
}

fn print_hands(game: &Game) {
    for hand in &game.hands {
        print!("{hand}");
    }
}

fn print_matches(game: &Game, hand_matches: &HandMatches) {
    let name = game.hands[hand_matches.hand].name();
    for pair in &hand_matches.pairs {
        println!("Hand {name}: {} matches {}", pair.card, pair.mirror);
    }
}

fn print_turn(game: &Game, outcome: &TurnOutcome) {
    let player = game.hands[outcome.player].name();

    if let (Some(card), Some(source)) = (outcome.drawn, outcome.drew_from) {
        let neighbor = game.hands[source].name();
        println!("{player} drew {card} from {neighbor}");
    } else {
        println!("{player} has no cards and passes");
    }

    for pair in &outcome.matches {
        println!("Hand {player}: {} matches {}", pair.card, pair.mirror);
    }
}
