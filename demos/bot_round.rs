//! Headless bot-vs-bot round.
//!
//! Runs one full round with both seats driven by the built-in heuristics and
//! prints every engine event as it fires.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use knock31::{Bot, Card, Game, GameEvent, GameState, Hand, Suit, TurnOutcome};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    println!("Thirty-one, bots only (seed {seed})");

    let game = Game::new(seed);
    game.subscribe(Box::new(|event: &GameEvent| {
        println!("  event: {event}");
    }));

    game.deal().expect("fresh game accepts the deal");

    let bots = [Bot::new(0), Bot::new(1)];
    loop {
        let player = game.active_player();
        let hand = game.hand(player).unwrap_or_default();
        println!(
            "player {player}: {} ({} points)",
            format_hand(&hand),
            hand.best_score()
        );

        match bots[player].take_turn(&game) {
            Ok(TurnOutcome::Knocked) => break,
            Ok(TurnOutcome::Played {
                source,
                drawn,
                discarded,
            }) => {
                println!(
                    "player {player} took {} from {source:?}, shed {}",
                    format_card(drawn),
                    format_card(discarded)
                );
            }
            Err(err) => {
                println!("player {player} cannot move: {err}");
                break;
            }
        }

        if game.state() == GameState::RoundOver {
            break;
        }
    }

    if let Ok(summary) = game.showdown() {
        println!("\nplayer {} knocked", summary.knocker);
        for score in &summary.players {
            let hand = game.hand(score.player).unwrap_or_default();
            println!(
                "player {}: {} -> {} points",
                score.player,
                format_hand(&hand),
                score.best_score
            );
        }
        match summary.winner {
            Some(winner) => println!("player {winner} wins"),
            None => println!("dead tie"),
        }
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let suit = match card.suit {
        Suit::Hearts => "H",
        Suit::Diamonds => "D",
        Suit::Clubs => "C",
        Suit::Spades => "S",
    };
    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };
    format!("{rank}{suit}")
}
