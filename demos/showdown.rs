//! Heads-up showdown example.
//!
//! Deals a few rounds and prints both hands with their values. Pass a seed
//! as the first argument to replay the same deals, and `--best-five` to
//! score the best 5 card hand instead of all seven cards.
//!
//! Set `RUST_LOG=debug` to see the dealer log.

use std::time::{SystemTime, UNIX_EPOCH};

use pokerank::{Card, Dealer, DealerOptions, HandSelection, Outcome};

const ROUNDS: usize = 5;

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut seed = None;
    let mut selection = HandSelection::Whole;
    for arg in std::env::args().skip(1) {
        if arg == "--best-five" {
            selection = HandSelection::BestFive;
        } else if let Ok(value) = arg.parse::<u64>() {
            seed = Some(value);
        } else {
            eprintln!("Ignoring unknown argument: {arg}");
        }
    }

    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    println!("Showdown example (seed {seed}, {selection:?})");

    let options = DealerOptions::default().with_selection(selection);
    let mut dealer = Dealer::new(options, seed);

    for round_number in 1..=ROUNDS {
        let round = match dealer.deal_round() {
            Ok(round) => round,
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        };

        let showdown = dealer.showdown(&round);

        println!();
        println!("Round {round_number}");
        println!("  Board:    {}", format_cards(&round.community));
        println!(
            "  Player 1: {}  {}",
            format_cards(&round.first_hole),
            showdown.values.first
        );
        println!(
            "  Player 2: {}  {}",
            format_cards(&round.second_hole),
            showdown.values.second
        );

        match showdown.outcome {
            Outcome::First => println!("  Player 1 wins."),
            Outcome::Second => println!("  Player 2 wins."),
            Outcome::Tie => println!("  Tie."),
        }
    }
}
