//! A deterministic poker hand ranking engine with optional `no_std` support.
//!
//! The crate classifies a set of cards into a poker category (royal flush
//! down to high card) and gives it a score that can be compared with the
//! score of another hand. A [`Dealer`] owns a [`Deck`] and a seeded random
//! source to shuffle and deal hole and community cards.
//!
//! # Example
//!
//! ```
//! use pokerank::{Dealer, DealerOptions, HandSelection};
//!
//! let options = DealerOptions::default().with_selection(HandSelection::BestFive);
//! let mut dealer = Dealer::new(options, 42);
//!
//! let round = dealer.deal_round().unwrap();
//! let showdown = dealer.showdown(&round);
//! println!("{} vs {}", showdown.values.first, showdown.values.second);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod eval;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suit};
pub use dealer::{Dealer, calculate_hand_values};
pub use deck::{COMMUNITY_CARDS, Deck, HOLE_CARDS};
pub use error::{DealError, ParseCardError};
pub use eval::{
    Category, HandValue, evaluate, evaluate_best_five, is_flush, is_four_of_a_kind,
    is_full_house, is_high_card, is_pair, is_royal_flush, is_straight, is_straight_flush,
    is_trips, is_two_pair,
};
pub use options::{DealerOptions, HandSelection};
pub use result::{HandValues, Outcome, Round, Showdown};
