//! Error types for deck and card operations.

use thiserror::Error;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards left in the deck.
    #[error("insufficient cards: requested {requested}, {remaining} remaining")]
    InsufficientCards {
        /// Number of cards the deal asked for.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur while parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is empty.
    #[error("empty card string")]
    Empty,
    /// Rank label is not recognized.
    #[error("invalid card rank")]
    InvalidRank,
    /// Suit letter or glyph is not recognized.
    #[error("invalid card suit")]
    InvalidSuit,
}
