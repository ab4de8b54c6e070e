//! Deck construction, shuffling and dealing.

extern crate alloc;

use alloc::vec::Vec;
use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// Number of hole cards dealt to a player.
pub const HOLE_CARDS: usize = 2;

/// Number of community cards dealt to the board.
pub const COMMUNITY_CARDS: usize = 5;

/// An ordered deck of cards.
///
/// Cards are dealt from the end of the deck. A deck starts empty, is filled
/// by [`Deck::build`] or [`Deck::shuffle`] and is drained by dealing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a new empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a deck with all 52 cards in canonical order.
    #[must_use]
    pub fn ordered() -> Self {
        let mut deck = Self::new();
        deck.build();
        deck
    }

    /// Fills the deck with all 52 cards in canonical order.
    ///
    /// Suits follow spades, hearts, clubs, diamonds and ranks go from deuce
    /// to ace within each suit. Any cards already in the deck are discarded.
    pub fn build(&mut self) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }

        log::debug!("built deck with {} cards", self.cards.len());
    }

    /// Rebuilds the deck and shuffles it with the given random source.
    ///
    /// The permutation is a Fisher-Yates shuffle walking from the last card
    /// down to the second, swapping each position `i` with a uniformly
    /// chosen position in `0..=i`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.build();
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        log::debug!("shuffled deck");
    }

    /// Deals `count` cards from the end of the deck.
    ///
    /// Cards are returned in the order they were removed, so the last card
    /// of the deck comes first.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if fewer than `count` cards
    /// remain. The deck is left untouched in that case.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.cards.len();
        if count > remaining {
            return Err(DealError::InsufficientCards {
                requested: count,
                remaining,
            });
        }

        let mut dealt = self.cards.split_off(remaining - count);
        dealt.reverse();

        log::trace!("dealt {count} cards, {} remaining", self.cards.len());
        Ok(dealt)
    }

    fn deal_exact<const N: usize>(&mut self) -> Result<[Card; N], DealError> {
        let dealt = self.deal(N)?;
        <[Card; N]>::try_from(dealt).map_err(|cards| DealError::InsufficientCards {
            requested: N,
            remaining: cards.len(),
        })
    }

    /// Deals two hole cards.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if fewer than two cards remain.
    pub fn deal_hole_cards(&mut self) -> Result<[Card; HOLE_CARDS], DealError> {
        self.deal_exact()
    }

    /// Deals five community cards.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if fewer than five cards remain.
    pub fn deal_community_cards(&mut self) -> Result<[Card; COMMUNITY_CARDS], DealError> {
        self.deal_exact()
    }

    /// Returns the cards left in the deck, next card to be dealt last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
