//! Poker hand classification.
//!
//! Every category has its own classifier taking the whole hand as a slice of
//! cards. A classifier returns the category score when the pattern is present
//! and `None` otherwise; [`is_high_card`] is the fallback and always returns a
//! score. [`evaluate`] walks the categories from strongest to weakest and
//! keeps the first match.
//!
//! Hands are evaluated as given: a 7 card hand is a flush only if all seven
//! cards share a suit. Use [`evaluate_best_five`] to score the best 5 card
//! subset instead.
//!
//! Scores only identify the category, so two hands in the same category with
//! different kickers have the same score.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Rank};

/// Fewest cards that can form a straight or a flush.
const MIN_PATTERN_CARDS: usize = 5;

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

const ACE_HIGH: u8 = 14;
const ACE_LOW: u8 = 1;

/// Poker hand category, declared from strongest to weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Ten to ace of the same suit.
    RoyalFlush,
    /// Five consecutive values of the same suit.
    StraightFlush,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Three of a kind and a pair.
    FullHouse,
    /// All cards of the same suit.
    Flush,
    /// Consecutive values, ace may play low.
    Straight,
    /// Three cards of the same rank.
    Trips,
    /// Exactly two pairs.
    TwoPair,
    /// Two cards of the same rank.
    Pair,
    /// None of the above.
    HighCard,
}

impl Category {
    /// All categories from strongest to weakest.
    pub const ALL: [Self; 10] = [
        Self::RoyalFlush,
        Self::StraightFlush,
        Self::FourOfAKind,
        Self::FullHouse,
        Self::Flush,
        Self::Straight,
        Self::Trips,
        Self::TwoPair,
        Self::Pair,
        Self::HighCard,
    ];

    /// Categories that require a pattern, i.e. all but [`Category::HighCard`].
    const PATTERNS: [Self; 9] = [
        Self::RoyalFlush,
        Self::StraightFlush,
        Self::FourOfAKind,
        Self::FullHouse,
        Self::Flush,
        Self::Straight,
        Self::Trips,
        Self::TwoPair,
        Self::Pair,
    ];

    /// Returns the fixed score of the category.
    ///
    /// High card has no fixed score, its score is the highest card value.
    #[must_use]
    pub const fn base_score(self) -> u32 {
        match self {
            Self::RoyalFlush => 10_000,
            Self::StraightFlush => 7_000,
            Self::FourOfAKind => 5_000,
            Self::FullHouse => 3_000,
            Self::Flush => 1_500,
            Self::Straight => 1_000,
            Self::Trips => 700,
            Self::TwoPair => 200,
            Self::Pair => 100,
            Self::HighCard => 0,
        }
    }

    /// Returns the category name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RoyalFlush => "royal flush",
            Self::StraightFlush => "straight flush",
            Self::FourOfAKind => "four of a kind",
            Self::FullHouse => "full house",
            Self::Flush => "flush",
            Self::Straight => "straight",
            Self::Trips => "three of a kind",
            Self::TwoPair => "two pair",
            Self::Pair => "pair",
            Self::HighCard => "high card",
        }
    }

    /// Runs the classifier for this category on `cards`.
    ///
    /// Returns the score if the hand matches the category.
    #[must_use]
    pub fn matches(self, cards: &[Card]) -> Option<u32> {
        match self {
            Self::RoyalFlush => is_royal_flush(cards),
            Self::StraightFlush => is_straight_flush(cards),
            Self::FourOfAKind => is_four_of_a_kind(cards),
            Self::FullHouse => is_full_house(cards),
            Self::Flush => is_flush(cards),
            Self::Straight => is_straight(cards),
            Self::Trips => is_trips(cards),
            Self::TwoPair => is_two_pair(cards),
            Self::Pair => is_pair(cards),
            Self::HighCard => Some(is_high_card(cards)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The strength of a hand: its category and score.
///
/// Values are ordered by score alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandValue {
    /// The matched category.
    pub category: Category,
    /// The hand score, higher is stronger.
    pub score: u32,
}

impl HandValue {
    fn high_card(cards: &[Card]) -> Self {
        Self {
            category: Category::HighCard,
            score: is_high_card(cards),
        }
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.score)
    }
}

fn rank_counts(cards: &[Card]) -> HashMap<Rank, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(card.rank).or_insert(0) += 1;
    }
    counts
}

fn has_count(cards: &[Card], count: usize) -> bool {
    rank_counts(cards).values().any(|&c| c == count)
}

fn all_consecutive(values: &[u8]) -> bool {
    values.windows(2).all(|w| w[1] == w[0] + 1)
}

fn straight(cards: &[Card]) -> bool {
    if cards.len() < MIN_PATTERN_CARDS {
        return false;
    }

    let mut values = cards.iter().map(Card::value).collect::<Vec<_>>();
    values.sort_unstable();
    if all_consecutive(&values) {
        return true;
    }

    // Five high straight, retry with the ace played low.
    if values.contains(&ACE_HIGH) {
        for value in &mut values {
            if *value == ACE_HIGH {
                *value = ACE_LOW;
            }
        }
        values.sort_unstable();
        return all_consecutive(&values);
    }

    false
}

fn flush(cards: &[Card]) -> bool {
    match cards.first() {
        Some(first) if cards.len() >= MIN_PATTERN_CARDS => {
            cards.iter().all(|c| c.suit == first.suit)
        }
        _ => false,
    }
}

fn score_if(matched: bool, category: Category) -> Option<u32> {
    matched.then_some(category.base_score())
}

/// Checks for a royal flush: a flush where every card is ten or better.
#[must_use]
pub fn is_royal_flush(cards: &[Card]) -> Option<u32> {
    let broadway = cards.iter().all(|c| c.value() >= Rank::Ten.value());
    score_if(broadway && flush(cards), Category::RoyalFlush)
}

/// Checks for a straight flush.
#[must_use]
pub fn is_straight_flush(cards: &[Card]) -> Option<u32> {
    score_if(straight(cards) && flush(cards), Category::StraightFlush)
}

/// Checks for four cards of the same rank.
#[must_use]
pub fn is_four_of_a_kind(cards: &[Card]) -> Option<u32> {
    score_if(has_count(cards, 4), Category::FourOfAKind)
}

/// Checks for a full house: one rank appearing three times and another twice.
#[must_use]
pub fn is_full_house(cards: &[Card]) -> Option<u32> {
    let counts = rank_counts(cards);
    let trips = counts.values().any(|&c| c == 3);
    let pair = counts.values().any(|&c| c == 2);
    score_if(trips && pair, Category::FullHouse)
}

/// Checks for a flush: at least five cards, all with the suit of the first.
#[must_use]
pub fn is_flush(cards: &[Card]) -> Option<u32> {
    score_if(flush(cards), Category::Flush)
}

/// Checks for a straight: at least five cards with consecutive values.
///
/// An ace plays high, or low when that completes the straight (A-2-3-4-5).
#[must_use]
pub fn is_straight(cards: &[Card]) -> Option<u32> {
    score_if(straight(cards), Category::Straight)
}

/// Checks for three cards of the same rank.
#[must_use]
pub fn is_trips(cards: &[Card]) -> Option<u32> {
    score_if(has_count(cards, 3), Category::Trips)
}

/// Checks for exactly two ranks appearing twice.
#[must_use]
pub fn is_two_pair(cards: &[Card]) -> Option<u32> {
    let pairs = rank_counts(cards).values().filter(|&&c| c == 2).count();
    score_if(pairs == 2, Category::TwoPair)
}

/// Checks for two cards of the same rank.
#[must_use]
pub fn is_pair(cards: &[Card]) -> Option<u32> {
    score_if(has_count(cards, 2), Category::Pair)
}

/// Returns the highest card value in the hand, 0 for an empty hand.
#[must_use]
pub fn is_high_card(cards: &[Card]) -> u32 {
    cards.iter().map(Card::value).max().map_or(0, u32::from)
}

/// Evaluates a hand as given.
///
/// ```
/// use pokerank::{Card, Category, evaluate};
///
/// let cards = ["9S", "9H", "9D", "4C", "4S"]
///     .iter()
///     .map(|s| s.parse::<Card>())
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
///
/// let value = evaluate(&cards);
/// assert_eq!(value.category, Category::FullHouse);
/// assert_eq!(value.score, 3000);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandValue {
    let value = Category::PATTERNS
        .iter()
        .find_map(|&category| {
            category
                .matches(cards)
                .map(|score| HandValue { category, score })
        })
        .unwrap_or_else(|| HandValue::high_card(cards));

    log::trace!("evaluated {} cards: {value}", cards.len());
    value
}

/// Calls `f` for each 5 card subset of `cards`.
fn for_each_hand<F>(cards: &[Card], mut f: F)
where
    F: FnMut(&[Card; HAND_SIZE]),
{
    let n = cards.len();
    if n < HAND_SIZE {
        return;
    }

    let mut idx: [usize; HAND_SIZE] = core::array::from_fn(|i| i);
    loop {
        f(&idx.map(|i| cards[i]));

        // Advance the rightmost index that still has room.
        let Some(k) = (0..HAND_SIZE).rev().find(|&k| idx[k] < n - HAND_SIZE + k) else {
            return;
        };

        let start = idx[k] + 1;
        for (offset, slot) in idx[k..].iter_mut().enumerate() {
            *slot = start + offset;
        }
    }
}

/// Evaluates the best 5 card hand that can be made from `cards`.
///
/// Hands with five or fewer cards are evaluated as given.
#[must_use]
pub fn evaluate_best_five(cards: &[Card]) -> HandValue {
    if cards.len() <= HAND_SIZE {
        return evaluate(cards);
    }

    let mut best = HandValue::high_card(cards);
    for_each_hand(cards, |hand| {
        let value = evaluate(hand);
        if value > best {
            best = value;
        }
    });
    best
}
