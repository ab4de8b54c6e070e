//! Hand comparison result types.

use core::cmp::Ordering;

use crate::card::Card;
use crate::deck::{COMMUNITY_CARDS, HOLE_CARDS};
use crate::eval::HandValue;

/// Which of two hands is stronger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The first hand has the higher score.
    First,
    /// The second hand has the higher score.
    Second,
    /// Both hands have the same score.
    Tie,
}

/// Values of two hands evaluated independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValues {
    /// Value of the first hand.
    pub first: HandValue,
    /// Value of the second hand.
    pub second: HandValue,
}

impl HandValues {
    /// Compares the two scores.
    ///
    /// Equal scores are a tie, kickers are not considered.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.first.cmp(&self.second) {
            Ordering::Greater => Outcome::First,
            Ordering::Less => Outcome::Second,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Cards of a heads-up deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    /// Hole cards of the first player.
    pub first_hole: [Card; HOLE_CARDS],
    /// Hole cards of the second player.
    pub second_hole: [Card; HOLE_CARDS],
    /// Community cards.
    pub community: [Card; COMMUNITY_CARDS],
}

impl Round {
    fn hand(
        hole: [Card; HOLE_CARDS],
        community: [Card; COMMUNITY_CARDS],
    ) -> [Card; HOLE_CARDS + COMMUNITY_CARDS] {
        let mut cards = [hole[0]; HOLE_CARDS + COMMUNITY_CARDS];
        cards[..HOLE_CARDS].copy_from_slice(&hole);
        cards[HOLE_CARDS..].copy_from_slice(&community);
        cards
    }

    /// Returns the first player's hole cards followed by the community cards.
    #[must_use]
    pub fn first_hand(&self) -> [Card; HOLE_CARDS + COMMUNITY_CARDS] {
        Self::hand(self.first_hole, self.community)
    }

    /// Returns the second player's hole cards followed by the community cards.
    #[must_use]
    pub fn second_hand(&self) -> [Card; HOLE_CARDS + COMMUNITY_CARDS] {
        Self::hand(self.second_hole, self.community)
    }
}

/// Result of a showdown between two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showdown {
    /// Values of both hands.
    pub values: HandValues,
    /// The stronger hand.
    pub outcome: Outcome,
}
