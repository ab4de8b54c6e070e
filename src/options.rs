//! Dealer configuration options.

use crate::card::Card;
use crate::eval::{self, HandValue};

/// How the cards of a hand are turned into a [`HandValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum HandSelection {
    /// Evaluate all cards of the hand together.
    #[default]
    Whole,
    /// Evaluate the best 5 card subset of the hand.
    BestFive,
}

impl HandSelection {
    /// Evaluates `cards` using this selection mode.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerank::{Card, Category, HandSelection};
    ///
    /// let cards = ["5H", "6S", "7D", "8C", "9S", "KH", "KD"]
    ///     .iter()
    ///     .map(|s| s.parse::<Card>())
    ///     .collect::<Result<Vec<_>, _>>()
    ///     .unwrap();
    ///
    /// assert_eq!(HandSelection::Whole.evaluate(&cards).category, Category::Pair);
    /// assert_eq!(HandSelection::BestFive.evaluate(&cards).category, Category::Straight);
    /// ```
    #[must_use]
    pub fn evaluate(self, cards: &[Card]) -> HandValue {
        match self {
            Self::Whole => eval::evaluate(cards),
            Self::BestFive => eval::evaluate_best_five(cards),
        }
    }
}

/// Configuration options for a [`Dealer`](crate::Dealer).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pokerank::{DealerOptions, HandSelection};
///
/// let options = DealerOptions::default().with_selection(HandSelection::BestFive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DealerOptions {
    /// How hands are evaluated at showdown.
    pub selection: HandSelection,
}

impl DealerOptions {
    /// Sets the hand selection mode.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerank::{DealerOptions, HandSelection};
    ///
    /// let options = DealerOptions::default().with_selection(HandSelection::BestFive);
    /// assert_eq!(options.selection, HandSelection::BestFive);
    /// ```
    #[must_use]
    pub const fn with_selection(mut self, selection: HandSelection) -> Self {
        self.selection = selection;
        self
    }
}
