//! Dealer: deck ownership, dealing and hand comparison.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::{COMMUNITY_CARDS, Deck, HOLE_CARDS};
use crate::error::DealError;
use crate::eval::{self, HandValue};
use crate::options::DealerOptions;
use crate::result::{HandValues, Round, Showdown};

/// Evaluates two hands independently, each as given.
///
/// ```
/// use pokerank::{Card, Outcome, calculate_hand_values};
///
/// let parse = |s: &str| {
///     s.split_whitespace()
///         .map(|c| c.parse::<Card>())
///         .collect::<Result<Vec<_>, _>>()
///         .unwrap()
/// };
///
/// let values = calculate_hand_values(&parse("2S 5S 9S JS KS"), &parse("3H 6H 8H 10H QH"));
/// assert_eq!(values.first.score, 1500);
/// assert_eq!(values.outcome(), Outcome::Tie);
/// ```
#[must_use]
pub fn calculate_hand_values(first: &[Card], second: &[Card]) -> HandValues {
    HandValues {
        first: eval::evaluate(first),
        second: eval::evaluate(second),
    }
}

/// A dealer that owns a deck and the random source used to shuffle it.
///
/// The deck starts empty; call [`Dealer::shuffle_deck`] (or
/// [`Dealer::deal_round`], which shuffles) before dealing. The random source
/// defaults to a seeded [`ChaCha8Rng`] so a given seed always produces the
/// same sequence of shuffles.
#[derive(Debug, Clone)]
pub struct Dealer<R = ChaCha8Rng> {
    /// Cards not yet dealt.
    deck: Deck,
    /// Dealer options.
    options: DealerOptions,
    /// Random number generator.
    rng: R,
}

impl Dealer<ChaCha8Rng> {
    /// Creates a new dealer with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerank::{Dealer, DealerOptions};
    ///
    /// let mut dealer = Dealer::new(DealerOptions::default(), 42);
    /// dealer.shuffle_deck();
    /// assert_eq!(dealer.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: DealerOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Dealer<R> {
    /// Creates a new dealer shuffling with the given random source.
    #[must_use]
    pub const fn with_rng(options: DealerOptions, rng: R) -> Self {
        Self {
            deck: Deck::new(),
            options,
            rng,
        }
    }

    /// Returns the dealer options.
    #[must_use]
    pub const fn options(&self) -> &DealerOptions {
        &self.options
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Fills the deck with all 52 cards in canonical order, without shuffling.
    pub fn build_deck(&mut self) {
        self.deck.build();
    }

    /// Rebuilds and shuffles the deck.
    pub fn shuffle_deck(&mut self) {
        self.deck.shuffle(&mut self.rng);
    }

    /// Deals two hole cards.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if fewer than two cards remain.
    pub fn deal_hole_cards(&mut self) -> Result<[Card; HOLE_CARDS], DealError> {
        self.deck.deal_hole_cards()
    }

    /// Deals five community cards.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if fewer than five cards remain.
    pub fn deal_community_cards(&mut self) -> Result<[Card; COMMUNITY_CARDS], DealError> {
        self.deck.deal_community_cards()
    }

    /// Evaluates a hand using the configured selection mode.
    #[must_use]
    pub fn evaluate(&self, cards: &[Card]) -> HandValue {
        self.options.selection.evaluate(cards)
    }

    /// Evaluates two hands independently using the configured selection mode.
    #[must_use]
    pub fn calculate_hand_values(&self, first: &[Card], second: &[Card]) -> HandValues {
        HandValues {
            first: self.evaluate(first),
            second: self.evaluate(second),
        }
    }

    /// Shuffles a fresh deck and deals a heads-up round.
    ///
    /// Hole cards go to the first player, then the second, then the five
    /// community cards are dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out of cards, which cannot happen
    /// with a freshly shuffled deck.
    pub fn deal_round(&mut self) -> Result<Round, DealError> {
        self.shuffle_deck();

        let first_hole = self.deal_hole_cards()?;
        let second_hole = self.deal_hole_cards()?;
        let community = self.deal_community_cards()?;

        log::debug!(
            "dealt round {} {} / {} {} / board {} {} {} {} {}",
            first_hole[0],
            first_hole[1],
            second_hole[0],
            second_hole[1],
            community[0],
            community[1],
            community[2],
            community[3],
            community[4],
        );

        Ok(Round {
            first_hole,
            second_hole,
            community,
        })
    }

    /// Evaluates both hands of a round and reports the stronger one.
    #[must_use]
    pub fn showdown(&self, round: &Round) -> Showdown {
        let values = self.calculate_hand_values(&round.first_hand(), &round.second_hand());
        let outcome = values.outcome();

        log::debug!(
            "showdown {} vs {}: {outcome:?}",
            values.first,
            values.second
        );

        Showdown { values, outcome }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::DECK_SIZE;
    use crate::options::HandSelection;
    use crate::result::Outcome;

    #[test]
    fn new_dealer_has_empty_deck() {
        let mut dealer = Dealer::new(DealerOptions::default(), 1);
        assert_eq!(dealer.cards_remaining(), 0);
        assert_eq!(
            dealer.deal_hole_cards().unwrap_err(),
            DealError::InsufficientCards {
                requested: HOLE_CARDS,
                remaining: 0,
            }
        );
    }

    #[test]
    fn build_deck_is_not_shuffled() {
        let mut dealer = Dealer::new(DealerOptions::default(), 1);
        dealer.build_deck();
        assert_eq!(dealer.deck(), &Deck::ordered());
    }

    #[test]
    fn same_seed_same_rounds() {
        let mut a = Dealer::new(DealerOptions::default(), 9);
        let mut b = Dealer::new(DealerOptions::default(), 9);

        for _ in 0..3 {
            assert_eq!(a.deal_round().unwrap(), b.deal_round().unwrap());
        }
    }

    #[test]
    fn deal_round_uses_seven_plus_two_cards() {
        let mut dealer = Dealer::new(DealerOptions::default(), 5);
        let round = dealer.deal_round().unwrap();
        assert_eq!(
            dealer.cards_remaining(),
            DECK_SIZE - 2 * HOLE_CARDS - COMMUNITY_CARDS
        );

        let mut seen = 0u64;
        for card in round.first_hand().iter().chain(&round.second_hole) {
            assert_eq!(seen & (1u64 << card.index()), 0);
            seen |= 1u64 << card.index();
        }
        for card in dealer.deck().cards() {
            assert_eq!(seen & (1u64 << card.index()), 0);
        }
    }

    #[test]
    fn showdown_follows_selection() {
        let round = Round {
            first_hole: ["5H".parse().unwrap(), "6S".parse().unwrap()],
            second_hole: ["AH".parse().unwrap(), "2C".parse().unwrap()],
            community: [
                "7D".parse().unwrap(),
                "8C".parse().unwrap(),
                "9S".parse().unwrap(),
                "KH".parse().unwrap(),
                "KD".parse().unwrap(),
            ],
        };

        // As whole hands both players only hold the board pair.
        let whole = Dealer::new(DealerOptions::default(), 0);
        let showdown = whole.showdown(&round);
        assert_eq!(showdown.values.first.score, 100);
        assert_eq!(showdown.outcome, Outcome::Tie);

        let best = Dealer::new(
            DealerOptions::default().with_selection(HandSelection::BestFive),
            0,
        );
        let showdown = best.showdown(&round);
        assert_eq!(showdown.values.first.score, 1_000);
        assert_eq!(showdown.values.second.score, 100);
        assert_eq!(showdown.outcome, Outcome::First);
    }
}
