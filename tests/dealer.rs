//! Dealer integration tests.

use pokerank::{
    COMMUNITY_CARDS, Card, DECK_SIZE, DealError, Dealer, DealerOptions, HOLE_CARDS,
    HandSelection, Outcome, Rank, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn build_deck_has_every_card_once() {
    let mut dealer = Dealer::new(DealerOptions::default(), 1);
    dealer.build_deck();

    let cards = dealer.deck().cards();
    assert_eq!(cards.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert_eq!(
                cards
                    .iter()
                    .filter(|c| c.suit == suit && c.rank == rank)
                    .count(),
                1
            );
        }
    }
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let mut dealer = Dealer::new(DealerOptions::default(), 17);
    dealer.build_deck();
    let mut ordered = dealer.deck().cards().to_vec();

    dealer.shuffle_deck();
    let mut shuffled = dealer.deck().cards().to_vec();
    assert_ne!(ordered, shuffled);

    ordered.sort_by_key(Card::index);
    shuffled.sort_by_key(Card::index);
    assert_eq!(ordered, shuffled);
}

#[test]
fn seeded_shuffles_are_reproducible() {
    let mut a = Dealer::new(DealerOptions::default(), 123);
    let mut b = Dealer::new(DealerOptions::default(), 123);

    for _ in 0..5 {
        a.shuffle_deck();
        b.shuffle_deck();
        assert_eq!(a.deck(), b.deck());
    }
}

#[test]
fn custom_random_source() {
    let options = DealerOptions::default();
    let mut a = Dealer::with_rng(options, ChaCha20Rng::seed_from_u64(5));
    let mut b = Dealer::with_rng(options, ChaCha20Rng::seed_from_u64(5));

    a.shuffle_deck();
    b.shuffle_deck();
    assert_eq!(a.deck(), b.deck());
    assert_eq!(a.cards_remaining(), DECK_SIZE);
}

#[test]
fn dealing_depletes_the_deck() {
    let mut dealer = Dealer::new(DealerOptions::default(), 3);
    dealer.shuffle_deck();

    let hole = dealer.deal_hole_cards().unwrap();
    let board = dealer.deal_community_cards().unwrap();
    assert_eq!(hole.len(), HOLE_CARDS);
    assert_eq!(board.len(), COMMUNITY_CARDS);
    assert_eq!(dealer.cards_remaining(), 45);

    for card in hole.iter().chain(&board) {
        assert!(!dealer.deck().cards().contains(card));
    }
}

#[test]
fn over_dealing_fails() {
    let mut dealer = Dealer::new(DealerOptions::default(), 3);
    dealer.shuffle_deck();

    for _ in 0..25 {
        dealer.deal_hole_cards().unwrap();
    }
    assert_eq!(dealer.cards_remaining(), 2);

    let err = dealer.deal_community_cards().unwrap_err();
    assert_eq!(
        err,
        DealError::InsufficientCards {
            requested: COMMUNITY_CARDS,
            remaining: 2,
        }
    );
    assert_eq!(err.to_string(), "insufficient cards: requested 5, 2 remaining");
    assert_eq!(dealer.cards_remaining(), 2);

    dealer.deal_hole_cards().unwrap();
    assert!(dealer.deck().is_empty());
    assert!(dealer.deal_hole_cards().is_err());

    // A new shuffle starts a fresh deal cycle.
    dealer.shuffle_deck();
    assert_eq!(dealer.cards_remaining(), DECK_SIZE);
}

#[test]
fn rounds_are_scored_with_the_configured_selection() {
    let mut whole = Dealer::new(DealerOptions::default(), 77);
    let mut best = Dealer::new(
        DealerOptions::default().with_selection(HandSelection::BestFive),
        77,
    );

    for _ in 0..50 {
        let round = whole.deal_round().unwrap();
        assert_eq!(best.deal_round().unwrap(), round);

        let literal = whole.showdown(&round);
        let selected = best.showdown(&round);
        assert!(selected.values.first >= literal.values.first);
        assert!(selected.values.second >= literal.values.second);

        let expected = match selected.values.first.cmp(&selected.values.second) {
            core::cmp::Ordering::Greater => Outcome::First,
            core::cmp::Ordering::Less => Outcome::Second,
            core::cmp::Ordering::Equal => Outcome::Tie,
        };
        assert_eq!(selected.outcome, expected);
    }
}
