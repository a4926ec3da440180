use std::collections::HashSet;

use pokerhand_engine::cards::Card;
use pokerhand_engine::deck::Deck;
use pokerhand_engine::hand::Hand;

#[test]
fn deck_reset_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.reset();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(
        deck.deal_card().is_none(),
        "after 52 cards, deck should be empty"
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn ten_hands_exhaust_fifty_cards_without_repeats() {
    let mut deck = Deck::new_with_seed(777);
    deck.shuffle();
    let hands: Vec<Hand> = (0..10).map(|_| deck.deal_hand().unwrap()).collect();
    let mut set = HashSet::new();
    for h in &hands {
        for c in h.cards() {
            assert!(set.insert(*c), "card {} dealt twice", c);
        }
    }
    assert_eq!(set.len(), 50);
    assert_eq!(deck.remaining(), 2);
    assert!(deck.deal_hand().is_err());
}
