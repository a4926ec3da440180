use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::cards::{full_deck, Card};
use crate::errors::HandError;
use crate::hand::{classify_and_order, Hand, HAND_SIZE};

/// A 52-card deck dealt from the top. Shuffles draw from a seeded ChaCha20
/// stream, so the same seed always produces the same sequence of deals.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
        debug!(cards = self.cards.len(), "shuffled deck");
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn burn_card(&mut self) {
        let _ = self.deal_card();
    }

    /// Deals and evaluates the next five cards. Nothing is dealt when fewer
    /// than five remain.
    pub fn deal_hand(&mut self) -> Result<Hand, HandError> {
        let remaining = self.remaining();
        if remaining < HAND_SIZE {
            return Err(HandError::DeckExhausted {
                requested: HAND_SIZE,
                remaining,
            });
        }
        let mut five = [self.cards[self.position]; HAND_SIZE];
        five.copy_from_slice(&self.cards[self.position..self.position + HAND_SIZE]);
        self.position += HAND_SIZE;
        Ok(classify_and_order(five))
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
