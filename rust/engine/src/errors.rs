use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("A hand needs exactly {expected} cards, got {actual}")]
    WrongCardCount { expected: usize, actual: usize },
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Deck exhausted: requested {requested} cards, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
}
