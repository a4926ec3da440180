//! # pokerhand-engine: Five-Card Hand Evaluation
//!
//! Classifies a five-card poker hand into one of ten categories, freezes its
//! cards in a canonical tie-break order, and compares two hands to a
//! win/lose/draw result.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Category detection, canonical ordering and comparison
//! - [`errors`] - Error types for hand construction and dealing
//!
//! ## Quick Start
//!
//! ```rust
//! use pokerhand_engine::hand::{Category, Hand, Outcome};
//!
//! let full_house = Hand::parse("Js Jc Jh 4d 4s").unwrap();
//! assert_eq!(full_house.category(), Category::FullHouse);
//!
//! let flush = Hand::parse("Ah Jh 9h 3h 2h").unwrap();
//! assert_eq!(full_house.compare(&flush), Outcome::Win);
//! assert_eq!(flush.compare(&full_house), Outcome::Lose);
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use pokerhand_engine::deck::Deck;
//!
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! deck1.shuffle();
//! deck2.shuffle();
//! assert_eq!(deck1.deal_hand(), deck2.deal_hand());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
