use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::HandError;

/// One of the four suits of a standard 52-card deck.
/// Suits only take part in flush detection, so they carry no ordering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades (♠)
    Spades,
    /// Clubs (♣)
    Clubs,
    /// Diamonds (♦)
    Diamonds,
    /// Hearts (♥)
    Hearts,
}

impl Suit {
    /// Single-letter form used in card text (`s`, `c`, `d`, `h`).
    pub fn letter(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
        }
    }

    pub fn from_letter(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            's' => Some(Suit::Spades),
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            _ => None,
        }
    }
}

/// The rank (face value) of a playing card, Two lowest through Ace highest.
/// Discriminants match the numeric value used for straight detection.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14, or 1 at the bottom of a wheel)
    Ace,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Value with the Ace counted as 1, as it plays in a five-high straight.
    pub fn low_value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            r => r.value(),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn from_symbol(c: char) -> Option<Rank> {
        match c.to_ascii_uppercase() {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }
}

/// A single playing card. Plain value type: two cards with the same suit
/// and rank are the same card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = HandError;

    /// Parses text such as `As`, `td` or `10h`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HandError::InvalidCard(s.to_string());
        let trimmed = s.trim();
        let suit_char = trimmed.chars().last().ok_or_else(invalid)?;
        let rank_text = &trimmed[..trimmed.len() - suit_char.len_utf8()];
        let rank = match rank_text {
            "10" => Rank::Ten,
            t if t.chars().count() == 1 => t
                .chars()
                .next()
                .and_then(Rank::from_symbol)
                .ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };
        let suit = Suit::from_letter(suit_char).ok_or_else(invalid)?;
        Ok(Card { suit, rank })
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
