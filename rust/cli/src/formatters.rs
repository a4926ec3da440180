//! Card and hand formatters for terminal display.
//!
//! Supports Unicode suit symbols with an ASCII fallback. The ASCII form is
//! the same text the engine parses, so output can be pasted back into
//! `eval` or `compare`.
//!
//! ## Example
//!
//! ```rust
//! use pokerhand_engine::cards::{Card, Rank, Suit};
//! use pokerhand_cli::formatters::{CardStyle, format_card};
//!
//! let ace_spades = Card::new(Suit::Spades, Rank::Ace);
//! assert_eq!(format_card(&ace_spades, CardStyle::Unicode), "A♠");
//! assert_eq!(format_card(&ace_spades, CardStyle::Ascii), "As");
//! ```

use pokerhand_engine::cards::{Card, Suit};
use pokerhand_engine::hand::Hand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    Unicode,
    Ascii,
}

impl CardStyle {
    /// ASCII when requested or when the terminal is unlikely to render suits.
    pub fn resolve(force_ascii: bool) -> Self {
        if force_ascii || !supports_unicode() {
            CardStyle::Ascii
        } else {
            CardStyle::Unicode
        }
    }
}

/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Other platforms are assumed
/// to render Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit, style: CardStyle) -> String {
    match style {
        CardStyle::Unicode => match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string(),
        CardStyle::Ascii => suit.letter().to_string(),
    }
}

pub fn format_card(card: &Card, style: CardStyle) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(card.suit, style))
}

/// Cards in canonical order in bracket notation, e.g. `[J♠ J♣ J♥ 4♦ 4♠]`.
pub fn format_hand(hand: &Hand, style: CardStyle) -> String {
    let cards: Vec<String> = hand.cards().iter().map(|c| format_card(c, style)).collect();
    format!("[{}]", cards.join(" "))
}

/// One line summary: cards followed by the category label.
pub fn format_evaluated(hand: &Hand, style: CardStyle) -> String {
    format!("{} {}", format_hand(hand, style), hand.category())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerhand_engine::cards::Rank;

    #[test]
    fn test_format_suit_styles() {
        assert_eq!(format_suit(Suit::Hearts, CardStyle::Unicode), "♥");
        assert_eq!(format_suit(Suit::Hearts, CardStyle::Ascii), "h");
        assert_eq!(format_suit(Suit::Clubs, CardStyle::Ascii), "c");
    }

    #[test]
    fn test_format_card() {
        let ten = Card::new(Suit::Diamonds, Rank::Ten);
        assert_eq!(format_card(&ten, CardStyle::Unicode), "T♦");
        assert_eq!(format_card(&ten, CardStyle::Ascii), "Td");
    }

    #[test]
    fn test_format_hand_uses_canonical_order() {
        let hand = Hand::parse("4d Js 4s Jc Jh").unwrap();
        assert_eq!(format_hand(&hand, CardStyle::Ascii), "[Js Jc Jh 4d 4s]");
        assert_eq!(
            format_evaluated(&hand, CardStyle::Ascii),
            "[Js Jc Jh 4d 4s] full house"
        );
    }

    #[test]
    fn test_forced_ascii() {
        assert_eq!(CardStyle::resolve(true), CardStyle::Ascii);
    }
}
