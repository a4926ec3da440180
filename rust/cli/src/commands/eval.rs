//! Eval command handler.
//!
//! Classifies exactly five cards and prints the category together with the
//! canonical tie-break order.

use crate::error::CliError;
use crate::formatters::{CardStyle, format_hand};
use pokerhand_engine::hand::Hand;
use std::io::Write;

/// Handle the eval command.
///
/// `cards` may hold one card per element or several space-separated cards
/// per element; they are joined before parsing.
///
/// # Errors
///
/// Returns `CliError::Hand` when a card does not parse, when the count is
/// not five, or when a card repeats.
pub fn handle_eval_command(
    cards: &[String],
    json: bool,
    style: CardStyle,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hand = Hand::parse(&cards.join(" "))?;
    if json {
        writeln!(out, "{}", hand_json(&hand))?;
    } else {
        writeln!(out, "Category: {}", hand.category())?;
        writeln!(out, "Order: {}", format_hand(&hand, style))?;
    }
    Ok(())
}

pub(crate) fn hand_json(hand: &Hand) -> serde_json::Value {
    let cards: Vec<String> = hand.cards().iter().map(ToString::to_string).collect();
    serde_json::json!({
        "category": hand.category().label(),
        "strength": hand.category() as u8,
        "cards": cards,
    })
}
