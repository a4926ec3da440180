//! Deal command handler.
//!
//! Shuffles a seeded deck, deals two five-card hands per round and reports
//! both hands with P1's result. The same seed always reproduces the same
//! output.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{CardStyle, format_evaluated};
use crate::ui;
use pokerhand_engine::deck::Deck;
use std::io::Write;
use tracing::info;

/// Handle the deal command.
///
/// `seed` and `rounds` override the configured values. Without any seed a
/// random one is drawn and echoed so the deal can be replayed.
pub fn handle_deal_command(
    seed: Option<u64>,
    rounds: Option<u32>,
    config: &Config,
    style: CardStyle,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let rounds = rounds.unwrap_or(config.rounds);
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >=1".into()));
    }
    let seed = match seed.or(config.seed) {
        Some(s) => s,
        None => {
            let s = rand::random();
            ui::display_warning(err, &format!("No seed given, using {}", s))?;
            s
        }
    };

    let mut deck = Deck::new_with_seed(seed);
    writeln!(out, "Seed: {}", seed)?;
    for round in 1..=rounds {
        deck.shuffle();
        let p1 = deck.deal_hand()?;
        let p2 = deck.deal_hand()?;
        let outcome = p1.compare(&p2);
        info!(round, seed, outcome = %outcome, "dealt round");

        writeln!(out, "Round {}", round)?;
        writeln!(out, "P1: {}", format_evaluated(&p1, style))?;
        writeln!(out, "P2: {}", format_evaluated(&p2, style))?;
        writeln!(out, "Result: P1 {}", outcome)?;
    }
    Ok(())
}
