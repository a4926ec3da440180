//! Bench command handler for hand evaluation performance benchmarking.
//!
//! Deals pairs of hands from a deck seeded with 1, classifies and compares
//! them, and reports elapsed time with the outcome tally.

use crate::error::CliError;
use pokerhand_engine::deck::Deck;
use pokerhand_engine::hand::Outcome;
use std::io::Write;

pub fn handle_bench_command(iters: u32, out: &mut dyn Write) -> Result<(), CliError> {
    if iters == 0 {
        return Err(CliError::InvalidInput("iters must be >=1".into()));
    }
    let start = std::time::Instant::now();
    let (mut wins, mut losses, mut draws) = (0u32, 0u32, 0u32);
    let mut deck = Deck::new_with_seed(1);
    deck.shuffle();
    for _ in 0..iters {
        if deck.remaining() < 10 {
            deck.shuffle();
        }
        let a = deck.deal_hand()?;
        let b = deck.deal_hand()?;
        match a.compare(&b) {
            Outcome::Win => wins += 1,
            Outcome::Lose => losses += 1,
            Outcome::Draw => draws += 1,
        }
    }
    let dur = start.elapsed();
    writeln!(out, "Benchmark: {} iters in {:?}", iters, dur)?;
    writeln!(out, "Outcomes: win={} lose={} draw={}", wins, losses, draws)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_command_output_format() {
        let mut out = Vec::new();
        handle_bench_command(200, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Benchmark: 200 iters in "));
        assert!(output.contains("Outcomes: win="));
    }

    #[test]
    fn test_bench_outcomes_sum_to_iters() {
        let mut out = Vec::new();
        handle_bench_command(500, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let tally = output.lines().nth(1).unwrap();
        let total: u32 = tally
            .split_whitespace()
            .filter_map(|kv| kv.split_once('='))
            .map(|(_, v)| v.parse::<u32>().unwrap())
            .sum();
        assert_eq!(total, 500);
    }

    #[test]
    fn test_bench_rejects_zero_iters() {
        let mut out = Vec::new();
        assert!(handle_bench_command(0, &mut out).is_err());
    }
}
