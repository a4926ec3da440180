//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pokerhand",
    version,
    about = "Classify and compare five-card poker hands"
)]
pub struct PokerhandCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify five cards and show their tie-break order
    Eval {
        /// Cards such as `As Kd 10h`, separately or as one quoted string
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Emit a JSON object instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compare two hands; the result is from the first hand's side
    Compare {
        #[arg(long)]
        hand: String,
        #[arg(long)]
        against: String,
        #[arg(long)]
        json: bool,
    },
    /// Deal two hands per round from a shuffled deck and compare them
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        rounds: Option<u32>,
    },
    /// Time classification and comparison of dealt hands
    Bench {
        #[arg(long, default_value_t = 10_000)]
        iters: u32,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
