//! Command handler modules for the pokerhand CLI.
//!
//! Each command lives in its own file and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`, writing to
//! injected `&mut dyn Write` streams so tests can capture output.

mod bench;
mod cfg;
mod compare;
mod deal;
mod eval;

pub use bench::handle_bench_command;
pub use cfg::handle_cfg_command;
pub use compare::handle_compare_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
