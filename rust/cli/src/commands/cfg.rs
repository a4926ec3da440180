//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of each value
//! (default, file or environment) as pretty JSON:
//!
//! ```json
//! {
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    writeln!(out, "{}", render(&resolved)?)?;
    Ok(())
}

fn render(resolved: &ConfigResolved) -> Result<String, CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "rounds": {
            "value": config.rounds,
            "source": sources.rounds,
        },
        "ascii": {
            "value": config.ascii,
            "source": sources.ascii,
        },
        "log_level": {
            "value": config.log_level,
            "source": sources.log_level,
        }
    });
    Ok(serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?)
}
