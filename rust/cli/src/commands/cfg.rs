//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the resolved
//! configuration with the source of each value (default, environment, or
//! configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "decks": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "deck_floor": {
//!     "value": 0.5,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// Displays the resolved configuration as formatted JSON.
///
/// # Errors
///
/// Returns `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "decks": {
            "value": config.decks,
            "source": sources.decks,
        },
        "deck_floor": {
            "value": config.deck_floor.decks(),
            "source": sources.deck_floor,
        },
        "cold_threshold": {
            "value": config.cold_threshold,
            "source": sources.cold_threshold,
        },
        "color": {
            "value": config.color,
            "source": sources.color,
        },
        "policy": config.policy(),
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
