//! Deal command handler for counting drills.
//!
//! Shuffles a practice shoe, deals a number of cards from it and runs them
//! through the same validate/apply path as a live session. With a fixed seed
//! the dealt sequence is reproducible, so a drill can be replayed and checked.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_tally, write_status};
use hilo_engine::deck::DrillShoe;
use hilo_engine::engine::{apply_batch, validate_batch};
use hilo_engine::shoe::ShoeState;
use hilo_engine::stats::snapshot;
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `decks` - Shoe size, 1-8
/// * `cards` - Number of cards to deal, at most the size of the shoe
/// * `seed` - Optional RNG seed; a random seed is chosen and printed otherwise
/// * `json` - Emit the dealt cards and snapshot as JSON instead of text
/// * `config` - Supplies the counting policy
/// * `color` - Whether to colorize text output
/// * `out` - Output stream for command results
///
/// # Errors
///
/// Returns [`CliError::InvalidInput`] when `cards` is zero or larger than the shoe.
pub fn handle_deal_command(
    decks: u8,
    cards: u32,
    seed: Option<u64>,
    json: bool,
    config: &Config,
    color: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut shoe = ShoeState::new(decks)?;
    if cards == 0 || cards > shoe.total_cards() {
        return Err(CliError::InvalidInput(format!(
            "cards must be between 1 and {}",
            shoe.total_cards()
        )));
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut drill = DrillShoe::new_with_seed(decks, seed)?;
    drill.shuffle();
    let labels: Vec<&str> = drill
        .deal_n(cards as usize)
        .iter()
        .map(|r| r.as_str())
        .collect();

    let batch = validate_batch(&shoe, &labels)?;
    let result = apply_batch(&mut shoe, batch)?;
    let snap = snapshot(&shoe, &config.policy());

    if json {
        let display = serde_json::json!({
            "seed": seed,
            "decks": decks,
            "cards": labels,
            "hot": result.hot,
            "cold": result.cold,
            "neutral": result.neutral,
            "snapshot": snap,
        });
        let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
        return Ok(());
    }

    writeln!(out, "deal: decks={} cards={} seed={}", decks, cards, seed)?;
    writeln!(out, "Cards: {}", labels.join(" "))?;
    writeln!(out, "{}", format_tally(&result, color))?;
    write_status(out, &snap, color)?;
    Ok(())
}
