//! Text rendering for counting results.
//!
//! Pure functions that turn engine results into terminal lines. Color is
//! applied with `colored` only when the caller enables it, so the same
//! functions serve interactive terminals, pipes and tests.
//!
//! - **Hot** cards (tens, faces, aces) render red
//! - **Cold** cards (2-6) render blue
//! - **Neutral** cards (7-9) render dimmed
//!
//! ## Example
//!
//! ```rust
//! use hilo_engine::cards::Rank;
//! use hilo_engine::engine::CardOutcome;
//! use hilo_engine::rules::Temperature;
//! use hilo_cli::formatters::format_card_outcome;
//!
//! let ace = CardOutcome { rank: Rank::Ace, value: -1, temperature: Temperature::Hot };
//! assert_eq!(format_card_outcome(&ace, false), "  A   -1  hot");
//! ```

use colored::Colorize;
use hilo_engine::engine::{BatchResult, CardOutcome};
use hilo_engine::rules::Temperature;
use hilo_engine::shoe::ShoeState;
use hilo_engine::stats::{Favorability, Snapshot};
use std::io::Write;

fn paint_temperature(text: &str, temperature: Temperature, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match temperature {
        Temperature::Hot => text.red().to_string(),
        Temperature::Cold => text.blue().to_string(),
        Temperature::Neutral => text.dimmed().to_string(),
    }
}

/// Formats a favorability label, green when the shoe favors the player and
/// red when it favors the dealer.
pub fn format_favorability(favorability: Favorability, color: bool) -> String {
    let label = favorability.as_str();
    if !color {
        return label.to_string();
    }
    match favorability {
        Favorability::PlayerFavorable => label.green().bold().to_string(),
        Favorability::DealerFavorable => label.red().bold().to_string(),
        Favorability::Neutral => label.yellow().to_string(),
    }
}

/// One line per counted card: rank, signed Hi-Lo value and temperature.
pub fn format_card_outcome(outcome: &CardOutcome, color: bool) -> String {
    let line = format!(
        "{:>3}  {:>+3}  {}",
        outcome.rank.as_str(),
        outcome.value,
        outcome.temperature
    );
    paint_temperature(&line, outcome.temperature, color)
}

pub fn format_tally(result: &BatchResult, color: bool) -> String {
    format!(
        "Batch: {} {}, {} {}, {} {} (count {:+})",
        result.hot,
        paint_temperature("hot", Temperature::Hot, color),
        result.cold,
        paint_temperature("cold", Temperature::Cold, color),
        result.neutral,
        paint_temperature("neutral", Temperature::Neutral, color),
        result.count_delta()
    )
}

/// Per-rank tallies such as `2:1 3:0 ... A:4`.
pub fn format_rank_counts(shoe: &ShoeState) -> String {
    shoe.rank_counts()
        .map(|(rank, n)| format!("{}:{}", rank, n))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes the status block shown after every batch and on `status`.
pub fn write_status(out: &mut dyn Write, snap: &Snapshot, color: bool) -> std::io::Result<()> {
    writeln!(out, "Running Count: {}", snap.running_count)?;
    writeln!(out, "Cards Seen: {}/{}", snap.cards_dealt, snap.total_cards)?;
    writeln!(out, "Cards Remaining: {}", snap.cards_remaining)?;
    writeln!(out, "Decks Remaining: {:.2}", snap.decks_remaining)?;
    writeln!(out, "True Count: {:.2}", snap.true_count)?;
    writeln!(out, "Penetration: {:.1}%", snap.penetration * 100.0)?;
    writeln!(
        out,
        "Status: {}",
        format_favorability(snap.favorability, color)
    )
}
