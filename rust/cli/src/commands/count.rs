//! # Count Command
//!
//! Interactive Hi-Lo counting session for a single shoe.
//!
//! Each input line is either a session command or a batch of dealt cards.
//! A batch is validated as a whole before any card is counted, so a typo or a
//! physically impossible card leaves the count untouched and the user simply
//! re-enters the batch.
//!
//! ## Session commands
//!
//! - `<cards>`: e.g. `A K 10 5 2` or `A,K,10,5,2`
//! - `status`: show the current count
//! - `reset`: zero the count and start a fresh shoe
//! - `help` / `h` / `?`: show the command list
//! - `quit` / `exit` / `q`: end the session (EOF also ends it)

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_card_outcome, format_rank_counts, format_tally, write_status};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{SessionInput, parse_deck_count, parse_session_input};
use hilo_engine::engine::{apply_batch, reset, validate_batch};
use hilo_engine::policy::CountPolicy;
use hilo_engine::shoe::ShoeState;
use hilo_engine::stats::snapshot;
use std::io::{BufRead, Write};
use tracing::info;

/// Handle the count command: an interactive counting session.
///
/// # Arguments
///
/// * `decks` - Deck count from the command line; falls back to the config,
///   then to an interactive prompt
/// * `config` - Resolved configuration (counting policy, default deck count)
/// * `color` - Whether to colorize output
/// * `out` - Output stream for session display
/// * `err` - Error stream for rejected input and warnings
/// * `stdin` - Input stream for session lines
///
/// # Returns
///
/// `Ok(())` when the user quits or input ends. Rejected batches are reported
/// on `err` and never end the session.
pub fn handle_count_command(
    decks: Option<u8>,
    config: &Config,
    color: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    writeln!(out, "Blackjack Hi-Lo Counter (CLI)")?;
    writeln!(out, "Hi-Lo: 2-6=+1, 7-9=0, 10-A=-1")?;
    writeln!(out)?;

    let decks = match decks.or(config.decks) {
        Some(d) => d,
        None => match prompt_decks(stdin, out, err)? {
            Some(d) => d,
            None => {
                writeln!(out, "Bye.")?;
                return Ok(());
            }
        },
    };

    let mut shoe = ShoeState::new(decks)?;
    let policy = config.policy();
    info!(decks, "session started");
    writeln!(
        out,
        "Shoe: {} deck(s), {} cards",
        shoe.deck_count(),
        shoe.total_cards()
    )?;
    print_help(out)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            writeln!(out, "Bye.")?;
            return Ok(());
        };

        match parse_session_input(&line) {
            SessionInput::Empty => continue,
            SessionInput::Quit => {
                writeln!(out, "Bye.")?;
                return Ok(());
            }
            SessionInput::Help => print_help(out)?,
            SessionInput::Status => {
                write_status(out, &snapshot(&shoe, &policy), color)?;
                writeln!(out, "Ranks: {}", format_rank_counts(&shoe))?;
            }
            SessionInput::Reset => {
                reset(&mut shoe);
                writeln!(out, "Reset. Running Count = 0, cards seen = 0.")?;
            }
            SessionInput::Cards(tokens) => {
                count_batch(&mut shoe, &policy, &tokens, color, out, err)?;
            }
        }
    }
}

/// Validates and applies one batch, then shows its effect and the new status.
fn count_batch(
    shoe: &mut ShoeState,
    policy: &CountPolicy,
    tokens: &[String],
    color: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let batch = match validate_batch(shoe, tokens) {
        Ok(b) => b,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Ok(());
        }
    };
    let result = match apply_batch(shoe, batch) {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Ok(());
        }
    };

    for card in &result.per_card {
        writeln!(out, "{}", format_card_outcome(card, color))?;
    }
    writeln!(out, "{}", format_tally(&result, color))?;
    if let Some(e) = result.exhaustion() {
        ui::display_warning(
            err,
            &format!("{}. Use 'reset' or choose more decks.", e),
        )?;
    }
    write_status(out, &snapshot(shoe, policy), color)?;
    Ok(())
}

/// Asks for the shoe size until a valid answer arrives. `None` on EOF.
fn prompt_decks(
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Option<u8>, CliError> {
    loop {
        write!(out, "Shoe decks (1-8): ")?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        match parse_deck_count(&line) {
            Ok(n) => return Ok(Some(n)),
            Err(msg) => ui::write_error(err, &msg)?,
        }
    }
}

fn print_help(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(
        out,
        "  <cards>   e.g. A K 10 5 2   (commas work too, T = 10; a lone Q needs a comma: Q,)"
    )?;
    writeln!(out, "  status    show the current count")?;
    writeln!(out, "  reset     zero the count and start a fresh shoe")?;
    writeln!(out, "  help      show this help")?;
    writeln!(out, "  quit      exit")?;
    writeln!(out)
}
