//! Input parsing and validation for the interactive session.
//!
//! Each line typed into a counting session is either a session command
//! (status, reset, help, quit) or a batch of card tokens. Card tokens are only
//! split here; deciding whether they name real ranks is the engine's job.

use hilo_engine::shoe::{MAX_DECKS, MIN_DECKS};

/// What a line of session input asks for.
#[derive(Debug, PartialEq)]
pub enum SessionInput {
    /// Blank line
    Empty,
    /// quit, exit or q
    Quit,
    /// help, h or ?
    Help,
    Status,
    Reset,
    /// Raw card tokens, in input order
    Cards(Vec<String>),
}

/// Classifies one line of session input.
///
/// Commands are matched case-insensitively. Anything else is treated as cards
/// separated by commas and/or whitespace.
///
/// # Example
///
/// ```rust
/// # use hilo_cli::validation::{parse_session_input, SessionInput};
/// assert_eq!(parse_session_input("Q"), SessionInput::Quit);
/// assert_eq!(
///     parse_session_input("A, K 10"),
///     SessionInput::Cards(vec!["A".into(), "K".into(), "10".into()])
/// );
/// ```
pub fn parse_session_input(line: &str) -> SessionInput {
    let cmd = line.trim().to_lowercase();
    match cmd.as_str() {
        "" => SessionInput::Empty,
        "quit" | "exit" | "q" => SessionInput::Quit,
        "help" | "h" | "?" => SessionInput::Help,
        "status" => SessionInput::Status,
        "reset" => SessionInput::Reset,
        _ => {
            let tokens = split_card_tokens(line);
            if tokens.is_empty() {
                SessionInput::Empty
            } else {
                SessionInput::Cards(tokens)
            }
        }
    }
}

/// Splits a line such as `"A K 10"` or `"A,K,10"` into raw tokens.
pub fn split_card_tokens(line: &str) -> Vec<String> {
    line.replace(',', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Parses the deck count typed at the session prompt.
pub fn parse_deck_count(input: &str) -> Result<u8, String> {
    match input.trim().parse::<u8>() {
        Ok(n) if (MIN_DECKS..=MAX_DECKS).contains(&n) => Ok(n),
        _ => Err(format!(
            "Invalid input. Enter a number from {} to {}.",
            MIN_DECKS, MAX_DECKS
        )),
    }
}
