//! Command-line argument types.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "hilo",
    version,
    about = "Blackjack Hi-Lo card counter (2-6 = +1, 7-9 = 0, 10-A = -1)"
)]
pub struct HiloCli {
    /// Emit debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Defaults to an interactive `count` session
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count cards interactively as they are dealt
    Count {
        /// Decks in the shoe; prompts when neither this nor the config sets it
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
        decks: Option<u8>,
    },
    /// Deal cards from a shuffled practice shoe and count them
    Deal {
        #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=8))]
        decks: u8,
        /// Number of cards to deal
        #[arg(long, default_value_t = 20)]
        cards: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
