//! Counting policy knobs that vary between Hi-Lo counter variants.
//!
//! Two rules are not settled across counters in the wild: how small the
//! decks-remaining estimate may get before the true count division is clamped,
//! and whether a deep run of low cards forces a player-favorable reading. Both
//! are made explicit here instead of being buried in the statistics code.

use serde::{Deserialize, Serialize};

/// Default lower bound for the decks-remaining estimate.
pub const DEFAULT_DECK_FLOOR: DeckFloor = DeckFloor::Half;

/// Cold cards (2-6) dealt since the last reset that force a player-favorable reading.
pub const COLD_OVERRIDE_THRESHOLD: u32 = 60;

/// Lower bound applied to the decks-remaining estimate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckFloor {
    /// Never estimate fewer than half a deck.
    Half,
    /// Never estimate fewer than a quarter deck.
    Quarter,
}

impl DeckFloor {
    pub fn decks(&self) -> f64 {
        match self {
            DeckFloor::Half => 0.5,
            DeckFloor::Quarter => 0.25,
        }
    }

    /// Maps a configured number of decks onto a supported floor.
    pub fn from_decks(value: f64) -> Option<DeckFloor> {
        if value == 0.5 {
            Some(DeckFloor::Half)
        } else if value == 0.25 {
            Some(DeckFloor::Quarter)
        } else {
            None
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountPolicy {
    pub deck_floor: DeckFloor,
    /// `None` disables the cold-card override.
    pub cold_override: Option<u32>,
}

impl Default for CountPolicy {
    fn default() -> Self {
        Self {
            deck_floor: DEFAULT_DECK_FLOOR,
            cold_override: Some(COLD_OVERRIDE_THRESHOLD),
        }
    }
}
