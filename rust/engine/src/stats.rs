use crate::cards::CARDS_PER_DECK;
use crate::policy::CountPolicy;
use crate::shoe::ShoeState;
use serde::Serialize;
use std::fmt;

/// Qualitative reading of the remaining shoe.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Favorability {
    PlayerFavorable,
    DealerFavorable,
    Neutral,
}

impl Favorability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Favorability::PlayerFavorable => "Player-favorable",
            Favorability::DealerFavorable => "Dealer-favorable",
            Favorability::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Favorability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time view of a shoe and its derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub running_count: i32,
    pub cards_dealt: u32,
    pub total_cards: u32,
    pub cards_remaining: u32,
    pub decks_remaining: f64,
    pub true_count: f64,
    /// Fraction of the shoe already dealt, `0.0..=1.0`.
    pub penetration: f64,
    pub favorability: Favorability,
}

/// Estimated decks left in the shoe, rounded to the nearest half deck and
/// never below the policy floor.
///
/// # Examples
///
/// ```
/// use hilo_engine::policy::CountPolicy;
/// use hilo_engine::shoe::ShoeState;
/// use hilo_engine::stats::decks_remaining;
///
/// let shoe = ShoeState::new(6).unwrap();
/// assert_eq!(decks_remaining(&shoe, &CountPolicy::default()), 6.0);
/// ```
pub fn decks_remaining(state: &ShoeState, policy: &CountPolicy) -> f64 {
    let decks = f64::from(state.cards_remaining()) / f64::from(CARDS_PER_DECK);
    let rounded = (decks * 2.0).round() / 2.0;
    rounded.max(policy.deck_floor.decks())
}

pub fn true_count(state: &ShoeState, policy: &CountPolicy) -> f64 {
    f64::from(state.running_count()) / decks_remaining(state, policy)
}

/// Classifies the shoe by true count, unless enough low cards have left the
/// shoe to trigger the policy's cold-card override.
pub fn favorability(state: &ShoeState, policy: &CountPolicy) -> Favorability {
    if let Some(threshold) = policy.cold_override {
        if state.cold_dealt() >= threshold {
            return Favorability::PlayerFavorable;
        }
    }
    let tc = true_count(state, policy);
    if tc > 1.0 {
        Favorability::PlayerFavorable
    } else if tc < -1.0 {
        Favorability::DealerFavorable
    } else {
        Favorability::Neutral
    }
}

pub fn snapshot(state: &ShoeState, policy: &CountPolicy) -> Snapshot {
    Snapshot {
        running_count: state.running_count(),
        cards_dealt: state.cards_dealt(),
        total_cards: state.total_cards(),
        cards_remaining: state.cards_remaining(),
        decks_remaining: decks_remaining(state, policy),
        true_count: true_count(state, policy),
        penetration: f64::from(state.cards_dealt()) / f64::from(state.total_cards()),
        favorability: favorability(state, policy),
    }
}
