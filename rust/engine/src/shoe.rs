use crate::cards::{all_ranks, Rank, CARDS_PER_DECK, COPIES_PER_DECK};
use crate::errors::CountError;
use crate::rules::hilo_value;
use std::sync::atomic::{AtomicU64, Ordering};

/// Smallest and largest shoe a session can be created with.
pub const MIN_DECKS: u8 = 1;
pub const MAX_DECKS: u8 = 8;

static NEXT_SHOE_ID: AtomicU64 = AtomicU64::new(1);

fn next_shoe_id() -> u64 {
    NEXT_SHOE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Counting state of a single blackjack shoe.
///
/// Owns the running count, the number of cards seen and a per-rank tally.
/// The only mutating paths are [`crate::engine::apply_batch`] and
/// [`crate::engine::reset`], which keep these invariants:
///
/// - no rank is ever counted more than [`ShoeState::max_per_rank`] times
/// - [`ShoeState::cards_dealt`] never exceeds [`ShoeState::total_cards`]
/// - the running count equals the Hi-Lo sum of every counted card
///
/// # Examples
///
/// ```
/// use hilo_engine::shoe::ShoeState;
///
/// let shoe = ShoeState::new(8).unwrap();
/// assert_eq!(shoe.total_cards(), 416);
/// assert_eq!(shoe.max_per_rank(), 32);
/// assert!(ShoeState::new(0).is_err());
/// ```
///
/// Equality compares the counting state only. Every shoe, clones included,
/// carries its own identity, so a batch validated on one shoe is never
/// accepted by another.
#[derive(Debug)]
pub struct ShoeState {
    deck_count: u8,
    running_count: i32,
    cards_dealt: u32,
    rank_counts: [u32; 13],
    id: u64,
    /// Bumped on every mutation so a stale validated batch can be detected.
    generation: u64,
}

impl Clone for ShoeState {
    fn clone(&self) -> Self {
        Self {
            id: next_shoe_id(),
            ..*self
        }
    }
}

impl PartialEq for ShoeState {
    fn eq(&self, other: &Self) -> bool {
        self.deck_count == other.deck_count
            && self.running_count == other.running_count
            && self.cards_dealt == other.cards_dealt
            && self.rank_counts == other.rank_counts
    }
}

impl Eq for ShoeState {}

impl ShoeState {
    pub fn new(deck_count: u8) -> Result<Self, CountError> {
        if !(MIN_DECKS..=MAX_DECKS).contains(&deck_count) {
            return Err(CountError::InvalidDeckCount {
                requested: deck_count,
            });
        }
        Ok(Self {
            deck_count,
            running_count: 0,
            cards_dealt: 0,
            rank_counts: [0; 13],
            id: next_shoe_id(),
            generation: 0,
        })
    }

    pub fn deck_count(&self) -> u8 {
        self.deck_count
    }
    pub fn total_cards(&self) -> u32 {
        u32::from(self.deck_count) * CARDS_PER_DECK
    }
    pub fn max_per_rank(&self) -> u32 {
        u32::from(self.deck_count) * COPIES_PER_DECK
    }
    pub fn running_count(&self) -> i32 {
        self.running_count
    }
    pub fn cards_dealt(&self) -> u32 {
        self.cards_dealt
    }
    pub fn cards_remaining(&self) -> u32 {
        self.total_cards().saturating_sub(self.cards_dealt)
    }
    pub fn rank_count(&self, rank: Rank) -> u32 {
        self.rank_counts[rank.index()]
    }

    /// Per-rank tallies in [`all_ranks`] order.
    pub fn rank_counts(&self) -> impl Iterator<Item = (Rank, u32)> + '_ {
        all_ranks()
            .into_iter()
            .map(move |r| (r, self.rank_count(r)))
    }

    /// Cards with a positive Hi-Lo value (2-6) counted since the last reset.
    pub fn cold_dealt(&self) -> u32 {
        self.rank_counts()
            .filter(|(r, _)| hilo_value(*r) > 0)
            .map(|(_, n)| n)
            .sum()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cards_dealt >= self.total_cards()
    }

    /// Identifies this shoe and its current state for batch validation.
    pub(crate) fn stamp(&self) -> (u64, u64) {
        (self.id, self.generation)
    }

    /// Counts one card. Returns `false` and leaves the state untouched when the
    /// shoe has no cards left or the rank is already at its maximum.
    pub(crate) fn record(&mut self, rank: Rank) -> bool {
        if self.is_exhausted() || self.rank_count(rank) >= self.max_per_rank() {
            return false;
        }
        self.running_count += hilo_value(rank);
        self.cards_dealt += 1;
        self.rank_counts[rank.index()] += 1;
        self.generation += 1;
        true
    }

    pub(crate) fn clear(&mut self) {
        self.running_count = 0;
        self.cards_dealt = 0;
        self.rank_counts = [0; 13];
        self.generation += 1;
    }

    #[cfg(test)]
    pub(crate) fn force_dealt(&mut self, cards_dealt: u32) {
        self.cards_dealt = cards_dealt;
    }
}
