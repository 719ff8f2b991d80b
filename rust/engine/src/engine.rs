//! Two-phase batch counting.
//!
//! A batch of raw tokens is first checked with [`validate_batch`], which reads
//! the shoe but never writes to it. Only a [`ValidatedBatch`] can be passed to
//! [`apply_batch`], and it is refused if the shoe changed after validation. A
//! batch rejected for an invalid token or for exceeding a rank's capacity
//! therefore leaves the shoe exactly as it was.

use crate::cards::{all_ranks, Rank};
use crate::errors::{CapacityViolation, CountError};
use crate::rules::{hilo_value, normalize, temperature, Temperature};
use crate::shoe::ShoeState;
use serde::Serialize;
use tracing::{debug, info, warn};

/// A batch that passed validation against a specific shoe state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBatch {
    ranks: Vec<Rank>,
    tokens: Vec<String>,
    stamp: (u64, u64),
}

impl ValidatedBatch {
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }
    pub fn len(&self) -> usize {
        self.ranks.len()
    }
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Effect of one counted card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardOutcome {
    pub rank: Rank,
    pub value: i32,
    pub temperature: Temperature,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub per_card: Vec<CardOutcome>,
    pub hot: u32,
    pub cold: u32,
    pub neutral: u32,
    /// Raw tokens left unprocessed because the shoe ran out of cards.
    pub exhausted_tokens: Vec<String>,
}

impl BatchResult {
    /// Net change of the running count caused by this batch.
    pub fn count_delta(&self) -> i32 {
        self.per_card.iter().map(|c| c.value).sum()
    }

    /// The exhaustion report for this batch, if any cards were skipped.
    pub fn exhaustion(&self) -> Option<CountError> {
        if self.exhausted_tokens.is_empty() {
            None
        } else {
            Some(CountError::ShoeExhausted {
                skipped: self.exhausted_tokens.clone(),
            })
        }
    }
}

/// Normalizes and checks a batch of raw tokens against the shoe.
///
/// # Errors
///
/// - [`CountError::InvalidCard`] for the first token that is not a rank
/// - [`CountError::CapacityExceeded`] listing every rank whose dealt count
///   would pass the physical maximum of the shoe
///
/// # Examples
///
/// ```
/// use hilo_engine::engine::{apply_batch, validate_batch};
/// use hilo_engine::shoe::ShoeState;
///
/// let mut shoe = ShoeState::new(8).unwrap();
/// let batch = validate_batch(&shoe, &["A", "K", "10", "7", "9", "5", "2"]).unwrap();
/// apply_batch(&mut shoe, batch).unwrap();
/// assert_eq!(shoe.running_count(), -1);
/// assert_eq!(shoe.cards_dealt(), 7);
/// ```
pub fn validate_batch<S: AsRef<str>>(
    state: &ShoeState,
    tokens: &[S],
) -> Result<ValidatedBatch, CountError> {
    let ranks = tokens
        .iter()
        .map(|t| normalize(t.as_ref()))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| warn!(error = %e, "batch rejected"))?;

    let mut incoming = [0u32; 13];
    for r in &ranks {
        incoming[r.index()] += 1;
    }
    let max = state.max_per_rank();
    let violations: Vec<CapacityViolation> = all_ranks()
        .into_iter()
        .filter(|r| incoming[r.index()] > 0)
        .map(|r| CapacityViolation {
            rank: r,
            attempted: state.rank_count(r) + incoming[r.index()],
            max,
        })
        .filter(|v| v.attempted > v.max)
        .collect();
    if !violations.is_empty() {
        let err = CountError::CapacityExceeded { violations };
        warn!(error = %err, "batch rejected");
        return Err(err);
    }

    Ok(ValidatedBatch {
        ranks,
        tokens: tokens.iter().map(|t| t.as_ref().to_string()).collect(),
        stamp: state.stamp(),
    })
}

/// Counts every card of a validated batch, in order.
///
/// If the shoe runs out part way, the cards already counted stay counted and
/// the remaining raw tokens are returned in [`BatchResult::exhausted_tokens`].
///
/// # Errors
///
/// Returns [`CountError::StaleBatch`] without touching the shoe if the batch
/// was validated on a different shoe or the shoe was mutated since.
pub fn apply_batch(
    state: &mut ShoeState,
    batch: ValidatedBatch,
) -> Result<BatchResult, CountError> {
    if batch.stamp != state.stamp() {
        warn!("stale batch refused");
        return Err(CountError::StaleBatch);
    }

    let mut result = BatchResult::default();
    for (i, rank) in batch.ranks.iter().copied().enumerate() {
        // With a matching stamp every rank has room, so a refusal means exhaustion.
        if !state.record(rank) {
            result.exhausted_tokens = batch.tokens[i..].to_vec();
            warn!(
                skipped = result.exhausted_tokens.len(),
                "shoe exhausted mid-batch"
            );
            break;
        }
        let outcome = CardOutcome {
            rank,
            value: hilo_value(rank),
            temperature: temperature(rank),
        };
        match outcome.temperature {
            Temperature::Hot => result.hot += 1,
            Temperature::Cold => result.cold += 1,
            Temperature::Neutral => result.neutral += 1,
        }
        result.per_card.push(outcome);
    }

    debug!(
        applied = result.per_card.len(),
        running_count = state.running_count(),
        cards_dealt = state.cards_dealt(),
        "batch applied"
    );
    Ok(result)
}

/// Returns the shoe to its freshly loaded state. The deck count is kept.
pub fn reset(state: &mut ShoeState) {
    state.clear();
    info!(decks = state.deck_count(), "shoe reset");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustion_keeps_applied_cards_and_reports_the_rest() {
        let mut shoe = ShoeState::new(1).unwrap();
        shoe.force_dealt(50);
        let batch = validate_batch(&shoe, &["2", "k", "5", "t"]).unwrap();
        let result = apply_batch(&mut shoe, batch).unwrap();

        assert_eq!(result.per_card.len(), 2);
        assert_eq!(result.exhausted_tokens, vec!["5".to_string(), "t".to_string()]);
        assert_eq!(shoe.cards_dealt(), 52);
        assert_eq!(shoe.running_count(), 0);
        assert!(shoe.is_exhausted());
        assert_eq!(
            result.exhaustion(),
            Some(CountError::ShoeExhausted {
                skipped: vec!["5".into(), "t".into()]
            })
        );
    }

    #[test]
    fn exhausted_shoe_skips_every_token() {
        let mut shoe = ShoeState::new(1).unwrap();
        shoe.force_dealt(52);
        let batch = validate_batch(&shoe, &["A", "9"]).unwrap();
        let result = apply_batch(&mut shoe, batch).unwrap();
        assert!(result.per_card.is_empty());
        assert_eq!(result.exhausted_tokens.len(), 2);
        assert_eq!(shoe.cards_dealt(), 52);
    }

    #[test]
    fn reset_leaves_exhausted_state() {
        let mut shoe = ShoeState::new(2).unwrap();
        shoe.force_dealt(104);
        reset(&mut shoe);
        assert!(!shoe.is_exhausted());
        assert_eq!(shoe.cards_dealt(), 0);
        assert_eq!(shoe.total_cards(), 104);
    }
}
