use crate::cards::Rank;
use std::fmt;
use thiserror::Error;

/// One rank that a rejected batch would have pushed past its physical limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityViolation {
    pub rank: Rank,
    /// Dealt count the rank would have reached had the batch been applied.
    pub attempted: u32,
    pub max: u32,
}

impl fmt::Display for CapacityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} would reach {} (would exceed max for {}: {})",
            self.rank, self.attempted, self.rank, self.max
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CountError {
    #[error("Invalid card: '{token}' (use 2-10, T, J, Q, K, A)")]
    InvalidCard { token: String },
    #[error("Batch rejected: {}", join_violations(.violations))]
    CapacityExceeded { violations: Vec<CapacityViolation> },
    #[error("Shoe exhausted, skipped {} card(s): {}", .skipped.len(), .skipped.join(" "))]
    ShoeExhausted { skipped: Vec<String> },
    #[error("Invalid deck count: {requested} (expected 1-8)")]
    InvalidDeckCount { requested: u8 },
    #[error("Batch was validated against a different shoe state")]
    StaleBatch,
}

fn join_violations(violations: &[CapacityViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
