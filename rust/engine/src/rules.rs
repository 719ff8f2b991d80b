use crate::cards::Rank;
use crate::errors::CountError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display label derived from the sign of a card's Hi-Lo value.
///
/// Low cards leaving the shoe "cool" it for the dealer, so a positive value is
/// labelled cold and a negative value hot. The label carries no other meaning.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Cold,
    Hot,
    Neutral,
}

impl Temperature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Temperature::Cold => "cold",
            Temperature::Hot => "hot",
            Temperature::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a raw user token into a [`Rank`].
///
/// Surrounding whitespace is ignored, letters are matched case-insensitively
/// and `T` is accepted as an alias for `10`.
///
/// # Errors
///
/// Returns [`CountError::InvalidCard`] carrying the raw token when it does not
/// name a rank.
///
/// # Examples
///
/// ```
/// use hilo_engine::cards::Rank;
/// use hilo_engine::rules::normalize;
///
/// assert_eq!(normalize(" t "), Ok(Rank::Ten));
/// assert_eq!(normalize("q"), Ok(Rank::Queen));
/// assert!(normalize("11").is_err());
/// ```
pub fn normalize(token: &str) -> Result<Rank, CountError> {
    let upper = token.trim().to_uppercase();
    let label = if upper == "T" { "10" } else { upper.as_str() };
    label.parse().map_err(|_| CountError::InvalidCard {
        token: token.to_string(),
    })
}

/// Hi-Lo tag of a rank: 2-6 count +1, 7-9 count 0, tens, faces and aces count -1.
pub fn hilo_value(rank: Rank) -> i32 {
    match rank {
        Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
        Rank::Seven | Rank::Eight | Rank::Nine => 0,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1,
    }
}

pub fn temperature(rank: Rank) -> Temperature {
    match hilo_value(rank) {
        v if v > 0 => Temperature::Cold,
        v if v < 0 => Temperature::Hot,
        _ => Temperature::Neutral,
    }
}
