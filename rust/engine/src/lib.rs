//! # hilo-engine: Hi-Lo Shoe Counting Core
//!
//! Tracks the Hi-Lo card-counting state of a blackjack shoe. Dealt ranks are
//! submitted in batches, validated against the physical limits of the shoe,
//! and applied atomically to a running count and per-rank tallies.
//!
//! ## Core Modules
//!
//! - [`cards`] - Rank representation and deck constants
//! - [`rules`] - Token normalization, Hi-Lo values and temperature labels
//! - [`shoe`] - The owned [`shoe::ShoeState`] and its invariants
//! - [`engine`] - Two-phase batch validation and application, reset
//! - [`stats`] - Decks remaining, true count, favorability and snapshots
//! - [`policy`] - Configurable deck floor and cold-card override
//! - [`deck`] - Seeded shuffled shoe for counting drills
//! - [`errors`] - Error types for counting operations
//!
//! ## Quick Start
//!
//! ```rust
//! use hilo_engine::engine::{apply_batch, validate_batch};
//! use hilo_engine::policy::CountPolicy;
//! use hilo_engine::shoe::ShoeState;
//! use hilo_engine::stats::snapshot;
//!
//! let mut shoe = ShoeState::new(6).unwrap();
//! let batch = validate_batch(&shoe, &["2", "5", "6", "K"]).unwrap();
//! let result = apply_batch(&mut shoe, batch).unwrap();
//! assert_eq!(result.cold, 3);
//! assert_eq!(result.hot, 1);
//!
//! let snap = snapshot(&shoe, &CountPolicy::default());
//! assert_eq!(snap.running_count, 2);
//! println!("True count: {:.2} ({})", snap.true_count, snap.favorability);
//! ```
//!
//! ## Atomic Batches
//!
//! A batch that would push any rank past `4 × decks` copies is rejected as a
//! whole and the shoe is left untouched:
//!
//! ```rust
//! use hilo_engine::engine::validate_batch;
//! use hilo_engine::errors::CountError;
//! use hilo_engine::shoe::ShoeState;
//!
//! let shoe = ShoeState::new(1).unwrap();
//! let err = validate_batch(&shoe, &["A", "A", "A", "A", "A"]).unwrap_err();
//! assert!(matches!(err, CountError::CapacityExceeded { .. }));
//! assert_eq!(shoe.cards_dealt(), 0);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod policy;
pub mod rules;
pub mod shoe;
pub mod stats;
