use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{all_ranks, Rank, COPIES_PER_DECK};
use crate::errors::CountError;
use crate::shoe::{MAX_DECKS, MIN_DECKS};

/// A physical multi-deck shoe with a seeded shuffle, used to generate
/// realistic card streams for counting drills.
#[derive(Debug)]
pub struct DrillShoe {
    cards: Vec<Rank>,
    position: usize,
    rng: ChaCha20Rng,
}

impl DrillShoe {
    pub fn new_with_seed(decks: u8, seed: u64) -> Result<Self, CountError> {
        if !(MIN_DECKS..=MAX_DECKS).contains(&decks) {
            return Err(CountError::InvalidDeckCount { requested: decks });
        }
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Ok(Self {
            cards: full_shoe(decks),
            position: 0,
            rng,
        })
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Rank> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn deal_n(&mut self, n: usize) -> Vec<Rank> {
        (0..n).map_while(|_| self.deal_card()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

fn full_shoe(decks: u8) -> Vec<Rank> {
    let copies = u32::from(decks) * COPIES_PER_DECK;
    all_ranks()
        .into_iter()
        .flat_map(|r| (0..copies).map(move |_| r))
        .collect()
}
