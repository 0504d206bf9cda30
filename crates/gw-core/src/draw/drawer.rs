//! Weighted winner selection

use super::chances::ChanceTable;
use crate::error::{GiveawayError, Result};
use crate::ticket::TicketPool;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Largest seed that fits a TOML integer, so every reported seed can be
/// written back to `[draw] seed`
pub const MAX_SEED: u64 = i64::MAX as u64;

/// Result of a single draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawOutcome {
    /// Owner of the winning ticket
    pub winner: String,
    /// Index of the winning ticket in the pool
    pub ticket_index: usize,
    /// Index of the comment that earned the winning ticket
    pub comment_index: usize,
    /// Seed that reproduces this draw, when the source was seeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Weight of every participant
    pub chances: ChanceTable,
}

/// Picks one ticket uniformly at random
///
/// Every ticket is equally likely, so a user holding `k` of `n` tickets wins
/// with probability `k / n`. The random source is a type parameter so tests
/// can supply a fixed sequence.
pub struct Drawer<R = ChaCha8Rng> {
    rng: R,
    seed: Option<u64>,
}

impl Drawer<ChaCha8Rng> {
    /// Reproducible drawer
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Drawer seeded from system entropy
    ///
    /// The chosen seed is still recorded on each outcome so the draw can be
    /// replayed with [`Drawer::seeded`].
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen_range(0..=MAX_SEED);
        tracing::debug!("Generated draw seed {}", seed);
        Self::seeded(seed)
    }

    /// Seeded when `seed` is set, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: RngCore> Drawer<R> {
    /// Drawer over an arbitrary random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng, seed: None }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Select a winning ticket from `pool`
    pub fn draw(&mut self, pool: &TicketPool) -> Result<DrawOutcome> {
        if pool.is_empty() {
            return Err(GiveawayError::EmptyPool);
        }

        // Sample as u64 so a seed picks the same ticket on every platform
        let ticket_index = self.rng.gen_range(0..pool.len() as u64) as usize;
        let ticket = pool.get(ticket_index).ok_or(GiveawayError::EmptyPool)?;

        tracing::info!(
            "Drew ticket {} of {} for {}",
            ticket_index,
            pool.len(),
            ticket.username
        );

        Ok(DrawOutcome {
            winner: ticket.username.clone(),
            ticket_index,
            comment_index: ticket.comment_index,
            seed: self.seed,
            chances: ChanceTable::from_pool(pool),
        })
    }
}
