//! Random bases for generated CPFs.
//!
//! The RNG is injected, so a fixed seed always reproduces the same run.

use crate::domain::cpf::MAX_BASE;
use crate::domain::ports::BaseSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest base drawn by [`RandomBaseSource`].
pub const MIN_BASE: u32 = 1;

pub struct RandomBaseSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBaseSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomBaseSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded from the current wall-clock time in nanoseconds.
    pub fn from_clock() -> Self {
        let now = chrono::Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros()) as u64;
        tracing::debug!("Seeding RNG from clock: {}", seed);
        Self::seeded(seed)
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                tracing::debug!("Using fixed RNG seed: {}", seed);
                Self::seeded(seed)
            }
            None => Self::from_clock(),
        }
    }
}

impl<R: Rng> BaseSource for RandomBaseSource<R> {
    fn next_base(&mut self) -> u32 {
        self.rng.gen_range(MIN_BASE..=MAX_BASE)
    }
}
