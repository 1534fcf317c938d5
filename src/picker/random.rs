use anyhow::Result;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::sync::Mutex;

use super::Picker;

/// Uniform random selection, with replacement across calls.
pub enum RandomPicker {
    /// Fresh draws from the thread-local RNG.
    Thread,
    /// A seeded RNG, for reproducible sessions.
    Seeded(Mutex<StdRng>),
}

impl RandomPicker {
    pub fn new() -> Self {
        Self::Thread
    }

    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker for RandomPicker {
    fn pick(&self, len: usize) -> Result<usize> {
        if len == 0 {
            anyhow::bail!("cannot pick from an empty list");
        }
        match self {
            Self::Thread => Ok(rand::rng().random_range(0..len)),
            Self::Seeded(rng) => {
                let mut rng = rng
                    .lock()
                    .map_err(|_| anyhow::anyhow!("seeded rng lock poisoned"))?;
                Ok(rng.random_range(0..len))
            }
        }
    }
}
