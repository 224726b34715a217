//! Random unit-vector textures drawn from seeded streams.
use std::sync::{Mutex, MutexGuard};

use glam::DVec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::field::Field;
use crate::rng::{seed_at, unit_sphere, DEFAULT_SEED};

/// Uniformly random unit magnetization, one fresh draw per evaluation.
///
/// Successive evaluations advance a single seeded stream, so the value at
/// a point depends on evaluation order, not on the point itself. Two
/// textures built with the same seed and evaluated in the same order yield
/// bit-identical sequences. Draws are serialized internally; when several
/// threads evaluate concurrently the interleaving, and with it
/// reproducibility, is up to the caller. For a coordinate-determined
/// variant see [`HashedRandomTexture`].
#[derive(Debug)]
pub struct RandomTexture {
    stream: Mutex<StdRng>,
}

impl RandomTexture {
    /// Seeds the stream with [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            stream: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn stream(&self) -> MutexGuard<'_, StdRng> {
        match self.stream.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for RandomTexture {
    fn default() -> Self {
        Self::new()
    }
}

impl Field for RandomTexture {
    fn at(&self, _p: DVec3) -> DVec3 {
        unit_sphere(&mut *self.stream())
    }
}

/// Uniformly random unit magnetization determined by coordinate and seed.
///
/// Mixes the seed with the coordinate bits into a per-point stream, making
/// the value a pure function of `(seed, p)`: evaluation order and thread
/// count do not matter, and repeating a coordinate repeats its vector.
#[derive(Debug, Clone, Copy)]
pub struct HashedRandomTexture {
    seed: u64,
}

impl HashedRandomTexture {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Field for HashedRandomTexture {
    fn at(&self, p: DVec3) -> DVec3 {
        let mut rng = StdRng::seed_from_u64(seed_at(self.seed, p));
        unit_sphere(&mut rng)
    }
}
