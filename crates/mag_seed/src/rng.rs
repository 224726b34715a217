//! Deterministic random direction source for the random textures.
//!
//! Reproducibility contract: a fixed seed plus a fixed *draw order* yields a
//! bit-identical stream. Every unit-sphere draw consumes exactly two uniform
//! values in a fixed order (azimuth first, then the z coordinate), so the
//! n-th vector of a stream is the same on every run regardless of which
//! coordinates it ends up assigned to.
use std::f64::consts::TAU;

use glam::DVec3;
use rand::Rng;

/// Seed used when the caller does not supply one.
///
/// Zero is a valid, deterministic seed; "seed not provided" and "seed
/// explicitly zero" produce the same stream by contract.
pub const DEFAULT_SEED: u64 = 0;

/// Map the top 53 bits of the next `u64` draw to `[0, 1)`.
#[inline]
pub(crate) fn rand01(rng: &mut dyn Rng) -> f64 {
    ((rng.next_u64() >> 11) as f64) * (1.0 / (1u64 << 53) as f64)
}

/// Draw a uniformly distributed point on the unit sphere.
///
/// `theta ~ U(0, 2pi)`, `z ~ U(-1, 1)`, in-plane radius `sqrt(1 - z^2)`.
/// The mapping is total: `z = -1` lands exactly on the pole, never NaN.
pub fn unit_sphere(rng: &mut dyn Rng) -> DVec3 {
    let theta = TAU * rand01(rng);
    let z = 2.0 * (rand01(rng) - 0.5);
    let b = (1.0 - z * z).sqrt();
    DVec3::new(b * theta.cos(), b * theta.sin(), z)
}

/// Derive a deterministic per-coordinate seed from a base seed.
///
/// Mixes the raw bit patterns of the coordinates into the seed and runs a
/// splitmix-style finalizer, so neighbouring cells decorrelate. Used by the
/// hashed random texture to draw independently at every coordinate without a
/// shared stream.
pub fn seed_at(base_seed: u64, p: DVec3) -> u64 {
    let mixed = base_seed
        ^ p.x.to_bits().wrapping_mul(0x9E3779B97F4A7C15)
        ^ p.y.to_bits().wrapping_mul(0xBF58476D1CE4E5B9)
        ^ p.z.to_bits().wrapping_mul(0x94D049BB133111EB);
    mix_u64(mixed)
}

#[inline]
fn mix_u64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}
