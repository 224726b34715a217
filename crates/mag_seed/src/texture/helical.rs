//! Helical (spin spiral) texture.
use std::f64::consts::TAU;

use glam::DVec3;
use tracing::warn;

use crate::field::Field;

/// A spin helix propagating along an in-plane q vector.
///
/// The magnetization rotates through a full turn over one `period` along
/// the propagation direction and is unit-norm everywhere. The q vector is
/// normalized at construction; only its direction matters, and only the x
/// projection of that direction enters the rotation angle, so flipping the
/// sign of `qy` yields the same texture. A zero-norm q falls back to the
/// +x axis. A zero period is a caller error and is not guarded.
#[derive(Debug, Clone, Copy)]
pub struct Helical {
    period: f64,
    cos_t: f64,
    sin_t: f64,
}

impl Helical {
    pub fn new(period: f64, qx: f64, qy: f64) -> Self {
        let norm = (qx * qx + qy * qy).sqrt();
        let cos_t = if norm > 0.0 {
            (qx / norm).clamp(-1.0, 1.0)
        } else {
            warn!("Helical q vector ({}, {}) has zero norm; using the +x axis.", qx, qy);
            1.0
        };
        Self {
            period,
            cos_t,
            sin_t: cos_t.acos().sin(),
        }
    }
}

impl Field for Helical {
    fn at(&self, p: DVec3) -> DVec3 {
        let u = self.cos_t * p.x + self.sin_t * p.y;
        let phase = TAU * u / self.period;
        let in_plane = phase.cos();
        DVec3::new(self.sin_t * in_plane, self.cos_t * in_plane, phase.sin())
    }
}
