//! Néel and Bloch skyrmion profiles.
//!
//! Both share the same axial profile: `mz` runs from `polarization` at the
//! center to `-polarization` far away, crossing zero on a ring of radius
//! `w·sqrt(ln 2)` where `w` is eight cell widths. The in-plane component is
//! scaled by `1 - |mz|`, so the total norm dips below one inside the
//! blended ring and recovers to one at the center and in the far field.
use glam::DVec3;

use crate::field::Field;
use crate::mesh::MeshGeometry;
use crate::vec3::nan_guard;

/// A Néel (hedgehog) skyrmion: in-plane magnetization points radially.
///
/// `charge` (+1/-1) sets whether the in-plane component points outward or
/// inward, `polarization` (+1/-1) the core direction. On the core axis the
/// radial terms degenerate to 0/0 and the value falls back to
/// `(0, 0, polarization)`.
#[derive(Debug, Clone, Copy)]
pub struct NeelSkyrmion {
    charge: f64,
    polarization: f64,
    w2: f64,
}

impl NeelSkyrmion {
    pub fn new(mesh: &MeshGeometry, charge: i32, polarization: i32) -> Self {
        let w = 8.0 * mesh.cell_size.x;
        Self {
            charge: f64::from(charge),
            polarization: f64::from(polarization),
            w2: w * w,
        }
    }
}

impl Field for NeelSkyrmion {
    fn at(&self, p: DVec3) -> DVec3 {
        let r2 = p.x * p.x + p.y * p.y;
        let r = r2.sqrt();
        let mz = 2.0 * self.polarization * ((-r2 / self.w2).exp() - 0.5);
        let m = DVec3::new(
            (p.x * self.charge / r) * (1.0 - mz.abs()),
            (p.y * self.charge / r) * (1.0 - mz.abs()),
            mz,
        );
        nan_guard(m, DVec3::new(0.0, 0.0, self.polarization))
    }
}

/// A Bloch (spiral) skyrmion: in-plane magnetization curls azimuthally.
///
/// Same axial profile and fallback as [`NeelSkyrmion`]; the in-plane
/// component follows `(-y, x)` instead of `(x, y)`.
#[derive(Debug, Clone, Copy)]
pub struct BlochSkyrmion {
    charge: f64,
    polarization: f64,
    w2: f64,
}

impl BlochSkyrmion {
    pub fn new(mesh: &MeshGeometry, charge: i32, polarization: i32) -> Self {
        let w = 8.0 * mesh.cell_size.x;
        Self {
            charge: f64::from(charge),
            polarization: f64::from(polarization),
            w2: w * w,
        }
    }
}

impl Field for BlochSkyrmion {
    fn at(&self, p: DVec3) -> DVec3 {
        let r2 = p.x * p.x + p.y * p.y;
        let r = r2.sqrt();
        let mz = 2.0 * self.polarization * ((-r2 / self.w2).exp() - 0.5);
        let m = DVec3::new(
            (-p.y * self.charge / r) * (1.0 - mz.abs()),
            (p.x * self.charge / r) * (1.0 - mz.abs()),
            mz,
        );
        nan_guard(m, DVec3::new(0.0, 0.0, self.polarization))
    }
}
