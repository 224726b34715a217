//! Small vector helpers shared by the texture generators.
//!
//! Magnetization values are plain [`glam::DVec3`]s; this module only adds the
//! pieces glam does not ship: the NaN fallback used at singular texture
//! points and a unit-norm check for near-unit magnetization.
use glam::DVec3;

/// Substitute `fallback` when any component of `v` is not a number.
///
/// Radial texture formulas (vortex and skyrmion families) divide by the
/// in-plane radius, which degenerates to `0/0` on the core axis. Routing
/// the result through this guard collapses the singular point to the core
/// vector each generator documents.
#[inline]
pub fn nan_guard(v: DVec3, fallback: DVec3) -> DVec3 {
    if v.is_nan() {
        fallback
    } else {
        v
    }
}

/// True when `|v|` is within `tol` of unit length.
#[inline]
pub fn is_unit(v: DVec3, tol: f64) -> bool {
    (v.length() - 1.0).abs() <= tol
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_guard_passes_finite_vectors_through() {
        let v = DVec3::new(0.3, -0.4, 0.5);
        assert_eq!(nan_guard(v, DVec3::Z), v);
    }

    #[test]
    fn nan_guard_catches_every_lane() {
        let fallback = DVec3::new(0.0, 0.0, -1.0);
        for lanes in [
            DVec3::new(f64::NAN, 0.0, 0.0),
            DVec3::new(0.0, f64::NAN, 0.0),
            DVec3::new(0.0, 0.0, f64::NAN),
        ] {
            assert_eq!(nan_guard(lanes, fallback), fallback);
        }
    }

    #[test]
    fn nan_guard_keeps_infinities() {
        // Only NaN is recovered; infinities pass through.
        let v = DVec3::new(f64::INFINITY, 0.0, 0.0);
        assert_eq!(nan_guard(v, DVec3::Z), v);
    }

    #[test]
    fn is_unit_respects_tolerance() {
        assert!(is_unit(DVec3::new(1.0, 0.0, 0.0), 0.0));
        assert!(is_unit(DVec3::new(0.6, 0.8, 0.0), 1e-12));
        assert!(!is_unit(DVec3::new(0.6, 0.8, 0.1), 1e-3));
    }
}
