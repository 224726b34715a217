//! Vortex and antivortex textures.
use glam::DVec3;

use crate::field::Field;
use crate::mesh::MeshGeometry;
use crate::vec3::nan_guard;

/// A magnetic vortex: in-plane circulation around z with a polarized core.
///
/// `circulation` sets the winding sense (+1 counterclockwise seen from +z,
/// -1 clockwise) and `polarization` the core direction (+1/-1 along z). The
/// core is smoothed over a couple of cell widths so the texture relaxes
/// cleanly. On the core axis the in-plane terms degenerate to 0/0 and the
/// value falls back to `(0, 0, polarization)`.
#[derive(Debug, Clone, Copy)]
pub struct Vortex {
    circulation: f64,
    polarization: f64,
    core_diam2: f64,
}

impl Vortex {
    pub fn new(mesh: &MeshGeometry, circulation: i32, polarization: i32) -> Self {
        let cx = mesh.cell_size.x;
        Self {
            circulation: f64::from(circulation),
            polarization: f64::from(polarization),
            core_diam2: 2.0 * cx * cx,
        }
    }
}

impl Field for Vortex {
    fn at(&self, p: DVec3) -> DVec3 {
        let r2 = p.x * p.x + p.y * p.y;
        let r = r2.sqrt();
        let m = DVec3::new(
            -p.y * self.circulation / r,
            p.x * self.circulation / r,
            1.5 * self.polarization * (-r2 / self.core_diam2).exp(),
        );
        nan_guard(m, DVec3::new(0.0, 0.0, self.polarization))
    }
}

/// An antivortex: the winding number of [`Vortex`] with opposite sign.
///
/// In-plane components follow `(-x, y)` instead of the vortex's `(-y, x)`;
/// core profile and axis fallback are identical.
#[derive(Debug, Clone, Copy)]
pub struct AntiVortex {
    circulation: f64,
    polarization: f64,
    core_diam2: f64,
}

impl AntiVortex {
    pub fn new(mesh: &MeshGeometry, circulation: i32, polarization: i32) -> Self {
        let cx = mesh.cell_size.x;
        Self {
            circulation: f64::from(circulation),
            polarization: f64::from(polarization),
            core_diam2: 2.0 * cx * cx,
        }
    }
}

impl Field for AntiVortex {
    fn at(&self, p: DVec3) -> DVec3 {
        let r2 = p.x * p.x + p.y * p.y;
        let r = r2.sqrt();
        let m = DVec3::new(
            -p.x * self.circulation / r,
            p.y * self.circulation / r,
            1.5 * self.polarization * (-r2 / self.core_diam2).exp(),
        );
        nan_guard(m, DVec3::new(0.0, 0.0, self.polarization))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::is_unit;

    fn mesh() -> MeshGeometry {
        MeshGeometry::new([64, 64, 1], DVec3::new(4e-9, 4e-9, 3e-9))
    }

    #[test]
    fn core_axis_falls_back_to_polarization() {
        for pol in [1, -1] {
            let v = Vortex::new(&mesh(), 1, pol);
            let av = AntiVortex::new(&mesh(), 1, pol);
            for z in [0.0, -5e-9, 12e-9] {
                let expected = DVec3::new(0.0, 0.0, f64::from(pol));
                assert_eq!(v.at(DVec3::new(0.0, 0.0, z)), expected);
                assert_eq!(av.at(DVec3::new(0.0, 0.0, z)), expected);
            }
        }
    }

    #[test]
    fn circulation_sets_winding_sense() {
        let m = mesh();
        let ccw = Vortex::new(&m, 1, 1);
        let cw = Vortex::new(&m, -1, 1);
        let p = DVec3::new(20e-9, 0.0, 0.0);
        assert!(ccw.at(p).y > 0.9);
        assert!(cw.at(p).y < -0.9);
    }

    #[test]
    fn far_field_is_unit_and_in_plane() {
        let m = mesh();
        let v = Vortex::new(&m, 1, 1);
        let cx = m.cell_size.x;
        for (x, y) in [(8.0, 0.0), (0.0, -9.0), (6.5, 6.5), (-10.0, 3.0)] {
            let mv = v.at(DVec3::new(x * cx, y * cx, 0.0));
            assert!(is_unit(mv, 1e-9), "{mv:?} at ({x}, {y}) cells");
            assert!(mv.z.abs() < 1e-9);
        }
    }

    #[test]
    fn core_peaks_at_center_and_decays() {
        let v = Vortex::new(&mesh(), 1, 1);
        let near = v.at(DVec3::new(1e-10, 0.0, 0.0)).z;
        let far = v.at(DVec3::new(40e-9, 0.0, 0.0)).z;
        assert!(near > 1.49 && near < 1.5);
        assert!(far.abs() < 1e-9);
    }

    #[test]
    fn antivortex_mirrors_the_in_plane_components() {
        let m = mesh();
        let v = Vortex::new(&m, 1, 1);
        let av = AntiVortex::new(&m, 1, 1);
        let p = DVec3::new(24e-9, 0.0, 0.0);
        let (mv, mav) = (v.at(p), av.at(p));
        assert!((mav.x + 1.0).abs() < 1e-12);
        assert!(mav.y.abs() < 1e-12);
        assert_eq!(mv.z, mav.z);
        let q = DVec3::new(0.0, 24e-9, 0.0);
        assert!((av.at(q).y - 1.0).abs() < 1e-12);
    }
}
