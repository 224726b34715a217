//! Domain and domain-wall textures.
use glam::DVec3;

use crate::field::Field;
use crate::mesh::MeshGeometry;

use super::Vortex;

/// Two domains split at x = 0 and joined by a Gaussian-smoothed wall.
///
/// Points with x < 0 take the left domain magnetization, the rest the
/// right one; the wall magnetization is blended in with the Gaussian
/// weight `exp(-(x/ww)²)`, `ww` being two cell widths. At x = 0 the value
/// is exactly the wall vector. Head-to-head domains with a transverse wall
/// are `TwoDomain::new(&mesh, DVec3::X, DVec3::Y, -DVec3::X)`.
#[derive(Debug, Clone, Copy)]
pub struct TwoDomain {
    left: DVec3,
    wall: DVec3,
    right: DVec3,
    wall_width: f64,
}

impl TwoDomain {
    pub fn new(mesh: &MeshGeometry, left: DVec3, wall: DVec3, right: DVec3) -> Self {
        Self {
            left,
            wall,
            right,
            wall_width: 2.0 * mesh.cell_size.x,
        }
    }
}

impl Field for TwoDomain {
    fn at(&self, p: DVec3) -> DVec3 {
        let domain = if p.x < 0.0 { self.left } else { self.right };
        let s = p.x / self.wall_width;
        let g = (-s * s).exp();
        (1.0 - g) * domain + g * self.wall
    }
}

/// A vortex domain wall between two axial domains.
///
/// Within a strip as wide as the world height the texture is a plain
/// [`Vortex`]; beyond `|x| = world_y / 2` it saturates to `(m_left, 0, 0)`
/// and `(m_right, 0, 0)`. A head-to-head wall is
/// `VortexWall::new(&mesh, 1.0, -1.0, 1, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct VortexWall {
    m_left: f64,
    m_right: f64,
    half_height: f64,
    core: Vortex,
}

impl VortexWall {
    pub fn new(
        mesh: &MeshGeometry,
        m_left: f64,
        m_right: f64,
        circulation: i32,
        polarization: i32,
    ) -> Self {
        Self {
            m_left,
            m_right,
            half_height: mesh.world_size().y / 2.0,
            core: Vortex::new(mesh, circulation, polarization),
        }
    }
}

impl Field for VortexWall {
    fn at(&self, p: DVec3) -> DVec3 {
        if p.x < -self.half_height {
            return DVec3::new(self.m_left, 0.0, 0.0);
        }
        if p.x > self.half_height {
            return DVec3::new(self.m_right, 0.0, 0.0);
        }
        self.core.at(p)
    }
}
