//! Mesh geometry consumed by texture constructors and the grid sampler.
//!
//! Textures whose length scale tracks grid resolution (vortex core width,
//! domain-wall width) or domain size (vortex wall extent) read the geometry
//! **once, at construction**; the captured lengths fix the texture for the
//! lifetime of the field value and are never re-queried during evaluation.
//!
//! Coordinates are centered: the grid center sits at the origin and cell
//! centers lie at half-steps, so radial textures peak at the grid center by
//! default and can be moved with the translate combinator.
use glam::DVec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Uniform rectangular mesh: cell counts per axis plus cell edge lengths.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshGeometry {
    /// Number of cells along x, y, z.
    pub cells: [usize; 3],
    /// Cell edge lengths in meters.
    pub cell_size: DVec3,
}

impl MeshGeometry {
    /// Creates a new mesh geometry. Call [`MeshGeometry::validate`] before
    /// sampling; texture constructors assume a validated mesh.
    pub fn new(cells: [usize; 3], cell_size: DVec3) -> Self {
        Self { cells, cell_size }
    }

    /// Validates the geometry, returning an error if any axis is degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.cells.iter().any(|&n| n == 0) {
            return Err(Error::InvalidConfig(format!(
                "cell counts must be >= 1 on every axis, got {:?}",
                self.cells
            )));
        }
        let d = self.cell_size;
        if !(d.x > 0.0 && d.y > 0.0 && d.z > 0.0) || !d.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "cell size must be finite and > 0 on every axis, got {d}"
            )));
        }
        Ok(())
    }

    /// Physical extent of the mesh: counts times cell size.
    pub fn world_size(&self) -> DVec3 {
        DVec3::new(
            self.cells[0] as f64 * self.cell_size.x,
            self.cells[1] as f64 * self.cell_size.y,
            self.cells[2] as f64 * self.cell_size.z,
        )
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells[0] * self.cells[1] * self.cells[2]
    }

    /// Center of cell `(i, j, k)` in centered coordinates.
    pub fn cell_center(&self, i: usize, j: usize, k: usize) -> DVec3 {
        debug_assert!(
            i < self.cells[0] && j < self.cells[1] && k < self.cells[2],
            "cell index out of range"
        );
        let half = self.world_size() * 0.5;
        DVec3::new(
            (i as f64 + 0.5) * self.cell_size.x - half.x,
            (j as f64 + 0.5) * self.cell_size.y - half.y,
            (k as f64 + 0.5) * self.cell_size.z - half.z,
        )
    }

    /// Iterates cell centers with x fastest, then y, then z.
    ///
    /// This order is the sampling order and therefore the reproducibility
    /// contract for order-dependent textures.
    pub fn cell_centers(&self) -> impl Iterator<Item = DVec3> {
        let mesh = *self;
        let [nx, ny, nz] = mesh.cells;
        (0..nz).flat_map(move |k| {
            (0..ny).flat_map(move |j| (0..nx).map(move |i| mesh.cell_center(i, j, k)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film() -> MeshGeometry {
        MeshGeometry::new([4, 2, 1], DVec3::new(5e-9, 5e-9, 3e-9))
    }

    #[test]
    fn validate_accepts_positive_geometry() {
        assert!(film().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_counts_and_sizes() {
        let no_cells = MeshGeometry::new([4, 0, 1], DVec3::splat(1e-9));
        assert!(matches!(no_cells.validate(), Err(Error::InvalidConfig(_))));

        let flat = MeshGeometry::new([4, 4, 1], DVec3::new(1e-9, 0.0, 1e-9));
        assert!(matches!(flat.validate(), Err(Error::InvalidConfig(_))));

        let inf = MeshGeometry::new([4, 4, 1], DVec3::new(f64::INFINITY, 1e-9, 1e-9));
        assert!(matches!(inf.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn world_size_scales_counts_by_cell_size() {
        let mesh = film();
        assert_eq!(mesh.world_size(), DVec3::new(20e-9, 10e-9, 3e-9));
        assert_eq!(mesh.cell_count(), 8);
    }

    #[test]
    fn cell_centers_are_symmetric_about_the_origin() {
        let mesh = film();
        let [nx, ny, nz] = mesh.cells;
        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    let a = mesh.cell_center(i, j, k);
                    let b = mesh.cell_center(nx - 1 - i, ny - 1 - j, nz - 1 - k);
                    assert!((a + b).length() < 1e-22, "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn single_cell_axis_centers_on_the_origin() {
        let mesh = film();
        // nz = 1, so every center sits at z = 0.
        assert_eq!(mesh.cell_center(0, 0, 0).z, 0.0);
    }

    #[test]
    fn cell_centers_iterate_x_fastest() {
        let mesh = MeshGeometry::new([2, 2, 1], DVec3::splat(1.0));
        let centers: Vec<DVec3> = mesh.cell_centers().collect();
        assert_eq!(centers.len(), 4);
        assert_eq!(centers[0], mesh.cell_center(0, 0, 0));
        assert_eq!(centers[1], mesh.cell_center(1, 0, 0));
        assert_eq!(centers[2], mesh.cell_center(0, 1, 0));
        assert_eq!(centers[3], mesh.cell_center(1, 1, 0));
    }
}
