//! Canonical magnetization textures.
//!
//! Each texture is a concrete [`Field`](crate::field::Field) with its
//! pattern parameters captured at construction. Textures that depend on
//! grid spacing (vortex and skyrmion core widths, domain wall width, the
//! vortex wall strip height) take a [`MeshGeometry`](crate::mesh::MeshGeometry)
//! reference in their constructor and copy out the lengths they need; they
//! never hold on to the mesh.
//!
//! - [`Uniform`]: one constant vector everywhere.
//! - [`Vortex`] / [`AntiVortex`]: in-plane winding with a polarized core.
//! - [`NeelSkyrmion`] / [`BlochSkyrmion`]: radial and azimuthal skyrmion
//!   profiles.
//! - [`TwoDomain`]: two domains joined by a Gaussian-smoothed wall.
//! - [`VortexWall`]: a vortex strip between two axial domains.
//! - [`Helical`]: a spin helix along an in-plane q vector.
//! - [`RandomTexture`] / [`HashedRandomTexture`]: seeded random unit
//!   vectors, stream-ordered or coordinate-determined.
pub mod domain;
pub mod helical;
pub mod random;
pub mod skyrmion;
pub mod uniform;
pub mod vortex;

pub use domain::{TwoDomain, VortexWall};
pub use helical::Helical;
pub use random::{HashedRandomTexture, RandomTexture};
pub use skyrmion::{BlochSkyrmion, NeelSkyrmion};
pub use uniform::Uniform;
pub use vortex::{AntiVortex, Vortex};
