#![forbid(unsafe_code)]
//! mag_seed: Composable magnetization textures for seeding micromagnetic simulation grids.
//!
//! Modules:
//! - texture: canonical textures (uniform, vortex, skyrmion, domain walls, helix, random)
//! - field: the `Field` trait and the translate/scale/rotate/superpose combinators
//! - mesh, sample: grid geometry and per-cell evaluation into sample buffers
//! - store: persistence sinks (local filesystem, in-memory) and OVF 2.0 writers
//! - rng: seeded unit-sphere draws behind the random textures
//!
//! For examples and docs, see README and docs.rs.
pub mod error;
pub mod field;
pub mod mesh;
pub mod rng;
pub mod sample;
pub mod store;
pub mod texture;
pub mod vec3;

/// Convenient re-exports for common types. Import with `use mag_seed::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::field::{
        BoxedField, Field, FieldExt, FnField, RotateZ, Scale, Superpose, Translate,
    };
    pub use crate::mesh::MeshGeometry;
    pub use crate::rng::{seed_at, unit_sphere, DEFAULT_SEED};
    pub use crate::sample::{sample, sample_into, SampleBuffer};
    pub use crate::store::{
        save_ovf2_binary4, save_ovf2_text, LocalStore, MemStore, OvfMeta, StateStore,
    };
    pub use crate::texture::{
        AntiVortex, BlochSkyrmion, HashedRandomTexture, Helical, NeelSkyrmion, RandomTexture,
        TwoDomain, Uniform, Vortex, VortexWall,
    };
}
