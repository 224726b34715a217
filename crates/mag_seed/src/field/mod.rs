//! The field abstraction: spatial maps from coordinate to magnetization.
//!
//! A [`Field`] takes a 3-D position and returns a 3-component magnetization
//! vector. Fields are plain immutable values: they own every parameter they
//! need (captured at construction, including mesh-derived lengths) and hold
//! no reference to mutable external state at evaluation time. Composing
//! fields with the [`combine`] wrappers produces new independent values.
//!
//! All fields are `Send + Sync` and safe to evaluate concurrently, with one
//! documented exception: stream-seeded random textures serialize their draws
//! internally but leave cross-thread draw *ordering* (and therefore
//! reproducibility) to the caller. See [`crate::texture::RandomTexture`].
use std::sync::Arc;

use glam::DVec3;

pub mod combine;

pub use combine::{RotateZ, Scale, Superpose, Translate};

/// A spatial magnetization field.
pub trait Field: Send + Sync {
    /// Evaluates the field at position `p`, in meters, centered coordinates.
    fn at(&self, p: DVec3) -> DVec3;

    /// Engine-facing entry point: evaluates at raw coordinates.
    ///
    /// Interop adapter for callers that do not use `glam`; the simulation
    /// engine invokes this once per grid cell. Same contract as
    /// [`Field::at`].
    fn evaluate(&self, x: f64, y: f64, z: f64) -> mint::Vector3<f64> {
        self.at(DVec3::new(x, y, z)).into()
    }
}

/// Owned, type-erased field for heterogeneous composition and storage.
pub type BoxedField = Box<dyn Field>;

impl<F: Field + ?Sized> Field for &F {
    #[inline]
    fn at(&self, p: DVec3) -> DVec3 {
        (**self).at(p)
    }
}

impl<F: Field + ?Sized> Field for Box<F> {
    #[inline]
    fn at(&self, p: DVec3) -> DVec3 {
        (**self).at(p)
    }
}

impl<F: Field + ?Sized> Field for Arc<F> {
    #[inline]
    fn at(&self, p: DVec3) -> DVec3 {
        (**self).at(p)
    }
}

/// A field backed by a user-provided closure.
pub struct FnField<F>
where
    F: Fn(DVec3) -> DVec3 + Send + Sync,
{
    f: F,
}

impl<F> FnField<F>
where
    F: Fn(DVec3) -> DVec3 + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Field for FnField<F>
where
    F: Fn(DVec3) -> DVec3 + Send + Sync,
{
    #[inline]
    fn at(&self, p: DVec3) -> DVec3 {
        (self.f)(p)
    }
}

/// Combinator adapters available on every sized field.
///
/// Each method consumes `self` by value and returns a new field wrapping it;
/// the wrappers nest in any order. See [`combine`] for the semantics of each
/// operation.
pub trait FieldExt: Field + Sized {
    /// Shifts the field so its features move by `offset`.
    fn translate(self, offset: DVec3) -> Translate<Self> {
        Translate::new(self, offset)
    }

    /// Stretches the field by per-axis `factors`.
    fn scale(self, factors: DVec3) -> Scale<Self> {
        Scale::new(self, factors)
    }

    /// Rigidly rotates the field by `theta` radians about the z axis.
    fn rotate_z(self, theta: f64) -> RotateZ<Self> {
        RotateZ::new(self, theta)
    }

    /// Adds `weight * other` on top of this field, component-wise.
    fn superpose<G: Field>(self, weight: f64, other: G) -> Superpose<Self, G> {
        Superpose::new(self, weight, other)
    }

    /// Erases the concrete type for heterogeneous storage.
    fn boxed(self) -> BoxedField
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<F: Field> FieldExt for F {}
