//! Wrappers that transform or blend existing fields.
//!
//! Each wrapper owns its inner field(s) and captures its parameters at
//! construction, so composites stay plain immutable values. Geometric
//! wrappers act on the *evaluation point* (pulling the inner field through
//! the inverse motion); [`RotateZ`] additionally rotates the returned
//! vector so the magnetization co-rotates with the texture.
use glam::DVec3;

use crate::field::Field;

/// Shifts a field so that its features move by `offset`.
///
/// Evaluation samples the inner field at `p - offset`: the feature the inner
/// field placed at the origin appears at `offset`.
pub struct Translate<F: Field> {
    inner: F,
    offset: DVec3,
}

impl<F: Field> Translate<F> {
    pub fn new(inner: F, offset: DVec3) -> Self {
        Self { inner, offset }
    }
}

impl<F: Field> Field for Translate<F> {
    #[inline]
    fn at(&self, p: DVec3) -> DVec3 {
        self.inner.at(p - self.offset)
    }
}

/// Stretches a field by per-axis factors.
///
/// Evaluation samples the inner field at the component-wise quotient
/// `p / factors`, so a factor of 2 doubles the apparent extent of every
/// feature along that axis. A zero factor is not guarded: it sends
/// non-finite coordinates into the inner field.
pub struct Scale<F: Field> {
    inner: F,
    factors: DVec3,
}

impl<F: Field> Scale<F> {
    pub fn new(inner: F, factors: DVec3) -> Self {
        Self { inner, factors }
    }
}

impl<F: Field> Field for Scale<F> {
    #[inline]
    fn at(&self, p: DVec3) -> DVec3 {
        self.inner.at(p / self.factors)
    }
}

/// Rigidly rotates a field about the z axis.
///
/// The evaluation point is rotated by `-theta` before sampling the inner
/// field, and the in-plane components of the result are rotated by `+theta`,
/// so both the texture and its magnetization turn together. `theta` is in
/// radians, counterclockwise viewed from +z; its sine and cosine are
/// captured at construction.
pub struct RotateZ<F: Field> {
    inner: F,
    cos: f64,
    sin: f64,
}

impl<F: Field> RotateZ<F> {
    pub fn new(inner: F, theta: f64) -> Self {
        Self {
            inner,
            cos: theta.cos(),
            sin: theta.sin(),
        }
    }
}

impl<F: Field> Field for RotateZ<F> {
    #[inline]
    fn at(&self, p: DVec3) -> DVec3 {
        let x = p.x * self.cos + p.y * self.sin;
        let y = -p.x * self.sin + p.y * self.cos;
        let m = self.inner.at(DVec3::new(x, y, p.z));
        DVec3::new(
            m.x * self.cos - m.y * self.sin,
            m.x * self.sin + m.y * self.cos,
            m.z,
        )
    }
}

/// Component-wise weighted sum of two fields.
///
/// Evaluates to `base + weight * other`. The sum is returned as-is, without
/// renormalization; callers layering unit-norm textures decide themselves
/// whether and when to normalize.
pub struct Superpose<F: Field, G: Field> {
    base: F,
    weight: f64,
    other: G,
}

impl<F: Field, G: Field> Superpose<F, G> {
    pub fn new(base: F, weight: f64, other: G) -> Self {
        Self { base, weight, other }
    }
}

impl<F: Field, G: Field> Field for Superpose<F, G> {
    #[inline]
    fn at(&self, p: DVec3) -> DVec3 {
        self.base.at(p) + self.weight * self.other.at(p)
    }
}
