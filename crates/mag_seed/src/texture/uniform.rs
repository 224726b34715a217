//! Spatially constant magnetization.
use glam::DVec3;

use crate::field::Field;

/// The same magnetization vector at every point.
///
/// The vector is returned exactly as given, without normalization; a
/// saturated state along x is `Uniform::new(DVec3::X)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    m: DVec3,
}

impl Uniform {
    pub fn new(m: DVec3) -> Self {
        Self { m }
    }
}

impl Field for Uniform {
    #[inline]
    fn at(&self, _p: DVec3) -> DVec3 {
        self.m
    }
}
