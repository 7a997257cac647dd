//! Random target sampling on the surface of a sphere.

use std::f32::consts::PI;

use nalgebra::Point3;
use rand::{Rng, RngCore};

/// Source of uniform draws in `[0, 1)`.
///
/// Every [`RngCore`] is a source, so seeded generators work directly. Tests
/// can implement this on a fixed sequence to script the sampled targets.
pub trait UniformSource {
    /// Returns the next draw in `[0, 1)`.
    fn next_unit(&mut self) -> f32;
}

impl<R: RngCore> UniformSource for R {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Maps two uniform draws to a point on the sphere of `radius` around the origin.
///
/// The result is uniform over the sphere's surface (not the solid ball):
/// `theta = 2πu` is the azimuth and `phi = acos(2v - 1)` the polar angle.
pub fn sphere_point(radius: f32, u: f32, v: f32) -> Point3<f32> {
    let theta = 2.0 * PI * u;
    let phi = (2.0 * v - 1.0).acos();
    Point3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}
