// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use stage_math::Vec3;

/// Sphere in world coordinates.
///
/// The radius is expected to be non-negative; a zero radius is a point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Creates a sphere.
    ///
    /// # Panics
    /// Panics if `radius` is negative.
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        assert!(radius >= 0.0, "invalid sphere: negative radius {radius}");
        Self { center, radius }
    }

    /// Sphere center.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Sphere radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns `true` if `point` lies inside or on the surface.
    #[must_use]
    pub fn contains_point(&self, point: &Vec3) -> bool {
        (*point - self.center).magnitude_squared() <= self.radius * self.radius
    }
}
