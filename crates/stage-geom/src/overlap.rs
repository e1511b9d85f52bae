// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! One predicate per unordered pair of volume kinds.
//!
//! Mixed pairs have exactly one implementation; the reversed spelling
//! forwards to it, which keeps `test(a, b) == test(b, a)` by construction.

use crate::{Aabb, Sphere};

/// Box against box, closed intervals on all three axes.
#[must_use]
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}

/// Sphere against sphere; tangent spheres overlap.
#[must_use]
pub fn sphere_sphere(a: &Sphere, b: &Sphere) -> bool {
    let reach = a.radius() + b.radius();
    (b.center() - a.center()).magnitude_squared() <= reach * reach
}

/// Box against sphere: clamp the sphere center into the box and compare the
/// squared distance with the squared radius.
#[must_use]
pub fn aabb_sphere(a: &Aabb, b: &Sphere) -> bool {
    b.contains_point(&a.closest_point(&b.center()))
}

/// Sphere against box; forwards to [`aabb_sphere`].
#[must_use]
pub fn sphere_aabb(a: &Sphere, b: &Aabb) -> bool {
    aabb_sphere(b, a)
}
