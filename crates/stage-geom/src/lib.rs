// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry volumes for Stagecraft.

This crate provides:
- Axis-aligned bounding boxes (`Aabb`).
- Spheres (`Sphere`).
- The pairwise overlap predicates used by colliders (`overlap`).

Design notes:
- Overlap is inclusive: touching faces or tangent spheres count as overlap.
- Every predicate is symmetric; mixed pairs route through one function so
  argument order cannot change the answer.
- Float32 throughout; no broad-phase, only exact discrete tests.
"]
#![forbid(unsafe_code)]

/// Pairwise overlap predicates.
pub mod overlap;
/// Foundational volume types.
pub mod types;

pub use types::aabb::Aabb;
pub use types::sphere::Sphere;
