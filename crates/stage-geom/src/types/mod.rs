// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! World-space volumes built from an owner position plus shape extents.
//!
//! Overlap semantics are inclusive on faces so that contact at an exact
//! boundary is reported as a collision.

#[doc = "Axis-aligned bounding boxes (world space)."]
pub mod aabb;
#[doc = "Spheres (world space)."]
pub mod sphere;
