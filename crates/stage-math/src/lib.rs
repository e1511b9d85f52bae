// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! stage-math: value-type linear algebra for the Stagecraft scene loop.
//!
//! Covers the small surface the simulation core leans on: a 3D vector with
//! the usual operators, a 3×3 matrix, and a few scalar helpers. Everything is
//! `Copy`, stateless, and `f32` throughout.
#![forbid(unsafe_code)]

use std::f32::consts::TAU;

mod mat3;
mod vec3;

pub use mat3::Mat3;
pub use vec3::Vec3;

/// Tolerance used by tests and callers comparing accumulated float results.
///
/// The library itself never snaps values to zero with it; `Vec3::normalize`
/// only special-cases an exactly-zero magnitude.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

/// Returns `true` when `a` and `b` differ by no more than [`EPSILON`].
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON
}
