// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Collider shapes and the type-dispatched overlap test.

use stage_geom::{overlap, Aabb, Sphere};
use stage_math::Vec3;
use thiserror::Error;

use crate::actor::{ActorId, Body};

/// Errors raised when building a collider shape.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ShapeError {
    /// An extent was negative.
    #[error("{axis} extent must be non-negative, got {value}")]
    Negative {
        /// Which extent was rejected.
        axis: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// An extent was NaN or infinite.
    #[error("{axis} extent must be finite, got {value}")]
    NonFinite {
        /// Which extent was rejected.
        axis: &'static str,
        /// The rejected value.
        value: f32,
    },
}

/// Variant tag of a collider.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColliderKind {
    /// Axis-aligned box.
    Aabb,
    /// Sphere (a circle in planar scenes).
    Sphere,
}

/// Shape extents, centered on the owning actor's position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ColliderShape {
    /// Box spanning `position ± (width, height, length) / 2`.
    Aabb {
        /// Extent along X.
        width: f32,
        /// Extent along Y.
        height: f32,
        /// Extent along Z.
        length: f32,
    },
    /// Sphere of `radius` around the position.
    Sphere {
        /// Radius.
        radius: f32,
    },
}

fn check_extent(axis: &'static str, value: f32) -> Result<f32, ShapeError> {
    if !value.is_finite() {
        return Err(ShapeError::NonFinite { axis, value });
    }
    if value < 0.0 {
        return Err(ShapeError::Negative { axis, value });
    }
    Ok(value)
}

impl ColliderShape {
    /// Box shape with the given extents.
    pub fn aabb(width: f32, height: f32, length: f32) -> Result<Self, ShapeError> {
        Ok(Self::Aabb {
            width: check_extent("width", width)?,
            height: check_extent("height", height)?,
            length: check_extent("length", length)?,
        })
    }

    /// Box with equal extents on every axis.
    pub fn cube(size: f32) -> Result<Self, ShapeError> {
        Self::aabb(size, size, size)
    }

    /// Sphere shape.
    pub fn sphere(radius: f32) -> Result<Self, ShapeError> {
        Ok(Self::Sphere {
            radius: check_extent("radius", radius)?,
        })
    }

    /// Re-checks extents; used when a shape was built from its fields directly.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match *self {
            Self::Aabb { width, height, length } => Self::aabb(width, height, length).map(drop),
            Self::Sphere { radius } => Self::sphere(radius).map(drop),
        }
    }

    /// Variant tag.
    pub fn kind(&self) -> ColliderKind {
        match self {
            Self::Aabb { .. } => ColliderKind::Aabb,
            Self::Sphere { .. } => ColliderKind::Sphere,
        }
    }
}

/// World-space volume of a collider at a particular owner position.
#[derive(Debug, Copy, Clone)]
enum Volume {
    Box(Aabb),
    Ball(Sphere),
}

impl Volume {
    fn at(shape: &ColliderShape, position: Vec3) -> Self {
        match *shape {
            ColliderShape::Aabb { width, height, length } => {
                Self::Box(Aabb::from_center_size(position, Vec3::new(width, height, length)))
            }
            ColliderShape::Sphere { radius } => Self::Ball(Sphere::new(position, radius)),
        }
    }

    fn overlaps(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Box(a), Self::Box(b)) => overlap::aabb_aabb(a, b),
            (Self::Box(a), Self::Ball(b)) => overlap::aabb_sphere(a, b),
            (Self::Ball(a), Self::Box(b)) => overlap::sphere_aabb(a, b),
            (Self::Ball(a), Self::Ball(b)) => overlap::sphere_sphere(a, b),
        }
    }
}

/// Shape attached to exactly one actor.
///
/// The collider stores its owner as an [`ActorId`] handle instead of a
/// pointer. Positions are always read from the owning [`Body`], and a
/// collider can only be built through [`Body::set_collider`], so it is never
/// detached from its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    owner: ActorId,
    shape: ColliderShape,
}

impl Collider {
    pub(crate) fn attached(owner: ActorId, shape: ColliderShape) -> Self {
        Self { owner, shape }
    }

    /// Handle of the owning actor.
    pub fn owner(&self) -> ActorId {
        self.owner
    }

    /// Shape extents.
    pub fn shape(&self) -> &ColliderShape {
        &self.shape
    }

    /// Variant tag.
    pub fn kind(&self) -> ColliderKind {
        self.shape.kind()
    }

    /// Does this collider, placed at `owner`'s position, overlap `other`
    /// placed at `other_owner`'s position?
    ///
    /// Two colliders with the same owner never overlap, and neither does a
    /// collider whose owner sits at a non-finite position.
    ///
    /// # Panics
    /// Panics if either body is not the owner recorded in its collider. That
    /// state means a collider was read through the wrong actor.
    pub fn test_overlap(&self, owner: &Body, other: &Self, other_owner: &Body) -> bool {
        assert_eq!(self.owner, owner.id(), "collider queried through a body that does not own it");
        assert_eq!(
            other.owner,
            other_owner.id(),
            "collider queried through a body that does not own it"
        );
        if self.owner == other.owner {
            return false;
        }
        let (here, there) = (owner.position(), other_owner.position());
        if !here.is_finite() || !there.is_finite() {
            return false;
        }
        Volume::at(&self.shape, here).overlaps(&Volume::at(&other.shape, there))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_and_nan_extents_are_rejected() {
        assert_eq!(
            ColliderShape::aabb(1.0, -2.0, 1.0),
            Err(ShapeError::Negative {
                axis: "height",
                value: -2.0,
            })
        );
        assert!(matches!(
            ColliderShape::sphere(f32::NAN),
            Err(ShapeError::NonFinite { axis: "radius", .. })
        ));
        assert!(ColliderShape::cube(0.0).is_ok());
    }

    #[test]
    fn validate_catches_hand_built_shapes() {
        let bad = ColliderShape::Sphere { radius: -1.0 };
        assert!(bad.validate().is_err());
        assert_eq!(bad.kind(), ColliderKind::Sphere);
    }

    #[test]
    fn volumes_dispatch_on_both_variants() {
        let bx = Volume::at(
            &ColliderShape::Aabb {
                width: 2.0,
                height: 2.0,
                length: 2.0,
            },
            Vec3::ZERO,
        );
        let ball = Volume::at(&ColliderShape::Sphere { radius: 1.0 }, Vec3::new(2.0, 0.0, 0.0));
        assert!(bx.overlaps(&ball));
        assert!(ball.overlaps(&bx));
        let far = Volume::at(&ColliderShape::Sphere { radius: 1.0 }, Vec3::new(9.0, 0.0, 0.0));
        assert!(!far.overlaps(&bx));
        assert!(!far.overlaps(&ball));
    }
}
