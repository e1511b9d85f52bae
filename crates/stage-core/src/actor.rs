// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The actor contract and the state every actor carries.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use stage_math::Vec3;

use crate::collider::{Collider, ColliderShape, ShapeError};
use crate::commands::Commands;
use crate::render::Renderer;

static NEXT_ACTOR_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique handle naming one actor.
///
/// Colliders refer to their owner through this handle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(u64);

impl ActorId {
    fn next() -> Self {
        Self(NEXT_ACTOR_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value, for logs.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ActorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Position, lifecycle flags, and the optional collider of one actor.
///
/// `Body` is not `Clone`: two bodies never share an [`ActorId`].
#[derive(Debug)]
pub struct Body {
    id: ActorId,
    position: Vec3,
    started: bool,
    destroyed: bool,
    collider: Option<Collider>,
}

impl Body {
    /// New body at `position` without a collider.
    pub fn new(position: Vec3) -> Self {
        Self {
            id: ActorId::next(),
            position,
            started: false,
            destroyed: false,
            collider: None,
        }
    }

    /// Builder form of [`Body::set_collider`].
    pub fn with_collider(mut self, shape: ColliderShape) -> Result<Self, ShapeError> {
        self.set_collider(shape)?;
        Ok(self)
    }

    /// Attaches a collider of `shape`, replacing any existing one.
    pub fn set_collider(&mut self, shape: ColliderShape) -> Result<(), ShapeError> {
        shape.validate()?;
        self.collider = Some(Collider::attached(self.id, shape));
        Ok(())
    }

    /// Detaches and returns the collider.
    pub fn take_collider(&mut self) -> Option<Collider> {
        self.collider.take()
    }

    /// Handle of this actor.
    pub fn id(&self) -> ActorId {
        self.id
    }

    /// Local position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Moves the actor to `position`.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Moves the actor by `delta`.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// The attached collider, if any.
    pub fn collider(&self) -> Option<&Collider> {
        self.collider.as_ref()
    }

    /// Whether the scene has run this actor's start hook.
    pub fn started(&self) -> bool {
        self.started
    }

    pub(crate) fn mark_started(&mut self) {
        self.started = true;
    }

    /// Whether the actor has been torn down.
    pub fn destroyed(&self) -> bool {
        self.destroyed
    }

    /// Drops the collider and flags the body so its scene lets go of it.
    pub fn release(&mut self) {
        self.collider = None;
        self.destroyed = true;
    }

    /// True iff both bodies carry a collider and the colliders overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        match (&self.collider, &other.collider) {
            (Some(mine), Some(theirs)) => mine.test_overlap(self, theirs, other),
            _ => false,
        }
    }
}

/// A positioned, updatable, drawable simulation entity.
///
/// Implementors only provide access to their [`Body`]; every hook has a
/// no-op default. The scene drives the hooks in this order each frame:
/// `start` (first frame only), `update`, then `on_collision` once per
/// overlapping partner.
pub trait Actor {
    /// Shared actor state.
    fn body(&self) -> &Body;

    /// Shared actor state, mutably.
    fn body_mut(&mut self) -> &mut Body;

    /// Label used in logs and draw calls.
    fn name(&self) -> &str {
        "actor"
    }

    /// One-time hook run on the first frame the actor is processed.
    fn start(&mut self) {}

    /// Advances actor-specific state by `delta_time` seconds.
    fn update(&mut self, _delta_time: f32, _commands: &mut Commands) {}

    /// Issues render calls for this actor.
    fn draw(&self, _renderer: &mut dyn Renderer) {}

    /// Does this actor's collider currently overlap `other`'s?
    ///
    /// `false` if either actor has no collider, and always `false` against
    /// itself.
    fn check_for_collision(&self, other: &dyn Actor) -> bool {
        self.body().overlaps(other.body())
    }

    /// Notification that this actor overlaps `other` this frame.
    fn on_collision(&mut self, _other: &dyn Actor, _commands: &mut Commands) {}

    /// Releases owned resources (the collider included) and asks the owning
    /// scene to drop this actor.
    fn destroy_self(&mut self) {
        self.body_mut().release();
    }
}

/// Shared, identity-compared reference to an actor held by a scene.
pub type ActorRef = Rc<RefCell<dyn Actor>>;

/// Wraps an actor into an [`ActorRef`].
pub fn into_ref<A: Actor + 'static>(actor: A) -> ActorRef {
    Rc::new(RefCell::new(actor))
}

/// Reference identity: `true` when both handles point at the same actor.
pub fn same_actor(a: &ActorRef, b: &ActorRef) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
