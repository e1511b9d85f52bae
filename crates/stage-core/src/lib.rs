// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! stage-core: actors, colliders, and the frame-stepped scene loop.
//!
//! A [`Scene`] owns two ordered collections of [`ActorRef`]s (gameplay and
//! UI). Each [`Scene::update`] starts actors lazily, advances them, and after
//! every single actor update scans that actor against the whole collection
//! for collider overlap, notifying it through [`Actor::on_collision`].
//! Detection only: nothing is pushed apart or resolved.
#![forbid(unsafe_code)]

mod actor;
mod collider;
mod commands;
mod render;
mod scene;

pub use actor::{into_ref, same_actor, Actor, ActorId, ActorRef, Body};
pub use collider::{Collider, ColliderKind, ColliderShape, ShapeError};
pub use commands::Commands;
pub use render::{NullRenderer, Renderer};
pub use scene::{FrameReport, Scene, SceneSetup};
