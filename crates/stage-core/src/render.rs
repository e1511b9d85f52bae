// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Port trait for the rendering collaborator.
//!
//! The scene only forwards draw calls; it never interprets what a renderer
//! does with them.

use stage_math::Vec3;

use crate::collider::ColliderShape;

/// Minimal draw surface. Implementations are best-effort and side-effect only.
pub trait Renderer {
    /// Draw a solid shape for `label` at `position`.
    fn draw_shape(&mut self, label: &str, position: Vec3, shape: &ColliderShape);
    /// Draw a text element for `label` at `position`.
    fn draw_text(&mut self, label: &str, position: Vec3, text: &str);
}

/// Renderer that discards every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_shape(&mut self, _label: &str, _position: Vec3, _shape: &ColliderShape) {}
    fn draw_text(&mut self, _label: &str, _position: Vec3, _text: &str) {}
}
