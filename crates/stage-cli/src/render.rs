// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Renderer adapter that turns draw calls into trace events.

use stage_core::{ColliderShape, Renderer};
use stage_math::Vec3;
use tracing::trace;

/// Logs each draw call at `trace` level and counts them.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    shapes: usize,
    texts: usize,
}

impl TraceRenderer {
    /// Shape draws seen so far.
    pub fn shapes(&self) -> usize {
        self.shapes
    }

    /// Text draws seen so far.
    pub fn texts(&self) -> usize {
        self.texts
    }
}

impl Renderer for TraceRenderer {
    fn draw_shape(&mut self, label: &str, position: Vec3, shape: &ColliderShape) {
        self.shapes += 1;
        trace!(label, pos = ?position.to_array(), kind = ?shape.kind(), "draw shape");
    }

    fn draw_text(&mut self, label: &str, position: Vec3, text: &str) {
        self.texts += 1;
        trace!(label, pos = ?position.to_array(), text, "draw text");
    }
}
