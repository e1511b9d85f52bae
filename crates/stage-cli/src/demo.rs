// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Demo cast: a row of drifters closing on the origin plus a HUD line.

use stage_app_core::prefs::DemoPrefs;
use stage_core::{
    into_ref, Actor, ActorRef, Body, ColliderShape, Commands, Renderer, Scene, SceneSetup,
    ShapeError,
};
use stage_math::Vec3;
use tracing::debug;

/// Moves along X at constant speed and turns around when it runs into
/// something ahead of it.
pub struct Drifter {
    label: String,
    body: Body,
    velocity: Vec3,
    bumps: u32,
}

impl Drifter {
    /// New drifter at `position` with `velocity` and a collider of `shape`.
    pub fn new(
        label: String,
        position: Vec3,
        velocity: Vec3,
        shape: ColliderShape,
    ) -> Result<Self, ShapeError> {
        Ok(Self {
            label,
            body: Body::new(position).with_collider(shape)?,
            velocity,
            bumps: 0,
        })
    }

    /// Current velocity.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Number of times this drifter turned around.
    pub fn bumps(&self) -> u32 {
        self.bumps
    }
}

impl Actor for Drifter {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn name(&self) -> &str {
        &self.label
    }

    fn update(&mut self, delta_time: f32, _commands: &mut Commands) {
        self.body.translate(self.velocity * delta_time);
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        if let Some(collider) = self.body.collider() {
            renderer.draw_shape(&self.label, self.body.position(), collider.shape());
        }
    }

    fn on_collision(&mut self, other: &dyn Actor, _commands: &mut Commands) {
        let toward = other.body().position() - self.body.position();
        if toward.dot(&self.velocity) > 0.0 {
            self.velocity = -self.velocity;
            self.bumps += 1;
            debug!(drifter = %self.label, other = other.name(), "bump");
        }
    }
}

/// UI line showing the frame counter.
pub struct HudText {
    body: Body,
    frames: u64,
    elapsed: f32,
}

impl HudText {
    /// New HUD line anchored at `position`.
    pub fn new(position: Vec3) -> Self {
        Self {
            body: Body::new(position),
            frames: 0,
            elapsed: 0.0,
        }
    }

    /// Text as it would be drawn.
    pub fn text(&self) -> String {
        format!("frame {} | t={:.2}s", self.frames, self.elapsed)
    }
}

impl Actor for HudText {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn name(&self) -> &str {
        "hud"
    }

    fn update(&mut self, delta_time: f32, _commands: &mut Commands) {
        self.frames += 1;
        self.elapsed += delta_time;
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_text("hud", self.body.position(), &self.text());
    }
}

/// Starting actor set for the demo scene.
pub struct Cast {
    actors: Vec<ActorRef>,
    ui: Vec<ActorRef>,
}

impl Cast {
    /// Lays out `prefs.drifters` drifters symmetrically around the origin.
    ///
    /// Even slots get box colliders and odd slots spheres. Each drifter heads
    /// toward the origin; one sitting exactly on it stays put.
    pub fn from_prefs(prefs: &DemoPrefs) -> Result<Self, ShapeError> {
        let n = prefs.drifters;
        let mid = (f64::from(n) - 1.0) * 0.5;
        let mut actors = Vec::new();
        for i in 0..n {
            #[allow(clippy::cast_possible_truncation)]
            let x = ((f64::from(i) - mid) * f64::from(prefs.spacing)) as f32;
            let heading = if x > 0.0 {
                -1.0
            } else if x < 0.0 {
                1.0
            } else {
                0.0
            };
            let shape = if i % 2 == 0 {
                ColliderShape::cube(prefs.box_size)?
            } else {
                ColliderShape::sphere(prefs.sphere_radius)?
            };
            let drifter = Drifter::new(
                format!("drifter-{i}"),
                Vec3::new(x, 0.0, 0.0),
                Vec3::new(heading * prefs.speed, 0.0, 0.0),
                shape,
            )?;
            actors.push(into_ref(drifter));
        }
        let ui = vec![into_ref(HudText::new(Vec3::new(10.0, 10.0, 0.0)))];
        Ok(Self { actors, ui })
    }

    /// Gameplay actors, in scene order.
    pub fn actors(&self) -> &[ActorRef] {
        &self.actors
    }
}

impl SceneSetup for Cast {
    fn build(&self, scene: &mut Scene) {
        scene.add_actors(self.actors.iter().cloned());
        scene.add_ui_elements(self.ui.iter().cloned());
    }
}
