// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use stage_core::{Actor, ActorRef, Body, ColliderShape, Commands, Renderer};
use stage_math::Vec3;

/// Shared event log so tests can assert on cross-actor ordering.
pub type Journal = Rc<RefCell<Vec<String>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

/// Test actor that counts its hooks and optionally moves every update.
pub struct Probe {
    pub label: String,
    pub body: Body,
    pub velocity: Vec3,
    pub starts: usize,
    pub updates: usize,
    pub hits: Vec<String>,
    pub hit_positions: Vec<Vec3>,
    pub destroyed_calls: usize,
    pub die_on_hit: bool,
    pub journal: Option<Journal>,
}

impl Probe {
    pub fn new(label: &str, position: Vec3) -> Self {
        Self {
            label: label.to_owned(),
            body: Body::new(position),
            velocity: Vec3::ZERO,
            starts: 0,
            updates: 0,
            hits: Vec::new(),
            hit_positions: Vec::new(),
            destroyed_calls: 0,
            die_on_hit: false,
            journal: None,
        }
    }

    pub fn boxed(label: &str, position: Vec3, size: f32) -> Self {
        let mut probe = Self::new(label, position);
        probe.body.set_collider(ColliderShape::cube(size).unwrap()).unwrap();
        probe
    }

    pub fn ball(label: &str, position: Vec3, radius: f32) -> Self {
        let mut probe = Self::new(label, position);
        probe.body.set_collider(ColliderShape::sphere(radius).unwrap()).unwrap();
        probe
    }

    pub fn moving(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn logging(mut self, journal: &Journal) -> Self {
        self.journal = Some(journal.clone());
        self
    }

    fn log(&self, entry: String) {
        if let Some(j) = &self.journal {
            j.borrow_mut().push(entry);
        }
    }
}

impl Actor for Probe {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn name(&self) -> &str {
        &self.label
    }

    fn start(&mut self) {
        self.starts += 1;
        self.log(format!("start {}", self.label));
    }

    fn update(&mut self, delta_time: f32, _commands: &mut Commands) {
        self.updates += 1;
        self.body.translate(self.velocity * delta_time);
        self.log(format!("update {}", self.label));
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        if let Some(c) = self.body.collider() {
            renderer.draw_shape(&self.label, self.body.position(), c.shape());
        } else {
            renderer.draw_text(&self.label, self.body.position(), &self.label);
        }
    }

    fn on_collision(&mut self, other: &dyn Actor, _commands: &mut Commands) {
        self.hits.push(other.name().to_owned());
        self.hit_positions.push(other.body().position());
        self.log(format!("hit {}->{}", self.label, other.name()));
        if self.die_on_hit {
            self.destroy_self();
        }
    }

    fn destroy_self(&mut self) {
        self.destroyed_calls += 1;
        self.body.release();
    }
}

/// Keeps a typed handle for assertions alongside the erased scene handle.
pub fn share(probe: Probe) -> (Rc<RefCell<Probe>>, ActorRef) {
    let typed = Rc::new(RefCell::new(probe));
    let erased: ActorRef = typed.clone();
    (typed, erased)
}

/// Renderer that records the labels it was asked to draw.
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Vec<String>,
}

impl Renderer for RecordingRenderer {
    fn draw_shape(&mut self, label: &str, _position: Vec3, _shape: &ColliderShape) {
        self.calls.push(format!("shape {label}"));
    }

    fn draw_text(&mut self, label: &str, _position: Vec3, text: &str) {
        self.calls.push(format!("text {label}: {text}"));
    }
}
