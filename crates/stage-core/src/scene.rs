// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene: actor collections and the per-frame update/collision/draw cycle.

use tracing::{debug, trace, warn};

use crate::actor::{same_actor, ActorRef};
use crate::commands::{Command, Commands};
use crate::render::Renderer;

/// Counters describing one update pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Actors whose `update` ran.
    pub updated: usize,
    /// Actors whose start hook ran this pass.
    pub started: usize,
    /// `on_collision` notifications delivered (each direction counts once).
    pub collisions: usize,
    /// Entries appended by deferred commands.
    pub spawned: usize,
    /// Entries dropped by deferred commands or the destroyed-actor sweep.
    pub removed: usize,
}

/// One-time initialization step that builds a scene's starting actor set.
pub trait SceneSetup {
    /// Populate `scene`.
    fn build(&self, scene: &mut Scene);
}

impl<F> SceneSetup for F
where
    F: Fn(&mut Scene),
{
    fn build(&self, scene: &mut Scene) {
        self(scene);
    }
}

/// Which collection an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Gameplay,
    Ui,
}

impl Layer {
    const fn label(self) -> &'static str {
        match self {
            Self::Gameplay => "gameplay",
            Self::Ui => "ui",
        }
    }
}

/// Owner of a gameplay collection and a UI collection.
///
/// Both collections keep insertion order. Removal is stable (the remaining
/// entries keep their relative order), so draw order only changes by appends
/// and removals, never by compaction. Duplicate references are accepted.
///
/// Frame policy: an update pass walks the collection as it stood when the
/// pass began. Edits requested through [`Commands`] and actors that called
/// [`crate::Actor::destroy_self`] are applied after the walk, destroyed
/// actors first, then commands in request order.
#[derive(Default)]
pub struct Scene {
    actors: Vec<ActorRef>,
    ui_elements: Vec<ActorRef>,
    initialized: bool,
}

impl Scene {
    /// Empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `setup` to build the starting actor set.
    ///
    /// Only the first call after construction (or after [`Scene::end`]) has
    /// any effect; later calls are ignored and return `false`.
    pub fn start<S>(&mut self, setup: &S) -> bool
    where
        S: SceneSetup + ?Sized,
    {
        if self.initialized {
            warn!("scene already started; ignoring setup");
            return false;
        }
        self.initialized = true;
        setup.build(self);
        debug!(
            actors = self.actors.len(),
            ui_elements = self.ui_elements.len(),
            "scene started"
        );
        true
    }

    /// Advances every gameplay actor and runs the collision scan.
    ///
    /// For each actor `i` in order: start it if needed, update it, then test
    /// it against every other entry `j`, calling `i.on_collision(j)` on each
    /// overlap. Because the test follows `i`'s update immediately, an actor
    /// later in the collection is seen at its position from before its own
    /// update this frame. The reciprocal notification fires in `j`'s slot.
    pub fn update(&mut self, delta_time: f32) -> FrameReport {
        let mut commands = Commands::new();
        let mut report = FrameReport::default();

        for (i, actor) in self.actors.iter().enumerate() {
            if !advance(actor, delta_time, &mut commands, &mut report) {
                continue;
            }
            for (j, other) in self.actors.iter().enumerate() {
                if i == j {
                    continue;
                }
                let hit = actor.borrow().check_for_collision(&*other.borrow());
                if !hit {
                    continue;
                }
                let other = other.borrow();
                let mut me = actor.borrow_mut();
                trace!(
                    actor = %me.body().id(),
                    other = %other.body().id(),
                    "collision"
                );
                me.on_collision(&*other, &mut commands);
                report.collisions += 1;
            }
        }

        self.finish_frame(Layer::Gameplay, commands, &mut report);
        report
    }

    /// Start-then-update over the UI collection. No collision scan.
    pub fn update_ui(&mut self, delta_time: f32) -> FrameReport {
        let mut commands = Commands::new();
        let mut report = FrameReport::default();
        for element in &self.ui_elements {
            advance(element, delta_time, &mut commands, &mut report);
        }
        self.finish_frame(Layer::Ui, commands, &mut report);
        report
    }

    /// Draws every gameplay actor in collection order.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for actor in &self.actors {
            actor.borrow().draw(renderer);
        }
    }

    /// Draws every UI element in collection order.
    pub fn draw_ui(&self, renderer: &mut dyn Renderer) {
        for element in &self.ui_elements {
            element.borrow().draw(renderer);
        }
    }

    /// Tears down every gameplay actor, in order, and drops them.
    ///
    /// The UI collection is left as it is.
    pub fn end(&mut self) {
        for actor in &self.actors {
            actor.borrow_mut().destroy_self();
        }
        let released = self.actors.len();
        self.actors.clear();
        self.initialized = false;
        debug!(released, ui_kept = self.ui_elements.len(), "scene ended");
    }

    /// Appends an actor to the gameplay collection.
    pub fn add_actor(&mut self, actor: ActorRef) {
        push(&mut self.actors, Layer::Gameplay, actor);
    }

    /// Appends several actors, keeping their order.
    pub fn add_actors<I>(&mut self, actors: I)
    where
        I: IntoIterator<Item = ActorRef>,
    {
        for actor in actors {
            self.add_actor(actor);
        }
    }

    /// Appends an element to the UI collection.
    pub fn add_ui_element(&mut self, element: ActorRef) {
        push(&mut self.ui_elements, Layer::Ui, element);
    }

    /// Appends several UI elements, keeping their order.
    pub fn add_ui_elements<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = ActorRef>,
    {
        for element in elements {
            self.add_ui_element(element);
        }
    }

    /// Removes the first gameplay entry that is `actor`.
    ///
    /// Returns whether anything was removed.
    pub fn remove_actor(&mut self, actor: &ActorRef) -> bool {
        remove_first(&mut self.actors, Layer::Gameplay, actor)
    }

    /// Removes the first UI entry that is `element`.
    ///
    /// Returns whether anything was removed.
    pub fn remove_ui_element(&mut self, element: &ActorRef) -> bool {
        remove_first(&mut self.ui_elements, Layer::Ui, element)
    }

    /// Gameplay actors in collection order.
    pub fn actors(&self) -> &[ActorRef] {
        &self.actors
    }

    /// UI elements in collection order.
    pub fn ui_elements(&self) -> &[ActorRef] {
        &self.ui_elements
    }

    /// Number of gameplay entries.
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Number of UI entries.
    pub fn ui_count(&self) -> usize {
        self.ui_elements.len()
    }

    /// Whether `actor` is in the gameplay collection.
    pub fn contains_actor(&self, actor: &ActorRef) -> bool {
        self.actors.iter().any(|a| same_actor(a, actor))
    }

    /// Whether `element` is in the UI collection.
    pub fn contains_ui_element(&self, element: &ActorRef) -> bool {
        self.ui_elements.iter().any(|a| same_actor(a, element))
    }

    /// Whether the setup step has run.
    pub fn is_started(&self) -> bool {
        self.initialized
    }

    fn collection_mut(&mut self, layer: Layer) -> &mut Vec<ActorRef> {
        match layer {
            Layer::Gameplay => &mut self.actors,
            Layer::Ui => &mut self.ui_elements,
        }
    }

    fn finish_frame(&mut self, layer: Layer, mut commands: Commands, report: &mut FrameReport) {
        let list = self.collection_mut(layer);
        let before = list.len();
        list.retain(|a| !a.borrow().body().destroyed());
        let swept = before - list.len();
        if swept > 0 {
            debug!(layer = layer.label(), swept, "dropped destroyed actors");
        }
        report.removed += swept;

        for command in commands.drain() {
            match command {
                Command::AddActor(a) => {
                    self.add_actor(a);
                    report.spawned += 1;
                }
                Command::AddUiElement(a) => {
                    self.add_ui_element(a);
                    report.spawned += 1;
                }
                Command::RemoveActor(a) => {
                    if self.remove_actor(&a) {
                        report.removed += 1;
                    }
                }
                Command::RemoveUiElement(a) => {
                    if self.remove_ui_element(&a) {
                        report.removed += 1;
                    }
                }
            }
        }
    }
}

impl core::fmt::Debug for Scene {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scene")
            .field("actors", &self.actors.len())
            .field("ui_elements", &self.ui_elements.len())
            .field("initialized", &self.initialized)
            .finish()
    }
}

/// Start (once) and update one entry. Returns `false` if it was skipped.
fn advance(
    actor: &ActorRef,
    delta_time: f32,
    commands: &mut Commands,
    report: &mut FrameReport,
) -> bool {
    let mut a = actor.borrow_mut();
    if a.body().destroyed() {
        return false;
    }
    if !a.body().started() {
        a.start();
        a.body_mut().mark_started();
        report.started += 1;
        debug!(actor = %a.body().id(), name = a.name(), "actor started");
    }
    a.update(delta_time, commands);
    report.updated += 1;
    true
}

fn push(list: &mut Vec<ActorRef>, layer: Layer, actor: ActorRef) {
    list.push(actor);
    trace!(layer = layer.label(), len = list.len(), "add");
}

fn remove_first(list: &mut Vec<ActorRef>, layer: Layer, actor: &ActorRef) -> bool {
    let Some(index) = list.iter().position(|a| same_actor(a, actor)) else {
        return false;
    };
    list.remove(index);
    trace!(layer = layer.label(), index, "remove");
    true
}
