// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene mutations requested while a frame is running.

use crate::actor::ActorRef;

pub(crate) enum Command {
    AddActor(ActorRef),
    AddUiElement(ActorRef),
    RemoveActor(ActorRef),
    RemoveUiElement(ActorRef),
}

/// Deferred scene edits.
///
/// Actors receive a `Commands` buffer in [`crate::Actor::update`] and
/// [`crate::Actor::on_collision`]. The scene applies the buffered edits in
/// request order once the frame's loop has finished, so the collection an
/// update pass walks never changes underneath it.
#[derive(Default)]
pub struct Commands {
    queue: Vec<Command>,
}

impl Commands {
    /// Empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `actor` to the gameplay collection after this frame.
    pub fn add_actor(&mut self, actor: ActorRef) {
        self.queue.push(Command::AddActor(actor));
    }

    /// Append `actor` to the UI collection after this frame.
    pub fn add_ui_element(&mut self, actor: ActorRef) {
        self.queue.push(Command::AddUiElement(actor));
    }

    /// Remove the first gameplay entry matching `actor` after this frame.
    pub fn remove_actor(&mut self, actor: ActorRef) {
        self.queue.push(Command::RemoveActor(actor));
    }

    /// Remove the first UI entry matching `actor` after this frame.
    pub fn remove_ui_element(&mut self, actor: ActorRef) {
        self.queue.push(Command::RemoveUiElement(actor));
    }

    /// Number of pending edits.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// `true` when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, Command> {
        self.queue.drain(..)
    }
}

impl core::fmt::Debug for Commands {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Commands").field("pending", &self.queue.len()).finish()
    }
}
