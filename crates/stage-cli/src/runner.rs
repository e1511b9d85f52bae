// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-step frame loop over the demo scene.

use anyhow::{ensure, Context, Result};
use stage_app_core::prefs::SimPrefs;
use stage_core::Scene;
use tracing::{debug, info, instrument};

use crate::demo::Cast;
use crate::render::TraceRenderer;

/// Totals accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames stepped.
    pub frames: u32,
    /// `on_collision` notifications across all frames.
    pub collisions: usize,
    /// Frames in which at least one notification fired.
    pub frames_with_contact: u32,
    /// Actor updates (gameplay and UI).
    pub updates: usize,
    /// Draw calls issued (shapes and text).
    pub draws: usize,
    /// Gameplay actors still in the scene before it ended.
    pub survivors: usize,
}

/// Builds the demo scene from `prefs` and steps it `prefs.frames` times.
///
/// Each frame runs `update`, `update_ui`, `draw`, then `draw_ui`. The scene
/// is ended once the loop finishes. `prefs.delta_time` must be finite and
/// non-negative.
#[instrument(skip(prefs), fields(frames = prefs.frames, dt = prefs.delta_time))]
pub fn run(prefs: &SimPrefs) -> Result<RunSummary> {
    ensure!(
        prefs.delta_time.is_finite() && prefs.delta_time >= 0.0,
        "delta_time must be finite and non-negative, got {}",
        prefs.delta_time
    );
    let cast = Cast::from_prefs(&prefs.demo).context("building demo cast")?;
    let mut scene = Scene::new();
    scene.start(&cast);
    info!(actors = scene.actor_count(), ui = scene.ui_count(), "scene ready");

    let mut renderer = TraceRenderer::default();
    let mut summary = RunSummary::default();
    for frame in 0..prefs.frames {
        let gameplay = scene.update(prefs.delta_time);
        let ui = scene.update_ui(prefs.delta_time);
        scene.draw(&mut renderer);
        scene.draw_ui(&mut renderer);

        if gameplay.collisions > 0 {
            summary.frames_with_contact += 1;
            debug!(frame, collisions = gameplay.collisions, "contact");
        }
        summary.collisions += gameplay.collisions;
        summary.updates += gameplay.updated + ui.updated;
        summary.frames += 1;
    }
    summary.draws = renderer.shapes() + renderer.texts();
    summary.survivors = scene.actor_count();

    scene.end();
    info!(
        frames = summary.frames,
        collisions = summary.collisions,
        contact_frames = summary.frames_with_contact,
        draws = summary.draws,
        "run complete"
    );
    Ok(summary)
}
