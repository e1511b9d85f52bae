// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]

use std::cell::RefCell;
use std::rc::Rc;

use stage_app_core::prefs::{DemoPrefs, SimPrefs};
use stage_cli::demo::{Cast, HudText};
use stage_cli::render::TraceRenderer;
use stage_cli::run;
use stage_core::{ActorRef, ColliderKind, Scene};
use stage_math::Vec3;

fn prefs(drifters: u32, spacing: f32, frames: u32) -> SimPrefs {
    SimPrefs {
        frames,
        delta_time: 1.0 / 60.0,
        demo: DemoPrefs {
            drifters,
            spacing,
            ..DemoPrefs::default()
        },
    }
}

#[test]
fn closing_pair_collides() {
    // 4 units apart, closing at 3 u/s, contact after about one second.
    let summary = run(&prefs(2, 4.0, 120)).expect("run");
    assert_eq!(summary.frames, 120);
    assert!(summary.collisions > 0, "{summary:?}");
    assert!(summary.frames_with_contact > 0);
    assert_eq!(summary.survivors, 2);
}

#[test]
fn distant_pair_never_touches() {
    let summary = run(&prefs(2, 100.0, 10)).expect("run");
    assert_eq!(summary.collisions, 0);
    assert_eq!(summary.frames_with_contact, 0);
}

#[test]
fn counts_updates_and_draws_per_frame() {
    let summary = run(&prefs(2, 100.0, 10)).expect("run");
    // Two drifters plus the HUD, each updated and drawn once per frame.
    assert_eq!(summary.updates, 30);
    assert_eq!(summary.draws, 30);
}

#[test]
fn zero_frames_is_a_no_op_run() {
    let summary = run(&prefs(3, 4.0, 0)).expect("run");
    assert_eq!(summary.frames, 0);
    assert_eq!(summary.updates, 0);
    assert_eq!(summary.draws, 0);
    assert_eq!(summary.survivors, 3);
}

#[test]
fn invalid_shape_prefs_fail_the_run() {
    let mut p = prefs(2, 4.0, 10);
    p.demo.sphere_radius = -1.0;
    assert!(run(&p).is_err());
    assert!(Cast::from_prefs(&p.demo).is_err());
}

#[test]
fn non_finite_or_negative_delta_time_is_rejected() {
    for dt in [f32::INFINITY, f32::NAN, -0.5] {
        let mut p = prefs(3, 4.0, 10);
        p.delta_time = dt;
        assert!(run(&p).is_err(), "dt = {dt}");
    }
}

#[test]
fn cast_is_laid_out_symmetrically_with_alternating_shapes() {
    let cast = Cast::from_prefs(&DemoPrefs {
        drifters: 3,
        spacing: 4.0,
        ..DemoPrefs::default()
    })
    .expect("cast");
    let xs: Vec<f32> =
        cast.actors().iter().map(|a| a.borrow().body().position().x()).collect();
    assert_eq!(xs, vec![-4.0, 0.0, 4.0]);

    let kinds: Vec<Option<ColliderKind>> = cast
        .actors()
        .iter()
        .map(|a| a.borrow().body().collider().map(|c| c.kind()))
        .collect();
    assert_eq!(
        kinds,
        vec![Some(ColliderKind::Aabb), Some(ColliderKind::Sphere), Some(ColliderKind::Aabb)]
    );
}

#[test]
fn cast_drifters_head_toward_the_origin() {
    let cast = Cast::from_prefs(&DemoPrefs {
        drifters: 3,
        spacing: 10.0,
        ..DemoPrefs::default()
    })
    .expect("cast");
    let mut scene = Scene::new();
    assert!(scene.start(&cast));
    scene.update(1.0);
    let xs: Vec<f32> =
        scene.actors().iter().map(|a| a.borrow().body().position().x()).collect();
    assert!(xs[0] > -10.0);
    assert_eq!(xs[1], 0.0);
    assert!(xs[2] < 10.0);
    assert_eq!(scene.ui_count(), 1);
}

#[test]
fn hud_text_tracks_frames_and_time() {
    let hud = Rc::new(RefCell::new(HudText::new(Vec3::ZERO)));
    let handle: ActorRef = hud.clone();
    let mut scene = Scene::new();
    scene.add_ui_element(handle);
    scene.update_ui(0.5);
    scene.update_ui(0.5);

    let mut renderer = TraceRenderer::default();
    scene.draw_ui(&mut renderer);
    assert_eq!(renderer.texts(), 1);
    assert_eq!(renderer.shapes(), 0);
    assert_eq!(hud.borrow().text(), "frame 2 | t=1.00s");
}

#[test]
fn hud_text_format() {
    let hud = HudText::new(Vec3::ZERO);
    assert_eq!(hud.text(), "frame 0 | t=0.00s");
}
