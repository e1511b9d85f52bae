// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Add/remove/end semantics of the scene collections.

mod common;

use common::{share, Probe};
use stage_core::{into_ref, same_actor, ActorRef, Scene};
use stage_math::Vec3;

fn plain(label: &str) -> ActorRef {
    into_ref(Probe::new(label, Vec3::ZERO))
}

fn same_members(a: &[ActorRef], b: &[ActorRef]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same_actor(x, y))
}

#[test]
fn add_appends_in_order() {
    let mut scene = Scene::new();
    let a = plain("a");
    let b = plain("b");
    let c = plain("c");
    scene.add_actor(a.clone());
    scene.add_actors([b.clone(), c.clone()]);
    assert!(same_members(scene.actors(), &[a, b, c]));
}

#[test]
fn add_then_remove_restores_collection() {
    let mut scene = Scene::new();
    scene.add_actors([plain("a"), plain("b")]);
    let before: Vec<ActorRef> = scene.actors().to_vec();

    let extra = plain("extra");
    scene.add_actor(extra.clone());
    assert_eq!(scene.actor_count(), 3);
    assert!(scene.remove_actor(&extra));
    assert!(same_members(scene.actors(), &before));
}

#[test]
fn removing_unknown_actor_changes_nothing() {
    let mut scene = Scene::new();
    scene.add_actors([plain("a"), plain("b"), plain("c")]);
    let before: Vec<ActorRef> = scene.actors().to_vec();
    assert!(!scene.remove_actor(&plain("stranger")));
    assert!(same_members(scene.actors(), &before));
}

#[test]
fn removing_from_empty_scene_reports_false() {
    let mut scene = Scene::new();
    let a = plain("a");
    assert!(!scene.remove_actor(&a));
    assert!(!scene.remove_ui_element(&a));
    assert_eq!(scene.actor_count(), 0);
}

#[test]
fn remove_is_stable_and_takes_first_match_only() {
    let mut scene = Scene::new();
    let a = plain("a");
    let b = plain("b");
    let c = plain("c");
    scene.add_actors([a.clone(), b.clone(), c.clone(), b.clone()]);
    assert!(scene.remove_actor(&b));
    assert!(same_members(scene.actors(), &[a, c, b.clone()]));
    assert!(scene.contains_actor(&b));
}

#[test]
fn ui_collection_is_independent() {
    let mut scene = Scene::new();
    let hud = plain("hud");
    scene.add_ui_element(hud.clone());
    assert!(!scene.remove_actor(&hud));
    assert!(scene.contains_ui_element(&hud));
    assert!(scene.remove_ui_element(&hud));
    assert_eq!(scene.ui_count(), 0);
}

#[test]
fn end_tears_down_gameplay_but_keeps_ui() {
    let (a, ha) = share(Probe::boxed("a", Vec3::ZERO, 1.0));
    let (b, hb) = share(Probe::boxed("b", Vec3::ZERO, 1.0));
    let (hud, hh) = share(Probe::new("hud", Vec3::ZERO));
    let mut scene = Scene::new();
    scene.add_actors([ha, hb]);
    scene.add_ui_element(hh);

    scene.end();

    assert_eq!(scene.actor_count(), 0);
    assert_eq!(scene.ui_count(), 1);
    for p in [&a, &b] {
        let p = p.borrow();
        assert_eq!(p.destroyed_calls, 1);
        assert!(p.body.collider().is_none());
    }
    assert_eq!(hud.borrow().destroyed_calls, 0);
}

#[test]
fn setup_runs_once_until_the_scene_ends() {
    let mut scene = Scene::new();
    let setup = |s: &mut Scene| {
        s.add_actor(plain("p"));
        s.add_ui_element(plain("hud"));
    };
    assert!(scene.start(&setup));
    assert!(scene.is_started());
    assert!(!scene.start(&setup));
    assert_eq!(scene.actor_count(), 1);
    assert_eq!(scene.ui_count(), 1);

    scene.end();
    assert!(scene.start(&setup));
    assert_eq!(scene.actor_count(), 1);
    // UI survived the end, so the second setup adds alongside it.
    assert_eq!(scene.ui_count(), 2);
}
