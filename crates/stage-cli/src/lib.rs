// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Headless runner for Stagecraft scenes.
//!
//! Builds the demo scene from [`SimPrefs`](stage_app_core::prefs::SimPrefs),
//! steps it for a fixed number of frames, and reports what happened.

pub mod demo;
pub mod render;
pub mod runner;

pub use runner::{run, RunSummary};
