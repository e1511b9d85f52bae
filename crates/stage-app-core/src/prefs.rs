// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved settings for the headless scene runner.

use serde::{Deserialize, Serialize};

/// Config key under which [`SimPrefs`] are stored.
pub const SIM_PREFS_KEY: &str = "sim";

/// Frame loop and demo-scene parameters.
///
/// Every field has a default, so partial JSON files load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimPrefs {
    /// Frames to simulate.
    pub frames: u32,
    /// Seconds per frame.
    pub delta_time: f32,
    /// Demo scene layout.
    pub demo: DemoPrefs,
}

impl Default for SimPrefs {
    fn default() -> Self {
        Self {
            frames: 240,
            delta_time: 1.0 / 60.0,
            demo: DemoPrefs::default(),
        }
    }
}

/// Layout of the demo "drifter" row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoPrefs {
    /// Number of drifters.
    pub drifters: u32,
    /// Gap between neighbouring drifter centers.
    pub spacing: f32,
    /// Speed toward the row's midpoint, units per second.
    pub speed: f32,
    /// Edge length of box colliders.
    pub box_size: f32,
    /// Radius of sphere colliders.
    pub sphere_radius: f32,
}

impl Default for DemoPrefs {
    fn default() -> Self {
        Self {
            drifters: 6,
            spacing: 4.0,
            speed: 1.5,
            box_size: 1.0,
            sphere_radius: 0.5,
        }
    }
}
