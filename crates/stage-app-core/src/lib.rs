// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Stagecraft tools (config, prefs).
//! Keeps runner adapters thin and independent of where config lives.

pub mod config;
pub mod prefs;
