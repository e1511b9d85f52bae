// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `stage`: headless Stagecraft runner.
//!
//! Loads simulation prefs from the platform config dir (writing defaults on
//! first run), applies command-line overrides, and steps the demo scene.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use stage_app_core::config::{ConfigService, Origin};
use stage_app_core::prefs::{SimPrefs, SIM_PREFS_KEY};
use stage_config_fs::FsConfigStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless Stagecraft scene runner")]
struct Args {
    /// Frames to simulate (overrides saved prefs)
    #[arg(long)]
    frames: Option<u32>,
    /// Seconds per frame (overrides saved prefs)
    #[arg(long, value_parser = parse_delta_time)]
    delta_time: Option<f32>,
    /// Number of demo drifters (overrides saved prefs)
    #[arg(long)]
    drifters: Option<u32>,
    /// Directory holding `sim.json`; defaults to the platform config dir
    #[arg(long)]
    config_dir: Option<PathBuf>,
    /// Do not write default prefs when none exist
    #[arg(long)]
    no_save: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let prefs = load_prefs(&args);
    let prefs = apply_overrides(prefs, &args);
    info!(?prefs, "starting run");

    let summary = stage_cli::run(&prefs)?;
    info!(?summary, "done");
    Ok(())
}

/// Config is best-effort: any failure falls back to defaults.
fn load_prefs(args: &Args) -> SimPrefs {
    let store = match &args.config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    };
    let config = match store {
        Ok(store) => ConfigService::new(store),
        Err(err) => {
            warn!(%err, "using default prefs");
            return SimPrefs::default();
        }
    };

    match config.load_or_init::<SimPrefs>(SIM_PREFS_KEY, !args.no_save) {
        Ok(loaded) => {
            if loaded.origin == Origin::DefaultsWritten {
                let path = config.store().path_for(SIM_PREFS_KEY);
                info!(path = %path.display(), "wrote default prefs");
            }
            loaded.value
        }
        Err(err) => {
            warn!(%err, "using default prefs");
            SimPrefs::default()
        }
    }
}

fn parse_delta_time(raw: &str) -> Result<f32, String> {
    let dt: f32 = raw.parse().map_err(|err| format!("{err}"))?;
    if !dt.is_finite() || dt < 0.0 {
        return Err(format!("expected a finite, non-negative number of seconds, got {raw}"));
    }
    Ok(dt)
}

fn apply_overrides(mut prefs: SimPrefs, args: &Args) -> SimPrefs {
    if let Some(frames) = args.frames {
        prefs.frames = frames;
    }
    if let Some(dt) = args.delta_time {
        prefs.delta_time = dt;
    }
    if let Some(n) = args.drifters {
        prefs.demo.drifters = n;
    }
    prefs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_time_flag_rejects_non_finite_and_negative() {
        assert_eq!(parse_delta_time("0.25"), Ok(0.25));
        assert_eq!(parse_delta_time("0"), Ok(0.0));
        for raw in ["inf", "NaN", "-1", "soon"] {
            assert!(parse_delta_time(raw).is_err(), "{raw}");
        }
    }
}
