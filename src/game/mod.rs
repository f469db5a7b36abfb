//! Composition root.
//!
//! Provides:
//! - `run`: a headless demo loop (fixed 60 Hz frames, logging on).
//! - `configure_headless`: the simulation plugins only, for integration tests.

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::asset::AssetPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::transform::TransformPlugin;

use crate::common::state::SimState;
use crate::plugins;

const FRAME: Duration = Duration::from_nanos(1_000_000_000 / 60);

pub fn run() {
    App::new()
        .add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(FRAME)),
            LogPlugin::default(),
            TransformPlugin,
            StatesPlugin,
            AssetPlugin::default(),
            ScenePlugin,
        ))
        .add_plugins(configure_headless)
        .run();
}

/// Headless configuration.
///
/// Notes:
/// - Do NOT add DefaultPlugins; nothing here renders.
/// - The caller supplies the runtime plugins (time, states, transforms).
pub fn configure_headless(app: &mut App) {
    app.init_state::<SimState>();
    plugins::register_gameplay(app);
}
