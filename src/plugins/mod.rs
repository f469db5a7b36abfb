//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod core;
pub mod physics;
pub mod projectiles;
pub mod world;

/// Register simulation plugins (all of them work headless).
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}
