//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the core ECS runtime and time.
//! - frames advance by a fixed manual duration, so emission counts are exact.
//! - we then call `bullet_emitter::game::configure_headless` to install the simulation plugins.

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;

pub const FRAME: Duration = Duration::from_millis(100);

pub fn app_headless() -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so physics asset hooks find their resources.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        TransformPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    // Avian's collider cache reads `AssetEvent<Mesh>`; register the asset without rendering.
    app.init_asset::<Mesh>();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));

    bullet_emitter::game::configure_headless(&mut app);
    // `App::run` does this; tests drive `update()` directly, so finish plugin setup here.
    app.finish();
    app.cleanup();
    app
}

/// Run `n` frames. The very first frame of an app has a zero delta.
pub fn run_frames(app: &mut App, n: usize) {
    for _ in 0..n {
        app.update();
    }
}
