use avian3d::prelude::*;
use bevy::prelude::*;

/// Avian provides the spatial query pipeline the emitters ray-cast against.
/// Projectiles are not rigid bodies, so gravity never affects them.
pub fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default());
    app.insert_resource(Gravity(Vec3::ZERO));
}
