//! World plugin: a demo range with one sweeping emitter and a wall to stop its bullets.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::common::{layers::Layer, state::SimState, tunables::Tunables};
use crate::plugins::projectiles::emitter::BulletEmitter;
use crate::plugins::projectiles::messages::{ProjectileExpired, ProjectileHit};
use crate::plugins::projectiles::pool::ParticleMirror;
use crate::plugins::projectiles::systems::tick_emitters;

/// Distance from the emitter to the wall it faces.
pub const WALL_DISTANCE: f32 = 300.0;
pub const WALL_SIZE: Vec3 = Vec3::new(400.0, 100.0, 10.0);

/// Rotates an emitter around the vertical axis, so its muzzle moves between shots.
#[derive(Component, Debug, Clone, Copy)]
pub struct Sweep {
    pub radians_per_sec: f32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, (spawn_range, spawn_emitter))
        .add_systems(
            Update,
            // Shots leave from this frame's muzzle.
            sweep_emitters
                .before(tick_emitters)
                .run_if(in_state(SimState::Running)),
        )
        .add_systems(PostUpdate, log_impacts);
}

fn spawn_range(mut commands: Commands) {
    let wall_tf = Transform::from_xyz(0.0, 0.0, -WALL_DISTANCE);

    commands.spawn((
        Name::new("Wall"),
        wall_tf,
        GlobalTransform::from(wall_tf),
        RigidBody::Static,
        Collider::cuboid(WALL_SIZE.x, WALL_SIZE.y, WALL_SIZE.z),
        CollisionLayers::new(Layer::World, [Layer::Default]),
    ));
}

fn spawn_emitter(mut commands: Commands, tunables: Res<Tunables>) {
    let emitter = match BulletEmitter::new(tunables.emitter_config()) {
        Ok(e) => e,
        Err(err) => {
            error!("emitter config rejected: {err}");
            return;
        }
    };

    // Default transform faces -Z, towards the wall.
    let tf = Transform::IDENTITY;
    commands.spawn((
        Name::new("BulletEmitter"),
        emitter,
        ParticleMirror::new(tunables.particle_capacity),
        Sweep { radians_per_sec: 0.2 },
        tf,
        GlobalTransform::from(tf),
    ));
}

fn sweep_emitters(time: Res<Time>, mut q: Query<(&Sweep, &mut Transform, &mut GlobalTransform)>) {
    let dt = time.delta_secs();
    for (sweep, mut tf, mut gtf) in &mut q {
        tf.rotate_y(sweep.radians_per_sec * dt);
        // Emitters are roots; keep the global transform current without propagation.
        *gtf = GlobalTransform::from(*tf);
    }
}

fn log_impacts(mut hits: MessageReader<ProjectileHit>, mut expired: MessageReader<ProjectileExpired>) {
    for hit in hits.read() {
        debug!("projectile {} hit at {}", hit.id, hit.point);
    }
    for ev in expired.read() {
        trace!("projectile {} expired at {}", ev.id, ev.position);
    }
}

#[cfg(test)]
mod tests;
