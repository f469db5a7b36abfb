use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::projectiles::emitter::BulletEmitter;
use crate::plugins::projectiles::pool::{ParticleMirror, ParticlePool};

#[test]
fn spawns_wall_on_startup() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_range);

    let walls = world.query::<(&Name, &RigidBody)>().iter(&world)
        .filter(|(n, rb)| n.as_str() == "Wall" && matches!(**rb, RigidBody::Static))
        .count();
    assert_eq!(walls, 1);
}

#[test]
fn spawns_emitter_with_mirror_from_tunables() {
    let mut world = World::new();
    world.insert_resource(Tunables { particle_capacity: 64, ..default() });
    run_system_once(&mut world, super::spawn_emitter);

    let (emitter, mirror) = world
        .query::<(&BulletEmitter, &ParticleMirror)>()
        .single(&world)
        .unwrap();
    assert_eq!(emitter.config().particle_capacity(), 64);
    assert_eq!(mirror.capacity(), 64);
}

#[test]
fn rejected_config_spawns_nothing() {
    let mut world = World::new();
    world.insert_resource(Tunables { shot_interval: 0.0, ..default() });
    run_system_once(&mut world, super::spawn_emitter);

    assert_eq!(world.query::<&BulletEmitter>().iter(&world).count(), 0);
}

#[test]
fn sweep_rotates_emitter_forward() {
    let mut world = World::new();
    crate::common::test_utils::insert_time_with_delta(&mut world, std::time::Duration::from_secs(1));
    let e = world
        .spawn((
            super::Sweep { radians_per_sec: std::f32::consts::FRAC_PI_2 },
            Transform::IDENTITY,
            GlobalTransform::IDENTITY,
        ))
        .id();

    run_system_once(&mut world, super::sweep_emitters);

    // A quarter turn about +Y takes -Z to -X.
    let forward = world.get::<GlobalTransform>(e).unwrap().forward().as_vec3();
    assert!(forward.abs_diff_eq(Vec3::NEG_X, 1e-5), "forward = {forward}");
}
