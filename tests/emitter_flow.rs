mod common;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bullet_emitter::common::state::SimState;
use bullet_emitter::plugins::projectiles::components::ProjectileId;
use bullet_emitter::plugins::projectiles::debug::DebugToggles;
use bullet_emitter::plugins::projectiles::emitter::BulletEmitter;
use bullet_emitter::plugins::projectiles::messages::{ProjectileFired, ProjectileHit};
use bullet_emitter::plugins::projectiles::pool::ParticleMirror;
use bullet_emitter::plugins::world::{Sweep, WALL_DISTANCE, WALL_SIZE};

#[derive(Resource, Default)]
struct Fired(Vec<ProjectileId>);

#[derive(Resource, Default)]
struct Shots(Vec<ProjectileFired>);

#[derive(Resource, Default)]
struct Hits(Vec<ProjectileHit>);

fn count_fired(
    mut reader: MessageReader<ProjectileFired>,
    mut fired: ResMut<Fired>,
    mut shots: ResMut<Shots>,
) {
    for ev in reader.read() {
        fired.0.push(ev.id);
        shots.0.push(*ev);
    }
}

fn record_hits(mut reader: MessageReader<ProjectileHit>, mut hits: ResMut<Hits>) {
    hits.0.extend(reader.read().copied());
}

fn app_with_counter() -> App {
    let mut app = common::app_headless();
    app.init_resource::<Fired>()
        .init_resource::<Shots>()
        .init_resource::<Hits>();
    app.add_systems(PostUpdate, (count_fired, record_hits));
    app
}

fn set_sweep(app: &mut App, radians_per_sec: f32) {
    let mut q = app.world_mut().query::<&mut Sweep>();
    for mut sweep in q.iter_mut(app.world_mut()) {
        sweep.radians_per_sec = radians_per_sec;
    }
}

fn emitter_forward(app: &mut App) -> Vec3 {
    app.world_mut()
        .query_filtered::<&Transform, With<BulletEmitter>>()
        .single(app.world())
        .expect("one emitter")
        .forward()
        .as_vec3()
}

fn emitter_next_id(app: &mut App) -> ProjectileId {
    app.world_mut()
        .query::<&BulletEmitter>()
        .single(app.world())
        .expect("one emitter")
        .next_id()
}

#[test]
fn fires_on_interval_and_mirrors_particles() {
    let mut app = app_with_counter();

    // 1 zero-delta frame + 10 frames of 100 ms = 1.0 s -> shots at 0.5 s and 1.0 s.
    common::run_frames(&mut app, 11);

    assert_eq!(emitter_next_id(&mut app), ProjectileId(2));
    assert_eq!(app.world().resource::<Fired>().0, vec![ProjectileId(0), ProjectileId(1)]);

    let mirrored = app
        .world_mut()
        .query::<&ParticleMirror>()
        .single(app.world())
        .expect("one mirror")
        .len();
    assert!(mirrored >= 1, "the newest shot is always mirrored");
}

#[test]
fn break_on_emit_halts_the_simulation() {
    let mut app = app_with_counter();
    app.insert_resource(DebugToggles { break_on_emit: true, ..default() });

    common::run_frames(&mut app, 20);

    assert_eq!(*app.world().resource::<State<SimState>>().get(), SimState::Halted);
    assert_eq!(emitter_next_id(&mut app), ProjectileId(1));
    assert_eq!(app.world().resource::<Fired>().0, vec![ProjectileId(0)]);
}

#[test]
fn shots_leave_along_the_current_frame_muzzle() {
    let mut app = app_with_counter();
    app.update();
    set_sweep(&mut app, 1.0);

    for _ in 0..30 {
        app.update();
        let shots = app.world().resource::<Shots>().0.len();
        if shots > 0 {
            break;
        }
    }

    let shot = *app.world().resource::<Shots>().0.first().expect("a shot within 3 s");
    let forward = emitter_forward(&mut app);
    let direction = shot.velocity.normalize();
    assert!(
        direction.distance(forward) < 1e-3,
        "shot {direction} should follow the swept muzzle {forward}"
    );
}

#[test]
fn bullets_stop_at_the_wall_face() {
    let mut app = app_with_counter();
    app.update();

    // Hold the emitter straight at the wall.
    set_sweep(&mut app, 0.0);
    {
        let mut q = app
            .world_mut()
            .query_filtered::<(&mut Transform, &mut GlobalTransform), With<BulletEmitter>>();
        let (mut tf, mut gtf) = q.single_mut(app.world_mut()).expect("one emitter");
        *tf = Transform::IDENTITY;
        *gtf = GlobalTransform::IDENTITY;
    }

    for _ in 0..30 {
        app.update();
        if !app.world().resource::<Hits>().0.is_empty() {
            break;
        }
    }

    let hit = *app.world().resource::<Hits>().0.first().expect("a hit within 3 s");
    assert_eq!(hit.id, ProjectileId(0));

    let face = -(WALL_DISTANCE - WALL_SIZE.z / 2.0);
    assert!((hit.point.z - face).abs() < 1e-2, "hit at {}, wall face at {face}", hit.point);
    assert!(hit.point.x.abs() < 1e-3);
    assert!(hit.point.y.abs() < 1e-3);
}
