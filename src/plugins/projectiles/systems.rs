use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::collision::AvianRayOracle;
use super::components::Projectile;
use super::emitter::{BulletEmitter, EmitterHooks};
use super::messages::{ProjectileExpired, ProjectileFired, ProjectileHit};
use super::pool::ParticleMirror;

/// Hooks adapter: forwards emitter callbacks as messages tagged with the emitter entity.
struct MessageHooks<'a, 'wf, 'wh, 'we> {
    emitter: Entity,
    fired: &'a mut MessageWriter<'wf, ProjectileFired>,
    hit: &'a mut MessageWriter<'wh, ProjectileHit>,
    expired: &'a mut MessageWriter<'we, ProjectileExpired>,
}

impl EmitterHooks for MessageHooks<'_, '_, '_, '_> {
    fn on_emit(&mut self, projectile: &Projectile) {
        self.fired.write(ProjectileFired::new(self.emitter, projectile));
    }

    fn on_collision(&mut self, projectile: &Projectile) {
        self.hit.write(ProjectileHit::new(self.emitter, projectile));
    }

    fn on_expire(&mut self, projectile: &Projectile) {
        self.expired.write(ProjectileExpired::new(self.emitter, projectile));
    }
}

/// Run one emitter tick per emitter entity.
///
/// Each emitter owns its projectiles and its particle mirror, so entities never interact.
pub fn tick_emitters(
    time: Res<Time>,
    spatial: SpatialQuery,
    mut q: Query<(Entity, &GlobalTransform, &mut BulletEmitter, &mut ParticleMirror)>,
    mut fired: MessageWriter<ProjectileFired>,
    mut hit: MessageWriter<ProjectileHit>,
    mut expired: MessageWriter<ProjectileExpired>,
) {
    let dt = time.delta();

    for (entity, tf, mut emitter, mut mirror) in &mut q {
        let oracle = AvianRayOracle::new(&spatial).excluding(entity);
        let mut hooks = MessageHooks {
            emitter: entity,
            fired: &mut fired,
            hit: &mut hit,
            expired: &mut expired,
        };

        emitter.tick(dt, tf, &oracle, &mut *mirror, &mut hooks);
    }
}

/// The mirror's own aging, after reconciliation has written simulation truth.
pub fn age_mirrors(time: Res<Time>, mut q: Query<&mut ParticleMirror>) {
    let dt = time.delta_secs();
    for mut mirror in &mut q {
        mirror.age(dt);
    }
}
