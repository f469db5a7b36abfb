//! Particle reconciliation: overwrite the pool's active particles with simulation truth.

use bevy::prelude::*;

use super::components::{Projectile, ProjectileId};
use super::pool::{EXPIRE_NOW, ParticlePool, RenderedParticle};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub reconciled: usize,
    /// Particles with no matching projectile; left as the pool had them.
    pub orphaned: usize,
}

/// Look up a projectile by id. `live` is sorted by id (spawn order, append-only).
#[inline]
pub fn find_projectile(live: &[Projectile], id: ProjectileId) -> Option<&Projectile> {
    live.binary_search_by_key(&id, |p| p.id)
        .ok()
        .map(|i| &live[i])
}

/// Mirror one projectile onto its particle.
#[inline]
pub fn mirror(particle: &mut RenderedParticle, projectile: &Projectile) {
    particle.position = projectile.position;
    if projectile.is_alive() {
        particle.velocity = projectile.velocity;
        particle.remaining_lifetime = projectile.lifetime;
    } else {
        particle.velocity = Vec3::ZERO;
        particle.remaining_lifetime = EXPIRE_NOW;
    }
}

/// Bulk read the pool, mirror every correlated particle, bulk write it back.
///
/// `buffer` is scratch space; its length caps how many particles are visited.
pub fn reconcile(
    live: &[Projectile],
    pool: &mut impl ParticlePool,
    buffer: &mut [RenderedParticle],
) -> ReconcileReport {
    let count = pool.read_active(buffer);
    let mut report = ReconcileReport::default();

    for particle in &mut buffer[..count] {
        match find_projectile(live, particle.correlation) {
            Some(projectile) => {
                mirror(particle, projectile);
                report.reconciled += 1;
            }
            None => {
                debug!("particle {} has no live projectile; skipping", particle.correlation);
                report.orphaned += 1;
            }
        }
    }

    pool.write_active(&buffer[..count]);

    if report.orphaned > 0 {
        warn!(orphaned = report.orphaned, "particles without a live projectile were left untouched");
    }
    report
}
