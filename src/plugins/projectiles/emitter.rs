//! The emitter: one tick = schedule → step → reconcile → flush pending → compact.
//!
//! # Invariants
//! - `live` is sorted by id. New projectiles are only ever appended, and compaction keeps order.
//! - A projectile is never stepped on the tick it was spawned: it waits in `pending` until
//!   after reconciliation.
//! - A projectile that dies on tick K is still in `live` during tick K's reconciliation
//!   (so its particle gets the expire-now sentinel) and is gone from tick K+1 on.

use std::time::Duration;

use bevy::prelude::*;

use super::collision::RayOracle;
use super::components::{Projectile, ProjectileId};
use super::config::{ConfigError, EmitterConfig, ValidatedConfig};
use super::pool::{EmitParams, ParticlePool, RenderedParticle};
use super::reconcile::reconcile;
use super::scheduler::{EmissionScheduler, TransformSource};
use super::stepper::{StepOutcome, step_all};

/// Upper bound on the reconciliation scratch buffer, whatever capacity a pool reports.
pub const MAX_RECONCILE_BATCH: usize = 1 << 16;

/// Instrumentation callbacks. All no-ops by default.
pub trait EmitterHooks {
    /// A projectile was handed to the particle pool and joined the live set.
    fn on_emit(&mut self, _projectile: &Projectile) {}

    /// A projectile stopped at an obstacle.
    fn on_collision(&mut self, _projectile: &Projectile) {}

    /// A projectile ran out of lifetime.
    fn on_expire(&mut self, _projectile: &Projectile) {}
}

impl EmitterHooks for () {}

/// Per-tick counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub emitted: usize,
    pub collided: usize,
    pub expired: usize,
    pub reconciled: usize,
    pub orphaned: usize,
    pub purged: usize,
}

impl TickReport {
    pub fn is_quiet(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Component, Debug, Clone)]
pub struct BulletEmitter {
    config: ValidatedConfig,
    scheduler: EmissionScheduler,
    live: Vec<Projectile>,
    pending: Vec<Projectile>,
    scratch: Vec<RenderedParticle>,
}

impl BulletEmitter {
    pub fn new(config: EmitterConfig) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        Ok(Self {
            config,
            scheduler: EmissionScheduler::default(),
            live: Vec::new(),
            pending: Vec::new(),
            scratch: vec![RenderedParticle::default(); config.particle_capacity()],
        })
    }

    #[inline]
    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Projectiles currently simulated, in id order.
    #[inline]
    pub fn live(&self) -> &[Projectile] {
        &self.live
    }

    /// Spawned but not yet flushed. Empty between ticks.
    #[inline]
    pub fn pending(&self) -> &[Projectile] {
        &self.pending
    }

    #[inline]
    pub fn next_id(&self) -> ProjectileId {
        self.scheduler.next_id()
    }

    #[inline]
    pub fn get(&self, id: ProjectileId) -> Option<&Projectile> {
        super::reconcile::find_projectile(&self.live, id)
    }

    /// Run one full tick.
    pub fn tick(
        &mut self,
        dt: Duration,
        muzzle: &impl TransformSource,
        oracle: &impl RayOracle,
        pool: &mut impl ParticlePool,
        hooks: &mut impl EmitterHooks,
    ) -> TickReport {
        let mut report = TickReport::default();
        let dt_secs = dt.as_secs_f32();

        // (1) schedule
        self.scheduler
            .advance(dt, &self.config, muzzle, &mut self.pending);

        // (2) step (pending projectiles are not part of `live` yet)
        step_all(&mut self.live, dt_secs, oracle, |projectile, outcome| match outcome {
            StepOutcome::Collided => {
                report.collided += 1;
                hooks.on_collision(projectile);
            }
            StepOutcome::Expired => {
                report.expired += 1;
                hooks.on_expire(projectile);
            }
            StepOutcome::Moved | StepOutcome::Skipped => {}
        });

        // (3) reconcile: the scratch buffer must cover every particle the pool can hold
        let batch = pool.capacity().min(MAX_RECONCILE_BATCH);
        if self.scratch.len() < batch {
            self.scratch.resize(batch, RenderedParticle::default());
        }
        let reconciled = reconcile(&self.live, pool, &mut self.scratch);
        report.reconciled = reconciled.reconciled;
        report.orphaned = reconciled.orphaned;

        // (4) flush pending
        for projectile in self.pending.drain(..) {
            pool.emit(EmitParams {
                position: projectile.position,
                velocity: projectile.velocity,
                correlation: projectile.id,
                start_lifetime: projectile.lifetime,
            });
            hooks.on_emit(&projectile);
            self.live.push(projectile);
            report.emitted += 1;
        }

        // (5) compact
        let before = self.live.len();
        self.live.retain(Projectile::is_alive);
        report.purged = before - self.live.len();

        if !report.is_quiet() {
            trace!(?report, live = self.live.len(), "emitter tick");
        }
        report
    }
}
