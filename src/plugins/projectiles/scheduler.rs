//! Emission scheduler: fixed-interval shots from an accumulated clock.
//!
//! Time is accumulated as [`Duration`] (integer nanoseconds), so the number of shots over a
//! span of time does not depend on how that span was sliced into ticks.

use std::time::Duration;

use bevy::prelude::*;

use super::components::{Projectile, ProjectileId};
use super::config::ValidatedConfig;

/// Where shots leave from, sampled at the moment of each emission.
pub trait TransformSource {
    fn origin(&self) -> Vec3;
    fn forward(&self) -> Dir3;
}

impl TransformSource for GlobalTransform {
    #[inline]
    fn origin(&self) -> Vec3 {
        self.translation()
    }

    #[inline]
    fn forward(&self) -> Dir3 {
        GlobalTransform::forward(self)
    }
}

impl TransformSource for Transform {
    #[inline]
    fn origin(&self) -> Vec3 {
        self.translation
    }

    #[inline]
    fn forward(&self) -> Dir3 {
        Transform::forward(self)
    }
}

/// Plain origin + direction pair, for callers without a transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Muzzle {
    pub origin: Vec3,
    pub forward: Dir3,
}

impl TransformSource for Muzzle {
    #[inline]
    fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    fn forward(&self) -> Dir3 {
        self.forward
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmissionScheduler {
    elapsed: Duration,
    next_id: u64,
}

impl EmissionScheduler {
    /// Time carried over towards the next shot.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Id the next spawned projectile will receive.
    #[inline]
    pub fn next_id(&self) -> ProjectileId {
        ProjectileId(self.next_id)
    }

    /// Accumulate `dt` and push one projectile into `out` per whole interval crossed.
    ///
    /// Returns the number of projectiles spawned.
    pub fn advance(
        &mut self,
        dt: Duration,
        config: &ValidatedConfig,
        muzzle: &impl TransformSource,
        out: &mut Vec<Projectile>,
    ) -> usize {
        let interval = config.shot_interval();
        self.elapsed = self.elapsed.saturating_add(dt);

        let mut spawned = 0;
        while self.elapsed >= interval {
            let id = ProjectileId(self.next_id);
            self.next_id += 1;

            out.push(Projectile::new(
                id,
                muzzle.origin(),
                muzzle.forward() * config.speed(),
                config.lifetime(),
            ));

            self.elapsed -= interval;
            spawned += 1;
        }
        spawned
    }
}
