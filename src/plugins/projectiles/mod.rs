//! Projectiles plugin: fixed-interval bullet emitters mirrored onto particle pools.
//!
//! # Philosophy: the simulation is the truth
//! Each emitter owns an authoritative list of projectiles. The particle pool is a display
//! mirror: every tick its particles are overwritten from the simulation, so whatever aging
//! the pool does on its own can never drift from what the projectiles actually did.
//!
//! The emitter core ([`emitter::BulletEmitter`]) is plain Rust over three capabilities:
//! - [`scheduler::TransformSource`]: where shots leave from,
//! - [`collision::RayOracle`]: what stops them,
//! - [`pool::ParticlePool`]: where they are shown.
//! The systems in [`systems`] plug Bevy/Avian implementations into those seams.
//!
//! # Data flow (one tick, per emitter)
//! ```text
//!   Update (variable dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) Schedule: accumulate dt, spawn one projectile per whole interval      │
//!│      - writes: pending                                                     │
//!│                                                                            │
//!│  (B) Step: move live projectiles, ray test the swept segment               │
//!│      - hit  -> snap to hit point, retire              (ProjectileHit)      │
//!│      - miss -> move, count down, retire at <= 0       (ProjectileExpired)  │
//!│                                                                            │
//!│  (C) Reconcile: read mirror, overwrite from live (dead -> expire-now)      │
//!│                                                                            │
//!│  (D) Flush: emit particle per pending projectile, append to live           │
//!│                                                       (ProjectileFired)    │
//!│                                                                            │
//!│  (E) Compact: drop retired projectiles                                     │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   PostUpdate
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (F) Mirror aging: integrate particles, drop expired ones                  │
//!│  (G) Debug: halt the simulation on emit / collision if toggled             │
//!└────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Where do we still branch?
//! - Ray queries: a miss is the common case, not an error.
//! - Orphan particles (no projectile with that id): warn and skip that particle.
//! - Mirror capacity: a full mirror drops the emit (capacity decision).
//! Bad configuration never reaches a tick: [`config::EmitterConfig::validate`] rejects it.

pub mod components;
pub mod config;
pub mod collision;
pub mod pool;

pub mod scheduler;
pub mod stepper;
pub mod reconcile;
pub mod emitter;

pub mod messages;
pub mod systems;
pub mod debug;

use bevy::prelude::*;

use crate::common::state::SimState;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<messages::ProjectileFired>()
            .add_message::<messages::ProjectileHit>()
            .add_message::<messages::ProjectileExpired>();

        app.init_resource::<debug::DebugToggles>();

        app.add_systems(
            Update,
            systems::tick_emitters.run_if(in_state(SimState::Running)),
        );

        app.add_systems(
            PostUpdate,
            systems::age_mirrors.run_if(in_state(SimState::Running)),
        );

        app.add_systems(PostUpdate, debug::break_on_events);

        app.add_systems(Last, debug::apply_forced_step);
    }
}
