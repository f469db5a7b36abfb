//! Debug toggles: break on emit / collision, and a forced frame delta.
//!
//! These are instrumentation only. They react to lifecycle messages and never touch the
//! emitter's state; a break moves the app to [`SimState::Halted`], which freezes emitters.

use std::time::Duration;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::common::state::SimState;

use super::messages::{ProjectileFired, ProjectileHit};

#[derive(Resource, Debug, Clone, Default)]
pub struct DebugToggles {
    /// Halt after any tick that fired a projectile.
    pub break_on_emit: bool,
    /// Halt after any tick with a collision.
    pub break_on_collision: bool,
    /// Drive every frame with this exact delta instead of wall-clock time.
    pub forced_step: Option<Duration>,
}

pub fn break_on_events(
    toggles: Res<DebugToggles>,
    mut fired: MessageReader<ProjectileFired>,
    mut hit: MessageReader<ProjectileHit>,
    mut next: ResMut<NextState<SimState>>,
) {
    // Always drain so stale messages don't trigger a break when a toggle is flipped later.
    let emitted = fired.read().last().copied();
    let collided = hit.read().last().copied();

    if toggles.break_on_emit {
        if let Some(ev) = emitted {
            info!("break on emit: {} from {}", ev.id, ev.emitter);
            next.set(SimState::Halted);
        }
    }
    if toggles.break_on_collision {
        if let Some(ev) = collided {
            info!("break on collision: {} at {}", ev.id, ev.point);
            next.set(SimState::Halted);
        }
    }
}

/// Install (or remove) the manual time step when the toggle changes.
pub fn apply_forced_step(
    toggles: Res<DebugToggles>,
    mut applied: Local<Option<Duration>>,
    strategy: Option<ResMut<TimeUpdateStrategy>>,
) {
    if toggles.forced_step == *applied {
        return;
    }
    let Some(mut strategy) = strategy else {
        return;
    };
    *strategy = match toggles.forced_step {
        Some(step) => TimeUpdateStrategy::ManualDuration(step),
        None => TimeUpdateStrategy::Automatic,
    };
    *applied = toggles.forced_step;
}
