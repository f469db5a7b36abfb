//! Motion + collision step for live projectiles.

use bevy::prelude::*;

use super::collision::RayOracle;
use super::components::Projectile;

/// Displacements at or below this length skip the ray query entirely.
pub const MIN_STEP: f32 = 1e-6;

/// What happened to one projectile during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Already dead before this step; left untouched.
    Skipped,
    Moved,
    Collided,
    Expired,
}

/// Advance one projectile by `dt` seconds.
///
/// A hit snaps to the hit point and pre-empts the lifetime countdown. A miss moves the full
/// displacement, then counts down; the projectile keeps the position where its budget ran out.
pub fn step_projectile(projectile: &mut Projectile, dt: f32, oracle: &impl RayOracle) -> StepOutcome {
    if !projectile.is_alive() {
        return StepOutcome::Skipped;
    }

    let displacement = projectile.velocity * dt;
    let distance = displacement.length();

    if distance.is_finite() && distance > MIN_STEP {
        // velocity is nonzero here, so the direction is valid
        if let Ok(direction) = Dir3::new(projectile.velocity) {
            if let Some(hit) = oracle.cast(projectile.position, direction, distance) {
                projectile.position = hit;
                projectile.retire();
                return StepOutcome::Collided;
            }
        }
        projectile.position += displacement;
    }

    projectile.lifetime -= dt;
    if projectile.lifetime <= 0.0 {
        projectile.retire();
        return StepOutcome::Expired;
    }
    StepOutcome::Moved
}

/// Step every projectile in input order, reporting each outcome to `on_outcome`.
pub fn step_all(
    projectiles: &mut [Projectile],
    dt: f32,
    oracle: &impl RayOracle,
    mut on_outcome: impl FnMut(&Projectile, StepOutcome),
) {
    for projectile in projectiles.iter_mut() {
        let outcome = step_projectile(projectile, dt, oracle);
        on_outcome(projectile, outcome);
    }
}
