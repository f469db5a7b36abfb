//! Projectile lifecycle messages.
//!
//! The emitter's instrumentation hooks are turned into Bevy **Messages** so debugging and
//! gameplay reactions live in their own systems instead of inside the stepper.

use bevy::prelude::*;

use super::components::{Projectile, ProjectileId};

#[derive(Message, Clone, Copy, Debug)]
pub struct ProjectileFired {
    pub emitter: Entity,
    pub id: ProjectileId,
    pub position: Vec3,
    pub velocity: Vec3,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct ProjectileHit {
    pub emitter: Entity,
    pub id: ProjectileId,
    pub point: Vec3,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct ProjectileExpired {
    pub emitter: Entity,
    pub id: ProjectileId,
    pub position: Vec3,
}

impl ProjectileFired {
    pub fn new(emitter: Entity, p: &Projectile) -> Self {
        Self { emitter, id: p.id, position: p.position, velocity: p.velocity }
    }
}

impl ProjectileHit {
    pub fn new(emitter: Entity, p: &Projectile) -> Self {
        Self { emitter, id: p.id, point: p.position }
    }
}

impl ProjectileExpired {
    pub fn new(emitter: Entity, p: &Projectile) -> Self {
        Self { emitter, id: p.id, position: p.position }
    }
}
