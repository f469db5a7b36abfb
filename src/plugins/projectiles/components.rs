use std::fmt;

use bevy::prelude::*;

/// Correlation key between a projectile and its rendered particle.
///
/// Issued in strictly increasing order by the emission scheduler and never reused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectileId(pub u64);

impl fmt::Display for ProjectileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Authoritative state of one fired bullet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub id: ProjectileId,
    pub position: Vec3,
    /// Constant once spawned.
    pub velocity: Vec3,
    /// Seconds left before natural expiry.
    pub lifetime: f32,
    alive: bool,
}

impl Projectile {
    pub fn new(id: ProjectileId, position: Vec3, velocity: Vec3, lifetime: f32) -> Self {
        Self { id, position, velocity, lifetime, alive: true }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// One-way transition; there is no way back to alive.
    #[inline]
    pub fn retire(&mut self) {
        self.alive = false;
    }
}
