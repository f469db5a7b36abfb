//! Particle pool capability + the in-process mirror implementation.
//!
//! The emitter sees the pool only through [`ParticlePool`]: one `emit` per new projectile and
//! a bulk read/write of the active set each tick. Whatever aging the pool does on its own is
//! overwritten by reconciliation, so it never acts as a second clock.

use bevy::prelude::*;

use super::components::ProjectileId;
use super::config::DEFAULT_PARTICLE_CAPACITY;

/// `remaining_lifetime` written for particles whose projectile has died: expire now.
pub const EXPIRE_NOW: f32 = -1.0;

/// Visual-only particle, owned by the pool.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderedParticle {
    pub correlation: ProjectileId,
    pub position: Vec3,
    pub velocity: Vec3,
    pub remaining_lifetime: f32,
    pub start_lifetime: f32,
}

/// Parameters for creating one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitParams {
    pub position: Vec3,
    pub velocity: Vec3,
    pub correlation: ProjectileId,
    pub start_lifetime: f32,
}

impl From<EmitParams> for RenderedParticle {
    fn from(p: EmitParams) -> Self {
        Self {
            correlation: p.correlation,
            position: p.position,
            velocity: p.velocity,
            remaining_lifetime: p.start_lifetime,
            start_lifetime: p.start_lifetime,
        }
    }
}

pub trait ParticlePool {
    /// Create one particle. Capacity handling is the pool's decision.
    fn emit(&mut self, params: EmitParams);

    /// Copy the active particles into `buffer`; returns how many were written.
    fn read_active(&self, buffer: &mut [RenderedParticle]) -> usize;

    /// Overwrite the first `particles.len()` active particles, in `read_active` order.
    fn write_active(&mut self, particles: &[RenderedParticle]);

    fn capacity(&self) -> usize;
}

/// In-process particle pool kept on the emitter entity.
///
/// A display mirror: it ages particles like a renderer would, and drops them once their
/// remaining lifetime reaches zero (which is how the `EXPIRE_NOW` sentinel takes effect).
#[derive(Component, Debug, Clone)]
pub struct ParticleMirror {
    active: Vec<RenderedParticle>,
    capacity: usize,
    dropped: u64,
}

impl Default for ParticleMirror {
    fn default() -> Self {
        Self::new(DEFAULT_PARTICLE_CAPACITY)
    }
}

impl ParticleMirror {
    pub fn new(capacity: usize) -> Self {
        Self {
            active: Vec::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    #[inline]
    pub fn particles(&self) -> &[RenderedParticle] {
        &self.active
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Emits refused because the mirror was full.
    #[inline]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn find(&self, correlation: ProjectileId) -> Option<&RenderedParticle> {
        self.active.iter().find(|p| p.correlation == correlation)
    }

    /// The pool's own clock: integrate, count down, drop expired particles.
    pub fn age(&mut self, dt: f32) {
        self.active.retain_mut(|p| {
            if p.remaining_lifetime <= 0.0 {
                return false;
            }
            p.position += p.velocity * dt;
            p.remaining_lifetime -= dt;
            p.remaining_lifetime > 0.0
        });
    }
}

impl ParticlePool for ParticleMirror {
    fn emit(&mut self, params: EmitParams) {
        if self.active.len() >= self.capacity {
            // Capacity decision, not a correctness failure.
            self.dropped += 1;
            debug!("particle mirror full ({}), dropping {}", self.capacity, params.correlation);
            return;
        }
        self.active.push(params.into());
    }

    fn read_active(&self, buffer: &mut [RenderedParticle]) -> usize {
        let n = self.active.len().min(buffer.len());
        buffer[..n].copy_from_slice(&self.active[..n]);
        n
    }

    fn write_active(&mut self, particles: &[RenderedParticle]) {
        let n = particles.len().min(self.active.len());
        self.active[..n].copy_from_slice(&particles[..n]);
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }
}
