//! Emitter configuration and its construction-time contract.
//!
//! # Fail-fast invariants
//! Values are checked once, in [`EmitterConfig::validate`]. The tick path then treats
//! `shot_interval > 0`, `speed > 0` and a finite lifetime budget as facts.

use std::time::Duration;

use thiserror::Error;

/// Default capacity of the particle mirror (concurrently active particles).
pub const DEFAULT_PARTICLE_CAPACITY: usize = 2048;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("shot interval must be > 0 seconds, got {0}")]
    NonPositiveShotInterval(f32),

    #[error("shot interval is not a representable duration: {0}")]
    InvalidShotInterval(f32),

    #[error("projectile speed must be finite and > 0, got {0}")]
    NonPositiveSpeed(f32),

    #[error("max range must be finite and >= 0, got {0}")]
    InvalidMaxRange(f32),

    #[error("particle capacity must be > 0")]
    ZeroParticleCapacity,
}

/// Raw emitter settings, as authored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitterConfig {
    /// Distance a projectile may travel before it expires.
    pub max_range: f32,
    /// Distance per second.
    pub speed: f32,
    /// Seconds between shots.
    pub shot_interval: f32,
    pub particle_capacity: usize,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            max_range: 500.0,
            speed: 700.0,
            shot_interval: 0.5,
            particle_capacity: DEFAULT_PARTICLE_CAPACITY,
        }
    }
}

impl EmitterConfig {
    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed(self.speed));
        }
        if !self.max_range.is_finite() || self.max_range < 0.0 {
            return Err(ConfigError::InvalidMaxRange(self.max_range));
        }
        if self.shot_interval.is_nan() {
            return Err(ConfigError::InvalidShotInterval(self.shot_interval));
        }
        if self.shot_interval <= 0.0 {
            return Err(ConfigError::NonPositiveShotInterval(self.shot_interval));
        }
        let shot_interval = Duration::try_from_secs_f32(self.shot_interval)
            .map_err(|_| ConfigError::InvalidShotInterval(self.shot_interval))?;
        // Sub-nanosecond intervals round to zero and would never leave the emission loop.
        if shot_interval.is_zero() {
            return Err(ConfigError::NonPositiveShotInterval(self.shot_interval));
        }
        if self.particle_capacity == 0 {
            return Err(ConfigError::ZeroParticleCapacity);
        }

        Ok(ValidatedConfig {
            max_range: self.max_range,
            speed: self.speed,
            shot_interval,
            lifetime: self.max_range / self.speed,
            particle_capacity: self.particle_capacity,
        })
    }
}

/// Settings that passed [`EmitterConfig::validate`].
///
/// Only constructible through validation, so holding one is proof of the contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedConfig {
    max_range: f32,
    speed: f32,
    shot_interval: Duration,
    lifetime: f32,
    particle_capacity: usize,
}

impl ValidatedConfig {
    #[inline]
    pub fn max_range(&self) -> f32 {
        self.max_range
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn shot_interval(&self) -> Duration {
        self.shot_interval
    }

    /// Seconds needed to cover `max_range` at `speed`.
    #[inline]
    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    #[inline]
    pub fn particle_capacity(&self) -> usize {
        self.particle_capacity
    }
}
