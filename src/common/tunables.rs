//! Tunable emitter constants.

use bevy::prelude::*;

use crate::plugins::projectiles::config::{DEFAULT_PARTICLE_CAPACITY, EmitterConfig};

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub max_range: f32,
    pub bullet_speed: f32,
    pub shot_interval: f32,
    pub particle_capacity: usize,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            max_range: 500.0,
            bullet_speed: 700.0,
            shot_interval: 0.5,
            particle_capacity: DEFAULT_PARTICLE_CAPACITY,
        }
    }
}

impl Tunables {
    pub fn emitter_config(&self) -> EmitterConfig {
        EmitterConfig {
            max_range: self.max_range,
            speed: self.bullet_speed,
            shot_interval: self.shot_interval,
            particle_capacity: self.particle_capacity,
        }
    }
}
