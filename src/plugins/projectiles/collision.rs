use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;

/// Environment ray test used by the stepper.
///
/// Returns the world-space hit point of the first obstacle along the ray, if any lies within
/// `max_distance`. A miss is the normal outcome, not an error.
pub trait RayOracle {
    fn cast(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Option<Vec3>;
}

impl<F> RayOracle for F
where
    F: Fn(Vec3, Dir3, f32) -> Option<Vec3>,
{
    #[inline]
    fn cast(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Option<Vec3> {
        self(origin, direction, max_distance)
    }
}

/// Empty scene: every query misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObstacles;

impl RayOracle for NoObstacles {
    #[inline]
    fn cast(&self, _origin: Vec3, _direction: Dir3, _max_distance: f32) -> Option<Vec3> {
        None
    }
}

/// Ray oracle backed by Avian's spatial query pipeline.
///
/// Only colliders that are members of [`Layer::World`] stop projectiles.
pub struct AvianRayOracle<'a, 'w, 's> {
    spatial: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> AvianRayOracle<'a, 'w, 's> {
    pub fn new(spatial: &'a SpatialQuery<'w, 's>) -> Self {
        Self {
            spatial,
            filter: world_filter(),
        }
    }

    /// Also ignore `entity` (typically the emitter's own collider).
    pub fn excluding(mut self, entity: Entity) -> Self {
        self.filter = self.filter.with_excluded_entities([entity]);
        self
    }
}

impl RayOracle for AvianRayOracle<'_, '_, '_> {
    fn cast(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Option<Vec3> {
        self.spatial
            .cast_ray(origin, direction, max_distance, true, &self.filter)
            .map(|hit| origin + direction * hit.distance)
    }
}

#[inline]
pub fn world_filter() -> SpatialQueryFilter {
    SpatialQueryFilter::from_mask(Layer::World)
}
