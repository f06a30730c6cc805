//! Movement domain: ground and wall probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CollisionReadings, Facing, MovementController, SensorTuning};

/// Both probes start at the body's center: one straight down, one along the
/// facing direction. Anything on the configured mask counts as a hit.
pub(crate) fn sample_collisions(
    spatial_query: SpatialQuery,
    sensors: Res<SensorTuning>,
    mut query: Query<(&Transform, &MovementController, &mut CollisionReadings)>,
) {
    let filter = SpatialQueryFilter::from_mask(sensors.layer_mask());

    for (transform, controller, mut readings) in &mut query {
        let origin = transform.translation.truncate();

        let grounded = spatial_query
            .cast_ray(
                origin,
                Dir2::NEG_Y,
                sensors.ground_check_distance,
                true,
                &filter,
            )
            .is_some();

        let wall_detected = spatial_query
            .cast_ray(
                origin,
                facing_dir(controller.facing()),
                sensors.wall_check_distance,
                true,
                &filter,
            )
            .is_some();

        let sampled = CollisionReadings {
            grounded,
            wall_detected,
        };
        if *readings != sampled {
            trace!(
                "Collision readings: grounded={}, wall_detected={}",
                grounded, wall_detected
            );
            *readings = sampled;
        }
    }
}

pub(crate) fn facing_dir(facing: Facing) -> Dir2 {
    match facing {
        Facing::Right => Dir2::X,
        Facing::Left => Dir2::NEG_X,
    }
}
