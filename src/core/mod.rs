//! Core domain: camera, simulation rates and world gravity.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Fixed physics step rate.
pub const PHYSICS_HZ: f64 = 50.0;

/// Downward acceleration in pixels per second squared.
pub const GRAVITY: f32 = 1800.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ))
            .insert_resource(Gravity(Vec2::NEG_Y * GRAVITY))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
