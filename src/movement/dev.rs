//! Movement domain: debug-only test room and sensor ray gizmos.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::collisions::facing_dir;
use crate::movement::{GameLayer, Ground, MovementController, SensorTuning, Wall};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Floor and platforms
    for (size, position, color) in [
        (Vec2::new(800.0, 40.0), Vec2::new(0.0, -200.0), ground_color),
        (Vec2::new(150.0, 20.0), Vec2::new(-250.0, -50.0), platform_color),
        (Vec2::new(150.0, 20.0), Vec2::new(250.0, 50.0), platform_color),
    ] {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }

    // Outer walls and a pillar for wall jumping practice
    for (size, position) in [
        (Vec2::new(40.0, 500.0), Vec2::new(-420.0, 50.0)),
        (Vec2::new(40.0, 500.0), Vec2::new(420.0, 50.0)),
        (Vec2::new(30.0, 200.0), Vec2::new(-100.0, -80.0)),
    ] {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
        ));
    }
}

/// Draw both probe rays in yellow.
pub(crate) fn draw_sensor_rays(
    mut gizmos: Gizmos,
    sensors: Res<SensorTuning>,
    query: Query<(&Transform, &MovementController)>,
) {
    let color = Color::srgb(1.0, 1.0, 0.0);

    for (transform, controller) in &query {
        let origin = transform.translation.truncate();
        let wall_dir = facing_dir(controller.facing());

        gizmos.line_2d(
            origin,
            origin + Vec2::NEG_Y * sensors.ground_check_distance,
            color,
        );
        gizmos.line_2d(
            origin,
            origin + *wall_dir * sensors.wall_check_distance,
            color,
        );
    }
}
