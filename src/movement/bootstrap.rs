//! Movement domain: player bootstrap from the loaded tuning.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementController, MovementTuning, Player};

/// Spawn the player with a controller built from the current tuning.
/// Invalid tuning stops the app instead of spawning a broken controller.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    mut exit: MessageWriter<AppExit>,
) {
    let controller = match MovementController::new(tuning.clone()) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Cannot spawn player: {}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    info!(
        "Spawning player: run_speed={}, jump_height={}, double_jump_height={}",
        tuning.run_speed, tuning.jump_height, tuning.double_jump_height
    );

    commands.spawn((
        Player,
        controller,
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
