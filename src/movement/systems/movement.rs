//! Movement domain: systems driving the controller from the frame loop.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    CollisionReadings, KnockBackRequest, KnockBackTriggered, MovementController, MovementEvent,
    MovementInput, MovementOccurred,
};

pub(crate) fn run_perception(
    input: Res<MovementInput>,
    mut query: Query<(
        &mut MovementController,
        &CollisionReadings,
        &mut LinearVelocity,
    )>,
) {
    for (mut controller, readings, mut velocity) in &mut query {
        controller.perception_tick(readings, &*input, &mut velocity.0);
    }
}

pub(crate) fn apply_knock_back_requests(
    mut requests: MessageReader<KnockBackRequest>,
    mut query: Query<(&mut MovementController, &mut LinearVelocity)>,
) {
    for request in requests.read() {
        let Ok((mut controller, mut velocity)) = query.get_mut(request.entity) else {
            warn!(
                "Knockback requested for {:?} which has no movement controller",
                request.entity
            );
            continue;
        };
        controller.knock_back(&mut velocity.0);
    }
}

pub(crate) fn advance_lockouts(time: Res<Time>, mut query: Query<&mut MovementController>) {
    let delta = time.delta();

    for mut controller in &mut query {
        controller.advance_lockouts(delta);
    }
}

pub(crate) fn run_physics(mut query: Query<(&mut MovementController, &mut LinearVelocity)>) {
    for (mut controller, mut velocity) in &mut query {
        controller.physics_tick(&mut velocity.0);
    }
}

/// Forward controller events to the renderer and to other domains.
pub(crate) fn dispatch_movement_events(
    mut query: Query<(Entity, &mut MovementController, Option<&mut Sprite>)>,
    mut knock_backs: MessageWriter<KnockBackTriggered>,
    mut occurred: MessageWriter<MovementOccurred>,
) {
    for (entity, mut controller, mut sprite) in &mut query {
        for event in controller.drain_events() {
            trace!("{:?}: {:?}", entity, event);
            occurred.write(MovementOccurred { entity, event });

            match event {
                MovementEvent::Flipped(facing) => {
                    if let Some(sprite) = sprite.as_mut() {
                        sprite.flip_x = !facing.is_right();
                    }
                }
                MovementEvent::KnockBackTriggered => {
                    knock_backs.write(KnockBackTriggered { entity });
                }
                _ => {}
            }
        }
    }
}
