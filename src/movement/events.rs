//! Movement domain: controller output events and ECS messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::{Facing, Lockout};

/// Something the controller did that a collaborator may want to react to.
/// Collected per controller and drained by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementEvent {
    LeftGround,
    Landed,
    Jumped,
    WallJumped,
    DoubleJumped,
    /// Facing changed; the renderer should turn the character around.
    Flipped(Facing),
    KnockBackTriggered,
    LockoutReleased(Lockout),
}

/// Ask for an entity to be knocked back. Ignored while it is locked out.
#[derive(Debug)]
pub struct KnockBackRequest {
    pub entity: Entity,
}

impl Message for KnockBackRequest {}

/// Emitted when a knockback actually started.
#[derive(Debug)]
pub struct KnockBackTriggered {
    pub entity: Entity,
}

impl Message for KnockBackTriggered {}

/// Every controller event, tagged with the entity that produced it.
#[derive(Debug, Clone, Copy)]
pub struct MovementOccurred {
    pub entity: Entity,
    pub event: MovementEvent,
}

impl Message for MovementOccurred {}
