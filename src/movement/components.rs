//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::CollisionSensor;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Which way the character looks. Mirrored vectors (wall jump, knockback)
/// take their sign from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 when facing right, -1 when facing left.
    pub fn sign(self) -> i8 {
        match self {
            Facing::Right => 1,
            Facing::Left => -1,
        }
    }

    pub fn direction(self) -> f32 {
        f32::from(self.sign())
    }

    pub fn is_right(self) -> bool {
        self == Facing::Right
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Latest ground/wall probe results, refreshed once per perception tick.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollisionReadings {
    pub grounded: bool,
    pub wall_detected: bool,
}

impl CollisionSensor for CollisionReadings {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn is_wall_detected(&self) -> bool {
        self.wall_detected
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
