//! Data definitions for the movement RON file.
//!
//! These structs mirror assets/data/movement.ron and are only used for
//! deserialization; the runtime resources are built from them.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{GameLayer, MovementTuning, SensorTuning};

/// Schema version this build understands.
pub const MOVEMENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementConfigDef {
    pub schema_version: u32,
    pub movement: MovementTuningDef,
    pub sensors: SensorTuningDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementTuningDef {
    pub run_speed: f32,
    pub jump_height: f32,
    pub double_jump_height: f32,
    #[serde(default = "default_wall_slide_speed_modifier")]
    pub wall_slide_speed_modifier: f32,
    pub wall_jump_duration: f32,
    pub knock_back_duration: f32,
    pub wall_jump_direction: (f32, f32),
    pub knock_back_direction: (f32, f32),
    #[serde(default)]
    pub scoped_lockout_cancel: bool,
}

fn default_wall_slide_speed_modifier() -> f32 {
    0.5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SensorTuningDef {
    pub ground_check_distance: f32,
    pub wall_check_distance: f32,
    pub ground_mask: Vec<GameLayer>,
}

impl From<&MovementTuningDef> for MovementTuning {
    fn from(def: &MovementTuningDef) -> Self {
        Self {
            run_speed: def.run_speed,
            jump_height: def.jump_height,
            double_jump_height: def.double_jump_height,
            wall_slide_speed_modifier: def.wall_slide_speed_modifier,
            wall_jump_duration: def.wall_jump_duration,
            knock_back_duration: def.knock_back_duration,
            wall_jump_direction: Vec2::new(def.wall_jump_direction.0, def.wall_jump_direction.1),
            knock_back_direction: Vec2::new(def.knock_back_direction.0, def.knock_back_direction.1),
            scoped_lockout_cancel: def.scoped_lockout_cancel,
        }
    }
}

impl From<&SensorTuningDef> for SensorTuning {
    fn from(def: &SensorTuningDef) -> Self {
        Self {
            ground_check_distance: def.ground_check_distance,
            wall_check_distance: def.wall_check_distance,
            ground_mask: def.ground_mask.clone(),
        }
    }
}
