//! Movement domain: tuning and input resources.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Axis, Edge, GameLayer, InputSource};

/// Controller constants. Read-only once a controller has been built from them.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementTuning {
    pub run_speed: f32,
    pub jump_height: f32,
    pub double_jump_height: f32,
    /// Multiplier applied to falling speed while sliding on a wall without
    /// holding down. Holding down always uses 1.0.
    pub wall_slide_speed_modifier: f32,
    /// Seconds of horizontal lockout after a wall jump.
    pub wall_jump_duration: f32,
    /// Seconds of input lockout after a knockback.
    pub knock_back_duration: f32,
    /// Launch velocity of a wall jump, x mirrored away from the facing direction.
    pub wall_jump_direction: Vec2,
    /// Launch velocity of a knockback, x mirrored away from the facing direction.
    pub knock_back_direction: Vec2,
    /// When set, a wall jump only cancels a previous wall-jump lockout instead
    /// of every running lockout.
    pub scoped_lockout_cancel: bool,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            run_speed: 320.0,
            jump_height: 680.0,
            double_jump_height: 560.0,
            wall_slide_speed_modifier: 0.5,
            wall_jump_duration: 0.2,
            knock_back_duration: 0.5,
            wall_jump_direction: Vec2::new(320.0, 640.0),
            knock_back_direction: Vec2::new(260.0, 360.0),
            scoped_lockout_cancel: false,
        }
    }
}

impl MovementTuning {
    /// Every problem with this tuning, empty when it is usable.
    pub fn issues(&self) -> Vec<TuningError> {
        let mut issues = Vec::new();

        let scalars = [
            ("run_speed", self.run_speed),
            ("jump_height", self.jump_height),
            ("double_jump_height", self.double_jump_height),
            ("wall_slide_speed_modifier", self.wall_slide_speed_modifier),
            ("wall_jump_duration", self.wall_jump_duration),
            ("knock_back_duration", self.knock_back_duration),
            ("wall_jump_direction.x", self.wall_jump_direction.x),
            ("wall_jump_direction.y", self.wall_jump_direction.y),
            ("knock_back_direction.x", self.knock_back_direction.x),
            ("knock_back_direction.y", self.knock_back_direction.y),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                issues.push(TuningError::new(field, "must be a finite number"));
            }
        }

        for (field, value) in [
            ("run_speed", self.run_speed),
            ("jump_height", self.jump_height),
            ("double_jump_height", self.double_jump_height),
        ] {
            if value < 0.0 {
                issues.push(TuningError::new(field, "must not be negative"));
            }
        }

        if !(0.0..=1.0).contains(&self.wall_slide_speed_modifier) {
            issues.push(TuningError::new(
                "wall_slide_speed_modifier",
                "must be within [0, 1]",
            ));
        }

        for (field, value) in [
            ("wall_jump_duration", self.wall_jump_duration),
            ("knock_back_duration", self.knock_back_duration),
        ] {
            // Upper bound keeps Duration::from_secs_f32 in range.
            if !(value > 0.0 && value < 3600.0) {
                issues.push(TuningError::new(field, "must be between 0 and 3600 seconds"));
            }
        }

        issues
    }

    /// Fails with the first problem found.
    pub fn validate(&self) -> Result<(), TuningError> {
        match self.issues().into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }
}

/// A tuning value the controller refuses to run with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuningError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl TuningError {
    fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid movement tuning '{}': {}", self.field, self.reason)
    }
}

impl std::error::Error for TuningError {}

/// Ray lengths and collision mask used by the ground and wall probes.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SensorTuning {
    pub ground_check_distance: f32,
    pub wall_check_distance: f32,
    pub ground_mask: Vec<GameLayer>,
}

impl Default for SensorTuning {
    fn default() -> Self {
        Self {
            ground_check_distance: 26.0,
            wall_check_distance: 14.0,
            ground_mask: vec![GameLayer::Ground, GameLayer::Wall],
        }
    }
}

impl SensorTuning {
    pub fn layer_mask(&self) -> LayerMask {
        self.ground_mask
            .iter()
            .fold(LayerMask::NONE, |mask, layer| mask | LayerMask::from(*layer))
    }
}

/// Logical input for the current frame, filled from the keyboard.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub knock_back_just_pressed: bool,
}

impl InputSource for MovementInput {
    fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.axis.x,
            Axis::Vertical => self.axis.y,
        }
    }

    fn edge(&self, edge: Edge) -> bool {
        match edge {
            Edge::Jump => self.jump_just_pressed,
            Edge::DebugKnockBack => self.knock_back_just_pressed,
        }
    }
}
