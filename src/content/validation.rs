//! Validation for loaded movement content.

use super::data::{MOVEMENT_SCHEMA_VERSION, MovementConfigDef};
use crate::movement::{GameLayer, MovementTuning};

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a movement config.
/// Returns a list of validation errors, empty if the config is usable.
pub fn validate_movement_config(config: &MovementConfigDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.schema_version != MOVEMENT_SCHEMA_VERSION {
        errors.push(ValidationError {
            section: "movement.ron",
            field: "schema_version",
            message: format!(
                "expected {}, found {}",
                MOVEMENT_SCHEMA_VERSION, config.schema_version
            ),
        });
    }

    for issue in MovementTuning::from(&config.movement).issues() {
        errors.push(ValidationError {
            section: "movement",
            field: issue.field,
            message: issue.reason.to_string(),
        });
    }

    let sensors = &config.sensors;
    for (field, value) in [
        ("ground_check_distance", sensors.ground_check_distance),
        ("wall_check_distance", sensors.wall_check_distance),
    ] {
        if !(value.is_finite() && value > 0.0) {
            errors.push(ValidationError {
                section: "sensors",
                field,
                message: format!("must be a positive distance, found {}", value),
            });
        }
    }

    if sensors.ground_mask.is_empty() {
        errors.push(ValidationError {
            section: "sensors",
            field: "ground_mask",
            message: "must name at least one layer".to_string(),
        });
    }

    // The probes start inside the player's own collider.
    if sensors.ground_mask.contains(&GameLayer::Player) {
        errors.push(ValidationError {
            section: "sensors",
            field: "ground_mask",
            message: "must not include the Player layer".to_string(),
        });
    }

    errors
}
