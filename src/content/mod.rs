//! Content domain: data-driven movement configuration.

mod data;
mod loader;
mod validation;

pub use data::{MOVEMENT_SCHEMA_VERSION, MovementConfigDef, MovementTuningDef, SensorTuningDef};
pub use loader::{ContentLoadError, MOVEMENT_FILE, load_movement_config, parse_single};
pub use validation::{ValidationError, validate_movement_config};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::movement::{MovementTuning, SensorTuning};

/// Where content files are read from.
#[derive(Resource, Debug, Clone)]
pub struct ContentPaths {
    pub data_dir: PathBuf,
}

pub struct ContentPlugin {
    pub data_dir: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets/data"),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ContentPaths {
            data_dir: self.data_dir.clone(),
        })
        .add_systems(PreStartup, load_movement_content);
    }
}

/// Replace the default tuning with movement.ron. Load or validation failures
/// are logged and leave the defaults in place.
fn load_movement_content(mut commands: Commands, paths: Res<ContentPaths>) {
    let config = match load_movement_config(&paths.data_dir) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            warn!("Using default movement tuning");
            return;
        }
    };

    let errors = validate_movement_config(&config);
    if !errors.is_empty() {
        for e in &errors {
            error!("Invalid movement config: {}", e);
        }
        warn!(
            "Using default movement tuning ({} validation errors)",
            errors.len()
        );
        return;
    }

    let tuning = MovementTuning::from(&config.movement);
    let sensors = SensorTuning::from(&config.sensors);
    info!(
        "Loaded movement config: run_speed={}, wall_jump_duration={}s, knock_back_duration={}s, ground_mask={:?}",
        tuning.run_speed, tuning.wall_jump_duration, tuning.knock_back_duration, sensors.ground_mask
    );

    commands.insert_resource(tuning);
    commands.insert_resource(sensors);
}
