//! Movement domain: locomotion controller, sensing and frame-loop wiring.
//!
//! Per frame the perception chain (lockout timers, input, probes, controller
//! perception, knockback requests) runs before the fixed main loop, so every
//! physics step of a frame sees that frame's input and lockouts. Physics steps run
//! in `FixedUpdate`; controller events are dispatched in `Update`.

mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod interfaces;
mod lockout;
mod resources;
mod state;
pub(crate) mod systems;


pub use components::{CollisionReadings, Facing, GameLayer, Ground, Player, Wall};
pub use controller::MovementController;
pub use events::{KnockBackRequest, KnockBackTriggered, MovementEvent, MovementOccurred};
pub use interfaces::{Axis, CollisionSensor, Edge, InputSample, InputSource};
pub use lockout::{Lockout, LockoutTimers};
pub use resources::{MovementInput, MovementTuning, SensorTuning, TuningError};
pub use state::{LocomotionMode, LockoutOverlay, MovementState};

use bevy::app::{RunFixedMainLoop, RunFixedMainLoopSystems};
use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    advance_lockouts, apply_knock_back_requests, dispatch_movement_events, read_input,
    run_perception, run_physics, sample_collisions,
};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSystems {
    Perception,
    Dispatch,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<SensorTuning>()
            .init_resource::<MovementInput>()
            .add_message::<KnockBackRequest>()
            .add_message::<KnockBackTriggered>()
            .add_message::<MovementOccurred>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                RunFixedMainLoop,
                (
                    advance_lockouts,
                    read_input,
                    sample_collisions,
                    run_perception,
                    apply_knock_back_requests,
                )
                    .chain()
                    .in_set(RunFixedMainLoopSystems::BeforeFixedMainLoop)
                    .in_set(MovementSystems::Perception),
            )
            .add_systems(FixedUpdate, run_physics)
            .add_systems(
                Update,
                dispatch_movement_events.in_set(MovementSystems::Dispatch),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room)
            .add_systems(Update, dev::draw_sensor_rays);
    }
}
