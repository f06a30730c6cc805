//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::sample_collisions;
pub(crate) use input::read_input;
pub(crate) use movement::{
    advance_lockouts, apply_knock_back_requests, dispatch_movement_events, run_perception,
    run_physics,
};
