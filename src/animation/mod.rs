//! Animation domain: parameters mirrored from locomotion and the clip
//! selection driven by them.
//!
//! Playback itself is out of our hands; this module only keeps the values an
//! animator would consume up to date and picks the clip they imply.


use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{CollisionReadings, CollisionSensor, KnockBackTriggered, MovementSystems};

/// How long the knockback clip holds before regular selection resumes.
const KNOCK_BACK_CLIP_SECS: f32 = 0.4;

/// Horizontal speed under which the character counts as standing still.
const RUN_THRESHOLD: f32 = 0.1;

/// Continuous values published every perception frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationFrame {
    pub speed: f32,
    pub y_velocity: f32,
    pub grounded: bool,
    pub wall_detected: bool,
}

impl AnimationFrame {
    pub fn sample(sensor: &impl CollisionSensor, velocity: Vec2) -> Self {
        Self {
            speed: velocity.x.abs(),
            y_velocity: velocity.y,
            grounded: sensor.is_grounded(),
            wall_detected: sensor.is_wall_detected(),
        }
    }
}

/// Receives locomotion output for presentation.
pub trait AnimationSink {
    fn publish(&mut self, frame: AnimationFrame);
    fn trigger_knock_back(&mut self);
}

/// Animation clips a character can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    WallSlide,
    KnockBack,
}

impl AnimationState {
    /// Clip implied by a frame of parameters, ignoring one-shot triggers.
    pub fn from_frame(frame: &AnimationFrame) -> Self {
        if frame.grounded {
            if frame.speed > RUN_THRESHOLD {
                AnimationState::Run
            } else {
                AnimationState::Idle
            }
        } else if frame.wall_detected && frame.y_velocity < 0.0 {
            AnimationState::WallSlide
        } else if frame.y_velocity > 0.0 {
            AnimationState::Jump
        } else {
            AnimationState::Fall
        }
    }
}

/// Animator-facing parameters of a character.
#[derive(Component, Debug, Default)]
pub struct AnimationParams {
    pub frame: AnimationFrame,
    pub state: AnimationState,
    /// Set by a knockback trigger, consumed by the next state update.
    pub knock_back_pending: bool,
    /// Seconds left on a playing knockback clip.
    pub knock_back_clip_timer: f32,
}

impl AnimationSink for AnimationParams {
    fn publish(&mut self, frame: AnimationFrame) {
        self.frame = frame;
    }

    fn trigger_knock_back(&mut self) {
        self.knock_back_pending = true;
    }
}

impl AnimationParams {
    /// Advance the one-shot clip and pick the current state.
    pub fn update_state(&mut self, dt: f32) {
        if self.knock_back_pending {
            self.knock_back_pending = false;
            self.knock_back_clip_timer = KNOCK_BACK_CLIP_SECS;
        } else if self.knock_back_clip_timer > 0.0 {
            self.knock_back_clip_timer -= dt;
        }

        let next = if self.knock_back_clip_timer > 0.0 {
            AnimationState::KnockBack
        } else {
            AnimationState::from_frame(&self.frame)
        };

        if next != self.state {
            trace!("Animation state: {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }
}

pub(crate) fn publish_animation_params(
    mut query: Query<(&CollisionReadings, &LinearVelocity, &mut AnimationParams)>,
) {
    for (readings, velocity, mut params) in &mut query {
        params.publish(AnimationFrame::sample(readings, velocity.0));
    }
}

pub(crate) fn trigger_knock_back_animation(
    mut triggers: MessageReader<KnockBackTriggered>,
    mut query: Query<&mut AnimationParams>,
) {
    for trigger in triggers.read() {
        if let Ok(mut params) = query.get_mut(trigger.entity) {
            params.trigger_knock_back();
        }
    }
}

pub(crate) fn update_animation_state(time: Res<Time>, mut query: Query<&mut AnimationParams>) {
    let dt = time.delta_secs();

    for mut params in &mut query {
        params.update_state(dt);
    }
}

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                publish_animation_params,
                trigger_knock_back_animation,
                update_animation_state,
            )
                .chain()
                .after(MovementSystems::Dispatch),
        );
    }
}
