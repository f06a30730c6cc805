//! Movement domain: the locomotion state machine.
//!
//! [`MovementController`] is driven by three entry points that the host
//! calls in a fixed order each frame:
//!
//! 1. [`MovementController::advance_lockouts`] with the frame's elapsed time,
//! 2. [`MovementController::perception_tick`] once per rendered frame,
//! 3. [`MovementController::physics_tick`] zero or more times per frame.
//!
//! Lockouts advance before perception, so a lockout started this frame is
//! first charged the next frame's time and holds for every physics step of
//! the frame that started it.
//!
//! Velocity belongs to the physics body and is borrowed on every call, the
//! controller only overwrites the components it commands.

use std::time::Duration;

use avian2d::prelude::LinearVelocity;
use bevy::prelude::*;

use crate::animation::AnimationParams;
use crate::movement::{
    CollisionReadings, CollisionSensor, Facing, InputSample, InputSource, Lockout, LockoutTimers,
    MovementEvent, MovementState, MovementTuning, TuningError,
};

/// Falling speed multiplier while holding down against a wall.
const WALL_SLIDE_HOLD_DOWN_MODIFIER: f32 = 1.0;

#[derive(Component, Debug, Clone)]
#[require(CollisionReadings, AnimationParams, LinearVelocity)]
pub struct MovementController {
    tuning: MovementTuning,
    state: MovementState,
    facing: Facing,
    /// Axes cached by the last perception tick that read input.
    axes: Vec2,
    lockouts: LockoutTimers,
    events: Vec<MovementEvent>,
}

impl MovementController {
    /// Build a grounded controller facing right. Fails on unusable tuning.
    pub fn new(tuning: MovementTuning) -> Result<Self, TuningError> {
        tuning.validate()?;

        Ok(Self {
            tuning,
            state: MovementState::default(),
            facing: Facing::Right,
            axes: Vec2::ZERO,
            lockouts: LockoutTimers::default(),
            events: Vec::new(),
        })
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn state(&self) -> MovementState {
        self.state
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn facing_direction(&self) -> i8 {
        self.facing.sign()
    }

    pub fn is_facing_right(&self) -> bool {
        self.facing.is_right()
    }

    /// Horizontal and vertical input as last read.
    pub fn input_axes(&self) -> Vec2 {
        self.axes
    }

    pub fn lockouts(&self) -> &LockoutTimers {
        &self.lockouts
    }

    /// Events pushed since the last drain.
    pub fn events(&self) -> &[MovementEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = MovementEvent> + '_ {
        self.events.drain(..)
    }

    /// Falling speed multiplier for the current vertical input.
    pub fn wall_slide_modifier(&self) -> f32 {
        if self.axes.y < 0.0 {
            WALL_SLIDE_HOLD_DOWN_MODIFIER
        } else {
            self.tuning.wall_slide_speed_modifier
        }
    }

    /// Variable-rate update: sensor transitions, input, jumps and wall slide.
    pub fn perception_tick(
        &mut self,
        sensor: &impl CollisionSensor,
        input: &impl InputSource,
        velocity: &mut Vec2,
    ) {
        let grounded = sensor.is_grounded();
        let wall_detected = sensor.is_wall_detected();

        self.update_airborne(grounded);

        // Any wall contact refills the double jump, even on the ground.
        if wall_detected {
            self.state.can_double_jump = true;
        }

        if self.state.knocked_back {
            return;
        }

        let sample = InputSample::read(input);
        self.axes = Vec2::new(sample.horizontal, sample.vertical);

        if sample.jump {
            self.handle_jump(wall_detected, velocity);
        }

        if sample.debug_knock_back {
            self.knock_back(velocity);
        }

        if wall_detected {
            self.apply_wall_slide(velocity);
        }
    }

    /// Fixed-rate update: horizontal run velocity and facing.
    pub fn physics_tick(&mut self, velocity: &mut Vec2) {
        if self.state.horizontal_locked() {
            return;
        }

        velocity.x = self.axes.x * self.tuning.run_speed;

        let horizontal = self.axes.x;
        if (horizontal < 0.0 && self.facing.is_right())
            || (horizontal > 0.0 && !self.facing.is_right())
        {
            self.flip();
        }
    }

    /// Advance running lockouts and revert the ones that expired.
    pub fn advance_lockouts(&mut self, delta: Duration) {
        for lockout in self.lockouts.tick(delta, &mut self.state) {
            debug!("Lockout released: {:?}", lockout);
            self.events.push(MovementEvent::LockoutReleased(lockout));
        }
    }

    /// Launch the character away from its facing direction. Does nothing
    /// while a previous knockback is still running. Returns whether it
    /// took effect.
    pub fn knock_back(&mut self, velocity: &mut Vec2) -> bool {
        if !self.state.can_be_knocked_back {
            debug!("Knockback ignored: already knocked back");
            return false;
        }

        self.events.push(MovementEvent::KnockBackTriggered);

        let direction = self.tuning.knock_back_direction;
        *velocity = Vec2::new(direction.x * -self.facing.direction(), direction.y);

        let duration = Duration::from_secs_f32(self.tuning.knock_back_duration);
        self.lockouts
            .start(Lockout::KnockBack, duration, &mut self.state);

        info!(
            "Knocked back: velocity=({}, {}), facing={:?}",
            velocity.x, velocity.y, self.facing
        );
        true
    }

    /// Turn around.
    pub fn flip(&mut self) {
        self.facing = self.facing.flipped();
        self.events.push(MovementEvent::Flipped(self.facing));
    }

    fn update_airborne(&mut self, grounded: bool) {
        if !grounded && !self.state.airborne {
            self.state.airborne = true;
            self.events.push(MovementEvent::LeftGround);
            debug!(
                "Left ground: can_double_jump={}",
                self.state.can_double_jump
            );
        } else if grounded && self.state.airborne {
            self.state.airborne = false;
            self.state.can_double_jump = true;
            self.events.push(MovementEvent::Landed);
            debug!("Landed: double jump restored");
        }
    }

    fn handle_jump(&mut self, wall_detected: bool, velocity: &mut Vec2) {
        if !self.state.airborne {
            velocity.y = self.tuning.jump_height;
            self.events.push(MovementEvent::Jumped);
            return;
        }

        // Wall jump and double jump are not exclusive: both may fire on the
        // same press, the double jump then overrides the vertical launch.
        if wall_detected {
            let direction = self.tuning.wall_jump_direction;
            *velocity = Vec2::new(direction.x * -self.facing.direction(), direction.y);
            self.flip();

            let cancelled = if self.tuning.scoped_lockout_cancel {
                self.lockouts.cancel(Lockout::WallJump)
            } else {
                self.lockouts.cancel_all()
            };
            let duration = Duration::from_secs_f32(self.tuning.wall_jump_duration);
            self.lockouts
                .start(Lockout::WallJump, duration, &mut self.state);

            self.events.push(MovementEvent::WallJumped);
            debug!(
                "Wall jump: facing={:?}, cancelled_lockouts={}",
                self.facing, cancelled
            );
        }

        if self.state.can_double_jump {
            velocity.y = self.tuning.double_jump_height;
            self.state.can_double_jump = false;
            self.events.push(MovementEvent::DoubleJumped);
            debug!("Double jump");
        }
    }

    fn apply_wall_slide(&self, velocity: &mut Vec2) {
        if velocity.y < 0.0 {
            velocity.y *= self.wall_slide_modifier();
        }
    }
}
