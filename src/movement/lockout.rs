//! Movement domain: single-shot lockout timers with delayed reverts.

use std::time::Duration;

use bevy::prelude::*;

use crate::movement::MovementState;

/// A timed lockout. Engaging sets its flags, releasing reverts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lockout {
    WallJump,
    KnockBack,
}

impl Lockout {
    fn engage(self, state: &mut MovementState) {
        match self {
            Lockout::WallJump => state.wall_jumping = true,
            Lockout::KnockBack => {
                state.knocked_back = true;
                state.can_be_knocked_back = false;
            }
        }
    }

    fn release(self, state: &mut MovementState) {
        match self {
            Lockout::WallJump => state.wall_jumping = false,
            Lockout::KnockBack => {
                state.can_be_knocked_back = true;
                state.knocked_back = false;
            }
        }
    }
}

#[derive(Debug, Clone)]
struct PendingRevert {
    lockout: Lockout,
    timer: Timer,
}

/// Running lockouts, advanced cooperatively by elapsed time.
///
/// Cancelling drops the pending revert without running it, so the flags a
/// cancelled lockout engaged stay as they are.
#[derive(Debug, Clone, Default)]
pub struct LockoutTimers {
    pending: Vec<PendingRevert>,
}

impl LockoutTimers {
    /// Engage `lockout` now and schedule its revert after `duration`.
    pub fn start(&mut self, lockout: Lockout, duration: Duration, state: &mut MovementState) {
        lockout.engage(state);
        self.pending.push(PendingRevert {
            lockout,
            timer: Timer::new(duration, TimerMode::Once),
        });
    }

    /// Drop every pending revert. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    /// Drop pending reverts of one kind only.
    pub fn cancel(&mut self, lockout: Lockout) -> usize {
        let before = self.pending.len();
        self.pending.retain(|pending| pending.lockout != lockout);
        before - self.pending.len()
    }

    pub fn is_running(&self, lockout: Lockout) -> bool {
        self.pending.iter().any(|pending| pending.lockout == lockout)
    }

    pub fn remaining(&self, lockout: Lockout) -> Option<Duration> {
        self.pending
            .iter()
            .find(|pending| pending.lockout == lockout)
            .map(|pending| pending.timer.remaining())
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance every timer by `delta` and run the reverts that came due, in
    /// the order they were started. Returns the released lockouts.
    pub fn tick(&mut self, delta: Duration, state: &mut MovementState) -> Vec<Lockout> {
        let mut released = Vec::new();

        self.pending.retain_mut(|pending| {
            pending.timer.tick(delta);
            if pending.timer.is_finished() {
                pending.lockout.release(state);
                released.push(pending.lockout);
                false
            } else {
                true
            }
        });

        released
    }
}
