//! Movement domain: locomotion flags and the modes derived from them.

/// Primary locomotion mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionMode {
    Grounded,
    Airborne,
}

/// Timed overlay currently suppressing part of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockoutOverlay {
    None,
    WallJump,
    KnockBack,
}

/// Orthogonal locomotion flags. Behavior follows from their combination,
/// see [`MovementState::mode`] and [`MovementState::overlay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementState {
    pub airborne: bool,
    pub can_double_jump: bool,
    pub wall_jumping: bool,
    pub knocked_back: bool,
    pub can_be_knocked_back: bool,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            airborne: false,
            can_double_jump: false,
            wall_jumping: false,
            knocked_back: false,
            can_be_knocked_back: true,
        }
    }
}

impl MovementState {
    pub fn mode(&self) -> LocomotionMode {
        if self.airborne {
            LocomotionMode::Airborne
        } else {
            LocomotionMode::Grounded
        }
    }

    /// Knockback wins when both lockouts are somehow active.
    pub fn overlay(&self) -> LockoutOverlay {
        if self.knocked_back {
            LockoutOverlay::KnockBack
        } else if self.wall_jumping {
            LockoutOverlay::WallJump
        } else {
            LockoutOverlay::None
        }
    }

    /// Horizontal override and flip checks are suspended.
    pub fn horizontal_locked(&self) -> bool {
        self.wall_jumping || self.knocked_back
    }
}
