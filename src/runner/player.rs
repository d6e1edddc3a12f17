//! Player physics: jump/fall integration, crouching and ground clamping.

use super::types::InputSnapshot;
use crate::core::constants::*;
use crate::core::{Bounds, ScreenConfig};

/// Animation pose the presentation layer picks a sprite for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Running,
    Crouching,
    Jumping,
    Falling,
}

/// The runner.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub bounds: Bounds,
    /// Vertical velocity in units/frame (negative = upward).
    pub velocity_y: f64,
    pub grounded: bool,
    pub crouched: bool,
}

impl Player {
    /// Standing on the floor line at the fixed starting column.
    pub fn new(screen: &ScreenConfig) -> Self {
        Self {
            bounds: Bounds {
                x: PLAYER_X,
                y: screen.floor_y() - PLAYER_SIZE,
                w: PLAYER_SIZE,
                h: PLAYER_SIZE,
            },
            velocity_y: 0.0,
            grounded: true,
            crouched: false,
        }
    }

    pub fn crouch_height() -> i32 {
        ((PLAYER_SIZE as f64 * CROUCH_HEIGHT_FACTOR) as i32).max(CROUCH_MIN_HEIGHT)
    }

    /// Apply this frame's jump/crouch keys.
    pub fn handle_input(&mut self, input: &InputSnapshot) {
        if input.jump && self.grounded && !self.crouched {
            self.velocity_y = JUMP_VELOCITY;
            self.grounded = false;
        }

        // Crouching only starts on the ground; releasing (or leaving the
        // ground) stands back up with the feet pinned.
        if input.crouch && self.grounded {
            if !self.crouched {
                self.bounds.set_height_pinned(Self::crouch_height());
                self.crouched = true;
            }
        } else if self.crouched {
            self.bounds.set_height_pinned(PLAYER_SIZE);
            self.crouched = false;
        }
    }

    /// Integrate one frame of vertical motion.
    pub fn advance(&mut self, screen: &ScreenConfig) {
        self.bounds.y += self.velocity_y as i32;

        if !self.grounded {
            self.velocity_y = (self.velocity_y + GRAVITY).min(MAX_FALL_SPEED);
        }

        let floor = screen.floor_y();
        if self.bounds.bottom() >= floor {
            self.bounds.set_bottom(floor);
            self.grounded = true;
            self.velocity_y = 0.0;
        }

        if self.bounds.x < 0 {
            self.bounds.x = 0;
        }
    }

    pub fn pose(&self) -> Pose {
        if !self.grounded {
            if self.velocity_y < 0.0 {
                Pose::Jumping
            } else {
                Pose::Falling
            }
        } else if self.crouched {
            Pose::Crouching
        } else {
            Pose::Running
        }
    }
}
