//! Ball physics
//!
//! Simplified kinematics: the ball moves by its velocity once per tick and
//! loses 1% of its speed to friction. Leaving the field anywhere except
//! through a goal mouth stops the ball dead and raises an out-of-bounds
//! flag for the match controller to act on.

use serde::{Deserialize, Serialize};

use crate::engine::config::BallConfig;
use crate::engine::field::Field;
use crate::engine::geometry::{angle_to_direction, distance};
use crate::engine::physics_constants::field;
use crate::engine::types::{Role, Team};

/// Who touched the ball last
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Touch {
    pub player_id: usize,
    pub team: Team,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub position: (f32, f32),
    /// Units per tick
    pub velocity: (f32, f32),
    pub radius: f32,
    friction: f32,
    stall_threshold_s: f32,
    movement_threshold: f32,
    /// Stall evidence: last time the ball moved more than the noise floor
    last_movement_at: f32,
    last_position: (f32, f32),
    /// Exact clamp position when the ball went out
    out_of_bounds: Option<(f32, f32)>,
    last_touch: Option<Touch>,
}

impl Ball {
    pub fn new(position: (f32, f32), config: &BallConfig, now: f32) -> Self {
        Self {
            position,
            velocity: (0.0, 0.0),
            radius: config.radius,
            friction: config.friction,
            stall_threshold_s: config.stall_threshold_s,
            movement_threshold: config.movement_threshold,
            last_movement_at: now,
            last_position: position,
            out_of_bounds: None,
            last_touch: None,
        }
    }

    pub fn speed(&self) -> f32 {
        (self.velocity.0.powi(2) + self.velocity.1.powi(2)).sqrt()
    }

    /// Advance one tick: move, apply friction, collect stall evidence,
    /// then handle the field boundary.
    pub fn integrate(&mut self, now: f32, pitch: &Field) {
        self.position.0 += self.velocity.0;
        self.position.1 += self.velocity.1;

        if distance(self.position, self.last_position) > self.movement_threshold {
            self.last_movement_at = now;
            self.last_position = self.position;
        }

        self.velocity.0 *= self.friction;
        self.velocity.1 *= self.friction;

        self.apply_boundaries(pitch);
    }

    fn apply_boundaries(&mut self, pitch: &Field) {
        let r = self.radius;
        let (mut x, mut y) = self.position;
        let mut out = false;

        // End-lines: open inside the goal mouth
        if !pitch.in_goal_mouth(y) {
            if x - r <= 0.0 {
                x = r;
                out = true;
            } else if x + r >= field::LENGTH {
                x = field::LENGTH - r;
                out = true;
            }
        }

        // Side-lines: always closed
        if y - r <= 0.0 {
            y = r;
            out = true;
        } else if y + r >= field::WIDTH {
            y = field::WIDTH - r;
            out = true;
        }

        if out {
            self.position = (x, y);
            self.velocity = (0.0, 0.0);
            self.out_of_bounds = Some(self.position);
        }
    }

    /// Set velocity from a heading and power (units per tick)
    pub fn kick(&mut self, angle: f32, power: f32) {
        let dir = angle_to_direction(angle);
        self.velocity = (dir.0 * power, dir.1 * power);
    }

    pub fn register_touch(&mut self, touch: Touch) {
        self.last_touch = Some(touch);
    }

    pub fn last_touch(&self) -> Option<Touch> {
        self.last_touch
    }

    pub fn out_of_bounds(&self) -> Option<(f32, f32)> {
        self.out_of_bounds
    }

    /// No real movement for longer than the stall threshold
    pub fn is_stuck(&self, now: f32) -> bool {
        now - self.last_movement_at > self.stall_threshold_s
    }

    pub fn last_movement_at(&self) -> f32 {
        self.last_movement_at
    }

    /// Stop the ball at `position` and clear all stoppage state, including
    /// the last touch. Read [`Ball::last_touch`] first when attributing a goal.
    pub fn reset(&mut self, position: (f32, f32), now: f32) {
        self.position = position;
        self.velocity = (0.0, 0.0);
        self.last_movement_at = now;
        self.last_position = position;
        self.out_of_bounds = None;
        self.last_touch = None;
    }
}
