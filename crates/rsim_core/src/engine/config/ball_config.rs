//! Ball physics tuning

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::engine::physics_constants::ball;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BallConfig {
    #[validate(range(min = 0.1))]
    pub radius: f32,
    /// Per-tick velocity multiplier
    #[validate(range(min = 0.0, max = 1.0))]
    pub friction: f32,
    #[validate(range(min = 0.1))]
    pub stall_threshold_s: f32,
    #[validate(range(min = 0.0))]
    pub movement_threshold: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: ball::RADIUS,
            friction: ball::FRICTION,
            stall_threshold_s: ball::STALL_THRESHOLD_S,
            movement_threshold: ball::MOVEMENT_THRESHOLD,
        }
    }
}
