//! Collision & fall-recovery tuning

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::engine::physics_constants::collision;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CollisionConfig {
    #[validate(range(min = 0.0))]
    pub collision_distance: f32,
    #[validate(range(min = 0.0))]
    pub recovery_duration_s: f32,
    #[validate(range(min = 0.0))]
    pub separation_distance: f32,
    #[validate(range(min = 0.0))]
    pub separation_push: f32,
    #[validate(range(min = 0.0))]
    pub dedup_radius: f32,
    /// Recent collisions kept for renderers
    #[validate(range(max = 1000))]
    pub history_len: usize,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            collision_distance: collision::COLLISION_DISTANCE,
            recovery_duration_s: collision::RECOVERY_DURATION_S,
            separation_distance: collision::SEPARATION_DISTANCE,
            separation_push: collision::SEPARATION_PUSH,
            dedup_radius: collision::DEDUP_RADIUS,
            history_len: collision::HISTORY_LEN,
        }
    }
}
