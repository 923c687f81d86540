//! Passing / shooting / dribbling tuning

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::engine::physics_constants::strategy;
use crate::engine::types::Role;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct StrategyConfig {
    #[validate(range(min = 0.0))]
    pub shoot_distance: f32,
    #[validate(range(min = 0.0))]
    pub min_lateral_separation: f32,
    pub forward_margin: f32,
    #[validate(range(min = 0.0))]
    pub block_box_padding: f32,
    #[validate(range(min = 0.0))]
    pub block_distance: f32,
    pub base_pass_score: f32,
    pub forward_bonus: f32,
    #[validate(range(min = 0.0))]
    pub dribble_min_goal_distance: f32,
    #[validate(range(min = 0.0))]
    pub dribble_power: f32,
    #[validate(range(min = 0.0))]
    pub threat_radius: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub avoidance_weight: f32,
    #[validate(range(min = 0.0))]
    pub shot_power: f32,
    #[validate(range(min = 0.0))]
    pub goalkeeper_kick_power: f32,
    #[validate(range(min = 0.0))]
    pub defender_kick_power: f32,
    #[validate(range(min = 0.0))]
    pub attacker_kick_power: f32,
    #[validate(range(min = 0.0, max = 90.0))]
    pub shot_jitter_deg: f32,
    #[validate(range(min = 0.0, max = 90.0))]
    pub pass_jitter_deg: f32,
    #[validate(range(min = 0.0, max = 90.0))]
    pub dribble_jitter_deg: f32,
    #[validate(range(min = 0.0, max = 90.0))]
    pub goalkeeper_deflection_deg: f32,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            shoot_distance: strategy::SHOOT_DISTANCE,
            min_lateral_separation: strategy::MIN_LATERAL_SEPARATION,
            forward_margin: strategy::FORWARD_MARGIN,
            block_box_padding: strategy::BLOCK_BOX_PADDING,
            block_distance: strategy::BLOCK_DISTANCE,
            base_pass_score: strategy::BASE_PASS_SCORE,
            forward_bonus: strategy::FORWARD_BONUS,
            dribble_min_goal_distance: strategy::DRIBBLE_MIN_GOAL_DISTANCE,
            dribble_power: strategy::DRIBBLE_POWER,
            threat_radius: strategy::THREAT_RADIUS,
            avoidance_weight: strategy::AVOIDANCE_WEIGHT,
            shot_power: strategy::SHOT_POWER,
            goalkeeper_kick_power: strategy::GOALKEEPER_KICK_POWER,
            defender_kick_power: strategy::DEFENDER_KICK_POWER,
            attacker_kick_power: strategy::ATTACKER_KICK_POWER,
            shot_jitter_deg: strategy::SHOT_JITTER_DEG,
            pass_jitter_deg: strategy::PASS_JITTER_DEG,
            dribble_jitter_deg: strategy::DRIBBLE_JITTER_DEG,
            goalkeeper_deflection_deg: strategy::GOALKEEPER_DEFLECTION_DEG,
        }
    }
}

impl StrategyConfig {
    /// Pass / clearance power by role
    pub fn kick_power(&self, role: Role) -> f32 {
        match role {
            Role::Goalkeeper => self.goalkeeper_kick_power,
            Role::Defender => self.defender_kick_power,
            Role::Attacker => self.attacker_kick_power,
        }
    }

    /// Zero every jitter source (deterministic kicks for tests)
    pub fn without_jitter(mut self) -> Self {
        self.shot_jitter_deg = 0.0;
        self.pass_jitter_deg = 0.0;
        self.dribble_jitter_deg = 0.0;
        self.goalkeeper_deflection_deg = 0.0;
        self
    }
}
