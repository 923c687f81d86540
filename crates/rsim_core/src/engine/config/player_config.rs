//! Player movement tuning

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::engine::field::Field;
use crate::engine::physics_constants::{field, player, pursuit};
use crate::engine::types::Role;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PlayerConfig {
    #[validate(range(min = 0.1))]
    pub radius: f32,
    #[validate(range(min = 0.0))]
    pub goalkeeper_speed: f32,
    #[validate(range(min = 0.0))]
    pub defender_speed: f32,
    #[validate(range(min = 0.0))]
    pub attacker_speed: f32,
    #[validate(range(min = 0.0))]
    pub boundary_buffer: f32,
    #[validate(range(min = 0.1))]
    pub deceleration_distance: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub smoothing: f32,
    #[validate(range(min = 0.0))]
    pub arrival_radius: f32,
    #[validate(range(min = 0.0, max = 180.0))]
    pub turn_threshold_deg: f32,
    #[validate(range(min = 1.0))]
    pub turn_rate_deg_per_s: f32,
    /// Defenders mark opponent attackers from an assigned corner
    pub defender_marking: bool,
    pub marking_lateral_offset: f32,
    #[validate(range(min = 0.0, max = 450.0))]
    pub attacker_overlap: f32,
    #[validate(range(min = 0.0))]
    pub pursuit_zone_buffer: f32,
    #[validate(range(min = 0.0))]
    pub throw_in_duration_s: f32,
    #[validate(range(min = 0.0))]
    pub throw_in_power: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: player::RADIUS,
            goalkeeper_speed: player::GOALKEEPER_SPEED,
            defender_speed: player::DEFENDER_SPEED,
            attacker_speed: player::ATTACKER_SPEED,
            boundary_buffer: player::BOUNDARY_BUFFER,
            deceleration_distance: player::DECELERATION_DISTANCE,
            smoothing: player::SMOOTHING,
            arrival_radius: player::ARRIVAL_RADIUS,
            turn_threshold_deg: player::TURN_THRESHOLD_DEG,
            turn_rate_deg_per_s: player::TURN_RATE_DEG_PER_S,
            defender_marking: true,
            marking_lateral_offset: player::MARKING_LATERAL_OFFSET,
            attacker_overlap: field::ATTACKER_OVERLAP,
            pursuit_zone_buffer: pursuit::ZONE_BUFFER,
            throw_in_duration_s: player::THROW_IN_DURATION_S,
            throw_in_power: player::THROW_IN_POWER,
        }
    }
}

impl PlayerConfig {
    pub fn speed_for(&self, role: Role) -> f32 {
        match role {
            Role::Goalkeeper => self.goalkeeper_speed,
            Role::Defender => self.defender_speed,
            Role::Attacker => self.attacker_speed,
        }
    }

    pub fn field(&self) -> Field {
        Field::with_attacker_overlap(self.attacker_overlap)
    }

    pub fn turn_threshold_rad(&self) -> f32 {
        self.turn_threshold_deg.to_radians()
    }

    pub fn turn_rate_rad_per_s(&self) -> f32 {
        self.turn_rate_deg_per_s.to_radians()
    }
}
