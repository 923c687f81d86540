//! Renderer-facing match snapshot
//!
//! Everything a front-end needs to draw one frame, in plain serialisable
//! data. Visual mapping (colours, fall animation) is the renderer's job;
//! the snapshot only carries the state it is derived from.

use serde::{Deserialize, Serialize};

use crate::engine::ball::{Ball, Touch};
use crate::engine::collision::CollisionRecord;
use crate::engine::match_sim::GameState;
use crate::engine::player::Player;
use crate::engine::player_state::MovementState;
use crate::engine::types::{Role, Team};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub position: (f32, f32),
    pub velocity: (f32, f32),
    pub last_touch: Option<Touch>,
}

impl From<&Ball> for BallSnapshot {
    fn from(ball: &Ball) -> Self {
        Self { position: ball.position, velocity: ball.velocity, last_touch: ball.last_touch() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: usize,
    pub team: Team,
    pub role: Role,
    pub position: (f32, f32),
    pub facing: f32,
    pub movement: MovementState,
    pub is_fallen: bool,
    /// 0.0 just fallen .. 1.0 standing
    pub recovery_progress: f32,
    pub is_throwing_in: bool,
    pub is_active_pursuer: bool,
}

impl PlayerSnapshot {
    pub fn capture(player: &Player, now: f32, recovery_duration_s: f32) -> Self {
        Self {
            id: player.id,
            team: player.team,
            role: player.role,
            position: player.position,
            facing: player.facing,
            movement: player.movement,
            is_fallen: player.is_fallen(),
            recovery_progress: player.condition.recovery_progress(now, recovery_duration_s),
            is_throwing_in: player.is_throwing_in(),
            is_active_pursuer: player.is_active_pursuer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub tick: u64,
    pub elapsed_s: f32,
    pub remaining_s: f32,
    pub red_score: u32,
    pub blue_score: u32,
    pub state: GameState,
    pub game_over: bool,
    pub ball: BallSnapshot,
    pub players: Vec<PlayerSnapshot>,
    pub collision_count: u32,
    /// Oldest first; renderers fade older markers
    pub recent_collisions: Vec<CollisionRecord>,
}

impl MatchSnapshot {
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn fallen_count(&self, team: Team) -> usize {
        self.players.iter().filter(|p| p.team == team && p.is_fallen).count()
    }
}
