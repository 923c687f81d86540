//! Physics constants for match simulation
//!
//! All distances are field units (one unit is one pixel of the reference
//! 900x600 pitch). Speeds are units per tick, timers are simulated seconds.
//! Tunable values are mirrored in [`crate::engine::config::EngineConfig`];
//! the constants here are the defaults.

// ============================================================
// Field geometry
// ============================================================
pub mod field {
    /// Touchline length (x axis)
    pub const LENGTH: f32 = 900.0;
    /// Goal-line width (y axis)
    pub const WIDTH: f32 = 600.0;
    /// Goal mouth width
    pub const GOAL_WIDTH: f32 = 260.0;
    /// Depth of the scoring band in front of each end-line
    pub const GOAL_DEPTH: f32 = 60.0;
    pub const PENALTY_AREA_WIDTH: f32 = 500.0;
    pub const PENALTY_AREA_DEPTH: f32 = 200.0;
    pub const CENTER_CIRCLE_RADIUS: f32 = 75.0;

    pub const HALF_LENGTH: f32 = LENGTH / 2.0;
    pub const CENTER: (f32, f32) = (LENGTH / 2.0, WIDTH / 2.0);

    /// Goal mouth y range (shared by both ends)
    pub const GOAL_Y_MIN: f32 = (WIDTH - GOAL_WIDTH) / 2.0;
    pub const GOAL_Y_MAX: f32 = GOAL_Y_MIN + GOAL_WIDTH;

    /// Attackers may drift this far back over the halfway line
    pub const ATTACKER_OVERLAP: f32 = 20.0;
}

// ============================================================
// Ball
// ============================================================
pub mod ball {
    pub const RADIUS: f32 = 5.0;
    /// Per-tick velocity multiplier
    pub const FRICTION: f32 = 0.99;
    /// Seconds without real movement before the ball counts as stalled
    pub const STALL_THRESHOLD_S: f32 = 3.0;
    /// Displacement that counts as "real" movement (noise floor)
    pub const MOVEMENT_THRESHOLD: f32 = 5.0;
}

// ============================================================
// Players
// ============================================================
pub mod player {
    pub const RADIUS: f32 = 12.0;

    pub const GOALKEEPER_SPEED: f32 = 6.0;
    pub const DEFENDER_SPEED: f32 = 4.0;
    pub const ATTACKER_SPEED: f32 = 4.0;

    /// Inset applied to every zone rectangle
    pub const BOUNDARY_BUFFER: f32 = 20.0;
    /// Below this distance to target, speed ramps down linearly
    pub const DECELERATION_DISTANCE: f32 = 50.0;
    /// Blend factor toward the raw stepped position
    pub const SMOOTHING: f32 = 0.3;
    /// Closer than this to the target the player idles
    pub const ARRIVAL_RADIUS: f32 = 2.0;

    /// Heading error that forces a stop-and-turn
    pub const TURN_THRESHOLD_DEG: f32 = 15.0;
    /// Angular rate while turning on the spot
    pub const TURN_RATE_DEG_PER_S: f32 = 180.0;

    /// Goalkeepers react to a ball predicted to enter the box within this many ticks
    pub const GOALKEEPER_LOOKAHEAD_TICKS: f32 = 30.0;

    /// Lateral shift applied to a marking defender's target
    pub const MARKING_LATERAL_OFFSET: f32 = 15.0;

    /// Time a throw-in taker stands still before throwing
    pub const THROW_IN_DURATION_S: f32 = 1.0;
    pub const THROW_IN_POWER: f32 = 5.0;
}

// ============================================================
// Collision & fall recovery
// ============================================================
pub mod collision {
    /// Centre distance that knocks both robots over
    pub const COLLISION_DISTANCE: f32 = 1.5;
    pub const RECOVERY_DURATION_S: f32 = 2.0;
    /// Players closer than this after recovery are pushed apart
    pub const SEPARATION_DISTANCE: f32 = 30.0;
    pub const SEPARATION_PUSH: f32 = 35.0;
    /// Falls closer than this in one tick are one collision event
    pub const DEDUP_RADIUS: f32 = 30.0;
    /// Recent collision markers kept for renderers
    pub const HISTORY_LEN: usize = 5;
}

// ============================================================
// Pursuit
// ============================================================
pub mod pursuit {
    /// Zone expansion used when testing whether the ball is "in zone"
    pub const ZONE_BUFFER: f32 = 20.0;
}

// ============================================================
// Passing / shooting / dribbling
// ============================================================
pub mod strategy {
    pub const SHOOT_DISTANCE: f32 = 150.0;
    /// Minimum |dy| between carrier and receiver
    pub const MIN_LATERAL_SEPARATION: f32 = 50.0;
    /// How far ahead a receiver must be to count as a forward option
    pub const FORWARD_MARGIN: f32 = 20.0;
    /// Bounding-box padding for the blocker pre-filter
    pub const BLOCK_BOX_PADDING: f32 = 30.0;
    /// Perpendicular distance at which an opponent blocks a lane
    pub const BLOCK_DISTANCE: f32 = 40.0;
    pub const BASE_PASS_SCORE: f32 = 1000.0;
    pub const FORWARD_BONUS: f32 = 500.0;

    /// Dribble only while further than this from goal
    pub const DRIBBLE_MIN_GOAL_DISTANCE: f32 = 200.0;
    pub const DRIBBLE_POWER: f32 = 1.5;
    pub const THREAT_RADIUS: f32 = 50.0;
    pub const AVOIDANCE_WEIGHT: f32 = 0.7;

    pub const SHOT_POWER: f32 = 9.0;
    pub const GOALKEEPER_KICK_POWER: f32 = 15.0;
    pub const DEFENDER_KICK_POWER: f32 = 10.0;
    pub const ATTACKER_KICK_POWER: f32 = 6.0;

    pub const SHOT_JITTER_DEG: f32 = 5.0;
    pub const PASS_JITTER_DEG: f32 = 10.0;
    pub const DRIBBLE_JITTER_DEG: f32 = 10.0;
    /// Goalkeeper clearances go wide by this much to either side
    pub const GOALKEEPER_DEFLECTION_DEG: f32 = 30.0;
}

// ============================================================
// Match
// ============================================================
pub mod match_rules {
    /// Outfield players per team (defenders + attackers)
    pub const SQUAD_SIZE: u8 = 3;
    pub const DURATION_S: f32 = 60.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_mouth_is_centered() {
        assert_eq!(field::GOAL_Y_MIN, 170.0);
        assert_eq!(field::GOAL_Y_MAX, 430.0);
        assert_eq!(field::GOAL_Y_MIN + field::GOAL_Y_MAX, field::WIDTH);
    }

    #[test]
    fn test_collision_smaller_than_separation() {
        assert!(collision::COLLISION_DISTANCE < collision::SEPARATION_DISTANCE);
        assert!(collision::SEPARATION_PUSH > collision::SEPARATION_DISTANCE);
    }
}
