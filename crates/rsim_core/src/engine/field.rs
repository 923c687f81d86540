//! Field geometry
//!
//! Static pitch dimensions plus the zone rectangle each (team, role) pair is
//! allowed to move in:
//!
//! ```text
//!  x: 0        200            450            700        900
//!     | red GK |  red DEF     | red ATT (from 430)      |
//!     |        blue ATT (to 470)  |  blue DEF  | blue GK |
//! ```

use serde::{Deserialize, Serialize};

use crate::engine::physics_constants::field;
use crate::engine::types::{Role, Team};

/// Axis-aligned rectangle, inclusive on all edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Zone {
    pub const fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn contains(&self, p: (f32, f32)) -> bool {
        p.0 >= self.x_min && p.0 <= self.x_max && p.1 >= self.y_min && p.1 <= self.y_max
    }

    /// Grow every edge outward by `by`
    pub fn expanded(&self, by: f32) -> Zone {
        Zone::new(self.x_min - by, self.x_max + by, self.y_min - by, self.y_max + by)
    }

    /// Shrink every edge inward by `by`. An inset larger than half an
    /// extent collapses that axis onto its midpoint instead of inverting.
    pub fn inset(&self, by: f32) -> Zone {
        let (x_min, x_max) = shrink_axis(self.x_min, self.x_max, by);
        let (y_min, y_max) = shrink_axis(self.y_min, self.y_max, by);
        Zone::new(x_min, x_max, y_min, y_max)
    }

    pub fn clamp(&self, p: (f32, f32)) -> (f32, f32) {
        (p.0.clamp(self.x_min, self.x_max), p.1.clamp(self.y_min, self.y_max))
    }

    pub fn center(&self) -> (f32, f32) {
        ((self.x_min + self.x_max) / 2.0, (self.y_min + self.y_max) / 2.0)
    }
}

fn shrink_axis(min: f32, max: f32, by: f32) -> (f32, f32) {
    if max - min <= 2.0 * by {
        let mid = (min + max) / 2.0;
        (mid, mid)
    } else {
        (min + by, max - by)
    }
}

/// Pitch description. The only tunable is how far attackers may cross back
/// over the halfway line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub attacker_overlap: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self { attacker_overlap: field::ATTACKER_OVERLAP }
    }
}

impl Field {
    pub fn with_attacker_overlap(attacker_overlap: f32) -> Self {
        Self { attacker_overlap }
    }

    pub fn bounds(&self) -> Zone {
        Zone::new(0.0, field::LENGTH, 0.0, field::WIDTH)
    }

    /// Movement rectangle for a (team, role) pair
    pub fn zone_limits(&self, team: Team, role: Role) -> Zone {
        let half = field::HALF_LENGTH;
        let pen = field::PENALTY_AREA_DEPTH;
        let len = field::LENGTH;
        let wid = field::WIDTH;
        match (team, role) {
            (Team::Red, Role::Goalkeeper) => {
                Zone::new(0.0, pen, field::GOAL_Y_MIN, field::GOAL_Y_MAX)
            }
            (Team::Red, Role::Defender) => Zone::new(pen, half, 0.0, wid),
            (Team::Red, Role::Attacker) => Zone::new(half - self.attacker_overlap, len, 0.0, wid),
            (Team::Blue, Role::Goalkeeper) => {
                Zone::new(len - pen, len, field::GOAL_Y_MIN, field::GOAL_Y_MAX)
            }
            (Team::Blue, Role::Defender) => Zone::new(half, len - pen, 0.0, wid),
            (Team::Blue, Role::Attacker) => Zone::new(0.0, half + self.attacker_overlap, 0.0, wid),
        }
    }

    /// Is `y` inside the goal mouth span?
    pub fn in_goal_mouth(&self, y: f32) -> bool {
        (field::GOAL_Y_MIN..=field::GOAL_Y_MAX).contains(&y)
    }

    /// Which team scores if the ball sits at `p`: the ball must be within
    /// the goal-depth band of an end-line (or past it) and inside the mouth.
    pub fn scoring_team_at(&self, p: (f32, f32)) -> Option<Team> {
        if !self.in_goal_mouth(p.1) {
            return None;
        }
        if p.0 <= field::GOAL_DEPTH {
            Some(Team::Blue)
        } else if p.0 >= field::LENGTH - field::GOAL_DEPTH {
            Some(Team::Red)
        } else {
            None
        }
    }

    /// The two front corners of a team's penalty area, used as defensive
    /// anchor points for marking defenders.
    pub fn defensive_corners(&self, team: Team) -> [(f32, f32); 2] {
        let x = match team {
            Team::Red => field::PENALTY_AREA_DEPTH,
            Team::Blue => field::LENGTH - field::PENALTY_AREA_DEPTH,
        };
        let y_top = (field::WIDTH - field::PENALTY_AREA_WIDTH) / 2.0;
        let y_bottom = y_top + field::PENALTY_AREA_WIDTH;
        [(x, y_top), (x, y_bottom)]
    }

    /// Whether `x` lies inside the penalty depth of `team`'s own end
    pub fn in_own_penalty_depth(&self, team: Team, x: f32) -> bool {
        match team {
            Team::Red => x < field::PENALTY_AREA_DEPTH,
            Team::Blue => x > field::LENGTH - field::PENALTY_AREA_DEPTH,
        }
    }
}
