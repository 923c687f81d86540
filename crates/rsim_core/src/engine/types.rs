//! Shared identity types (team, role)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::physics_constants::field;

/// Team identity. Red defends the `x = 0` end and attacks toward `x = LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Red, Team::Blue];

    pub fn opponent(self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    /// +1 when attacking toward increasing x, -1 otherwise
    pub fn attack_sign(self) -> f32 {
        match self {
            Team::Red => 1.0,
            Team::Blue => -1.0,
        }
    }

    /// x of the end-line this team defends
    pub fn own_goal_line_x(self) -> f32 {
        match self {
            Team::Red => 0.0,
            Team::Blue => field::LENGTH,
        }
    }

    /// x of the end-line this team attacks
    pub fn opponent_goal_line_x(self) -> f32 {
        self.opponent().own_goal_line_x()
    }

    /// Centre of the goal this team shoots at
    pub fn opponent_goal_center(self) -> (f32, f32) {
        (self.opponent_goal_line_x(), field::WIDTH / 2.0)
    }

    /// True when `x` lies in the half this team attacks
    pub fn in_opponent_half(self, x: f32) -> bool {
        match self {
            Team::Red => x > field::HALF_LENGTH,
            Team::Blue => x < field::HALF_LENGTH,
        }
    }

    /// True when `a` is at least `margin` further toward the opponent goal than `b`
    pub fn is_ahead(self, a: f32, b: f32, margin: f32) -> bool {
        (a - b) * self.attack_sign() > margin
    }

    pub fn index(self) -> usize {
        match self {
            Team::Red => 0,
            Team::Blue => 1,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Team::Red => write!(f, "red"),
            Team::Blue => write!(f, "blue"),
        }
    }
}

/// Player role. Fixed for a player's lifetime except via an explicit role change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Goalkeeper,
    Defender,
    Attacker,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Goalkeeper, Role::Defender, Role::Attacker];

    pub fn is_outfield(self) -> bool {
        !matches!(self, Role::Goalkeeper)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::Goalkeeper => write!(f, "goalkeeper"),
            Role::Defender => write!(f, "defender"),
            Role::Attacker => write!(f, "attacker"),
        }
    }
}
