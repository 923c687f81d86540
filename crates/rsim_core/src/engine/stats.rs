//! Per-team match statistics
//!
//! Shots are counted when a player decides to shoot; goals are credited to
//! the role of the last toucher when that toucher belongs to the scoring
//! team (own goals only count toward the score).

use serde::{Deserialize, Serialize};

use crate::engine::ball::Touch;
use crate::engine::types::{Role, Team};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub goalkeeper: u32,
    pub defender: u32,
    pub attacker: u32,
}

impl RoleCounts {
    pub fn get(&self, role: Role) -> u32 {
        match role {
            Role::Goalkeeper => self.goalkeeper,
            Role::Defender => self.defender,
            Role::Attacker => self.attacker,
        }
    }

    fn bump(&mut self, role: Role) {
        match role {
            Role::Goalkeeper => self.goalkeeper += 1,
            Role::Defender => self.defender += 1,
            Role::Attacker => self.attacker += 1,
        }
    }

    pub fn total(&self) -> u32 {
        Role::ALL.iter().map(|r| self.get(*r)).sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub goals: u32,
    pub shots: RoleCounts,
    /// Goals credited to the scoring team's own last toucher
    pub goals_by_role: RoleCounts,
}

impl TeamStats {
    pub fn attacker_goals(&self) -> u32 {
        self.goals_by_role.attacker
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub red: TeamStats,
    pub blue: TeamStats,
    pub collisions: u32,
}

impl MatchStats {
    pub fn team(&self, team: Team) -> &TeamStats {
        match team {
            Team::Red => &self.red,
            Team::Blue => &self.blue,
        }
    }

    fn team_mut(&mut self, team: Team) -> &mut TeamStats {
        match team {
            Team::Red => &mut self.red,
            Team::Blue => &mut self.blue,
        }
    }

    pub fn record_shot(&mut self, team: Team, role: Role) {
        self.team_mut(team).shots.bump(role);
    }

    pub fn record_goal(&mut self, scoring: Team, last_touch: Option<Touch>) {
        let stats = self.team_mut(scoring);
        stats.goals += 1;
        if let Some(touch) = last_touch.filter(|t| t.team == scoring) {
            stats.goals_by_role.bump(touch.role);
        }
    }
}
