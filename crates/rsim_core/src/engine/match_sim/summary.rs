//! End-of-match result

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::config::SquadConfig;
use crate::engine::stats::MatchStats;
use crate::engine::types::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    RedWin,
    BlueWin,
    Draw,
}

impl Outcome {
    pub fn from_score(red: u32, blue: u32) -> Self {
        match red.cmp(&blue) {
            std::cmp::Ordering::Greater => Outcome::RedWin,
            std::cmp::Ordering::Less => Outcome::BlueWin,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    pub fn winner(self) -> Option<Team> {
        match self {
            Outcome::RedWin => Some(Team::Red),
            Outcome::BlueWin => Some(Team::Blue),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::RedWin => write!(f, "Red"),
            Outcome::BlueWin => write!(f, "Blue"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub seed: u64,
    pub red_squad: SquadConfig,
    pub blue_squad: SquadConfig,
    pub red_score: u32,
    pub blue_score: u32,
    pub outcome: Outcome,
    pub elapsed_s: f32,
    pub ticks: u64,
    /// False when the match was stopped before full time
    pub completed: bool,
    pub stats: MatchStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_score() {
        assert_eq!(Outcome::from_score(2, 1), Outcome::RedWin);
        assert_eq!(Outcome::from_score(0, 1).winner(), Some(Team::Blue));
        assert_eq!(Outcome::from_score(1, 1).to_string(), "Draw");
    }
}
