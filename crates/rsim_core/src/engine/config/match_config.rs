//! Match construction parameters

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::EngineConfig;
use crate::engine::physics_constants::match_rules;
use crate::engine::timestep::DEFAULT_TICK_DT;
use crate::engine::types::Team;
use crate::error::{Result, SimError};

/// Outfield composition of one team. Defenders + attackers must equal
/// [`match_rules::SQUAD_SIZE`]; the goalkeeper is implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadConfig {
    pub defenders: u8,
    pub attackers: u8,
}

impl SquadConfig {
    pub const fn new(defenders: u8, attackers: u8) -> Self {
        Self { defenders, attackers }
    }

    pub fn check(&self, team: Team) -> Result<()> {
        let total = self.defenders as u16 + self.attackers as u16;
        if total != match_rules::SQUAD_SIZE as u16 {
            return Err(SimError::InvalidSquad {
                team,
                defenders: self.defenders,
                attackers: self.attackers,
                expected: match_rules::SQUAD_SIZE,
            });
        }
        Ok(())
    }

    /// Every legal composition, defenders ascending
    pub fn all() -> Vec<SquadConfig> {
        (0..=match_rules::SQUAD_SIZE)
            .map(|d| SquadConfig::new(d, match_rules::SQUAD_SIZE - d))
            .collect()
    }
}

impl Default for SquadConfig {
    fn default() -> Self {
        Self::new(1, 2)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MatchConfig {
    pub red: SquadConfig,
    pub blue: SquadConfig,
    /// Match length in simulated seconds
    #[validate(range(min = 0.001))]
    pub duration_s: f32,
    /// Seconds per tick
    #[validate(range(min = 0.0001, max = 1.0))]
    pub tick_dt: f32,
    pub seed: u64,
    #[validate]
    pub engine: EngineConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            red: SquadConfig::new(1, 2),
            blue: SquadConfig::new(2, 1),
            duration_s: match_rules::DURATION_S,
            tick_dt: DEFAULT_TICK_DT,
            seed: 0,
            engine: EngineConfig::default(),
        }
    }
}

impl MatchConfig {
    pub fn new(red: SquadConfig, blue: SquadConfig) -> Self {
        Self { red, blue, ..Self::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_duration(mut self, duration_s: f32) -> Self {
        self.duration_s = duration_s;
        self
    }

    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    pub fn squad(&self, team: Team) -> SquadConfig {
        match team {
            Team::Red => self.red,
            Team::Blue => self.blue,
        }
    }

    /// Squad rule first (the fatal one), then numeric ranges
    pub fn check(&self) -> Result<()> {
        self.red.check(Team::Red)?;
        self.blue.check(Team::Blue)?;
        self.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squad_must_sum_to_three() {
        assert!(SquadConfig::new(1, 2).check(Team::Red).is_ok());
        assert!(SquadConfig::new(0, 3).check(Team::Red).is_ok());
        let err = SquadConfig::new(2, 2).check(Team::Blue).unwrap_err();
        assert!(matches!(err, SimError::InvalidSquad { team: Team::Blue, .. }));
    }

    #[test]
    fn test_all_compositions() {
        let all = SquadConfig::all();
        assert_eq!(all.len(), 4);
        assert!(all.iter().all(|s| s.defenders + s.attackers == 3));
    }

    #[test]
    fn test_match_config_rejects_bad_tick() {
        let mut cfg = MatchConfig::default();
        cfg.tick_dt = 0.0;
        assert!(matches!(cfg.check(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_match_config_json_defaults() {
        let cfg: MatchConfig =
            serde_json::from_str(r#"{"red": {"defenders": 0, "attackers": 3}, "seed": 7}"#).unwrap();
        assert_eq!(cfg.red, SquadConfig::new(0, 3));
        assert_eq!(cfg.blue, SquadConfig::new(2, 1));
        assert_eq!(cfg.seed, 7);
        assert!(cfg.check().is_ok());
    }
}
