//! # Engine Configuration Module
//!
//! Every tuning constant the simulation reads at runtime lives here, grouped
//! by subsystem. Defaults come from [`crate::engine::physics_constants`].
//!
//! ## Usage
//! ```rust
//! use rsim_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let arcade = EngineConfig::arcade();
//! assert!(arcade.player.attacker_speed > config.player.attacker_speed);
//! ```
//!
//! ## Environment Variables
//!
//! - `RSIM_PROFILE`: Select preset (arcade, test, realistic)

mod ball_config;
mod collision_config;
mod match_config;
mod player_config;
mod strategy_config;

pub use ball_config::BallConfig;
pub use collision_config::CollisionConfig;
pub use match_config::{MatchConfig, SquadConfig};
pub use player_config::PlayerConfig;
pub use strategy_config::StrategyConfig;

use serde::{Deserialize, Serialize};
use std::env;
use validator::Validate;

/// Full engine tuning
#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(default)]
pub struct EngineConfig {
    #[validate]
    pub ball: BallConfig,
    #[validate]
    pub player: PlayerConfig,
    #[validate]
    pub collision: CollisionConfig,
    #[validate]
    pub strategy: StrategyConfig,
}

impl EngineConfig {
    /// Reference behaviour (default)
    pub fn realistic() -> Self {
        Self::default()
    }

    /// Faster robots, harder shots, quicker recovery
    pub fn arcade() -> Self {
        let mut cfg = Self::default();
        cfg.player.attacker_speed = 5.0;
        cfg.player.defender_speed = 4.5;
        cfg.player.turn_rate_deg_per_s = 360.0;
        cfg.collision.recovery_duration_s = 1.0;
        cfg.strategy.shot_power = 12.0;
        cfg.strategy.shoot_distance = 220.0;
        cfg
    }

    /// No angular jitter on kicks, for reproducible scenarios
    pub fn test() -> Self {
        let mut cfg = Self::default();
        cfg.strategy = cfg.strategy.without_jitter();
        cfg
    }

    /// Preset by name (`realistic`, `arcade`, `test`), case-insensitive
    pub fn from_profile(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "realistic" | "default" => Some(Self::realistic()),
            "arcade" => Some(Self::arcade()),
            "test" => Some(Self::test()),
            _ => None,
        }
    }

    /// Load preset from `RSIM_PROFILE` or use default
    pub fn from_env_or_default() -> Self {
        env::var("RSIM_PROFILE")
            .ok()
            .and_then(|name| Self::from_profile(&name))
            .unwrap_or_default()
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_profile() {
        let arcade = EngineConfig::from_profile("ARCADE").unwrap();
        assert_eq!(arcade.player.turn_rate_deg_per_s, 360.0);
        assert_eq!(EngineConfig::from_profile("test").unwrap().strategy.shot_jitter_deg, 0.0);
        assert!(EngineConfig::from_profile("nope").is_none());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
        assert!(EngineConfig::arcade().validate().is_ok());
        assert!(EngineConfig::test().validate().is_ok());
    }

    #[test]
    fn test_preset_jitter() {
        let cfg = EngineConfig::test();
        assert_eq!(cfg.strategy.shot_jitter_deg, 0.0);
        assert_eq!(cfg.strategy.goalkeeper_deflection_deg, 0.0);
        assert!(EngineConfig::default().strategy.pass_jitter_deg > 0.0);
    }

    #[test]
    fn test_from_json_partial() {
        let cfg = EngineConfig::from_json(r#"{"ball": {"friction": 0.95}}"#).unwrap();
        assert_eq!(cfg.ball.friction, 0.95);
        assert_eq!(cfg.ball.radius, 5.0);
        assert_eq!(cfg.player.radius, 12.0);
    }

    #[test]
    fn test_from_json_rejects_out_of_range() {
        let err = EngineConfig::from_json(r#"{"ball": {"friction": 1.5}}"#).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_from_json_rejects_huge_collision_history() {
        let err = EngineConfig::from_json(r#"{"collision":{"history_len":18446744073709551615}}"#).unwrap_err();
        assert!(err.is_config_error());
        assert!(EngineConfig::from_json(r#"{"collision":{"history_len":1000}}"#).is_ok());
    }
}
