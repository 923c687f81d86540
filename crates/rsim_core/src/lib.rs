//! # rsim_core - Robot Soccer Match Simulation
//!
//! A small-sided (goalkeeper + three outfield robots per team) soccer
//! simulation on a 900x600 pitch. Players steer inside fixed role zones,
//! turn before they walk, fall over when they collide and pass, dribble
//! or shoot when they reach the ball.
//!
//! ## Features
//! - Deterministic: a seed and a config fully determine a match
//! - Fixed-step simulation clock, independent of render rate
//! - Serialisable snapshots and events for front-ends
//! - JSON API for embedding
//!
//! ```rust
//! use rsim_core::{Match, MatchConfig, SquadConfig};
//!
//! let config = MatchConfig::new(SquadConfig::new(1, 2), SquadConfig::new(2, 1))
//!     .with_seed(7)
//!     .with_duration(5.0);
//! let summary = Match::new(config)?.run_to_completion();
//! assert!(summary.completed);
//! # Ok::<(), rsim_core::SimError>(())
//! ```

// Physics update functions take the full tick context
#![allow(clippy::too_many_arguments)]
#![allow(clippy::field_reassign_with_default)]

pub mod api;
pub mod engine;
pub mod error;

pub use api::{simulate_match_json, MatchRequest, MatchResponse};
pub use engine::config::{EngineConfig, MatchConfig, SquadConfig};
pub use engine::match_sim::{Match, MatchObserver, MatchSummary, Outcome};
pub use engine::types::{Role, Team};
pub use error::{Result, SimError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_basic_simulation() {
        let config = MatchConfig::default().with_seed(42).with_duration(10.0);
        let summary = Match::new(config).unwrap().run_to_completion();
        assert!(summary.completed);
        assert_eq!(summary.ticks, 600);
        assert_eq!(summary.outcome, Outcome::from_score(summary.red_score, summary.blue_score));
    }
}
