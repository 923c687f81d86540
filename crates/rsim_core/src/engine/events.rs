//! Events produced by [`crate::engine::match_sim::Match::tick`]

use serde::{Deserialize, Serialize};

use crate::engine::ball::Touch;
use crate::engine::types::Team;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    Goal {
        team: Team,
        /// Last toucher before the ball crossed, if any
        scorer: Option<Touch>,
        at: f32,
    },
    Shot {
        team: Team,
        player_id: usize,
        at: f32,
    },
    OutOfBounds {
        position: (f32, f32),
        at: f32,
    },
    /// Ball made no real progress for too long and was re-centred
    BallStalled {
        at: f32,
    },
    Collision {
        position: (f32, f32),
        at: f32,
    },
    FullTime {
        red: u32,
        blue: u32,
        at: f32,
    },
}

impl MatchEvent {
    /// Events that trigger a reset-after-stoppage
    pub fn is_stoppage(&self) -> bool {
        matches!(
            self,
            MatchEvent::Goal { .. } | MatchEvent::OutOfBounds { .. } | MatchEvent::BallStalled { .. }
        )
    }

    pub fn at(&self) -> f32 {
        match self {
            MatchEvent::Goal { at, .. }
            | MatchEvent::Shot { at, .. }
            | MatchEvent::OutOfBounds { at, .. }
            | MatchEvent::BallStalled { at }
            | MatchEvent::Collision { at, .. }
            | MatchEvent::FullTime { at, .. } => *at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = MatchEvent::BallStalled { at: 3.5 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"ball_stalled","at":3.5}"#);
        assert!(event.is_stoppage());
        assert!(!MatchEvent::Collision { position: (0.0, 0.0), at: 1.0 }.is_stoppage());
    }

    #[test]
    fn test_at_reads_every_variant() {
        let events = [
            MatchEvent::Goal { team: Team::Red, scorer: None, at: 1.0 },
            MatchEvent::Shot { team: Team::Blue, player_id: 6, at: 2.0 },
            MatchEvent::OutOfBounds { position: (5.0, 300.0), at: 3.0 },
            MatchEvent::BallStalled { at: 4.0 },
            MatchEvent::Collision { position: (450.0, 300.0), at: 5.0 },
            MatchEvent::FullTime { red: 1, blue: 0, at: 6.0 },
        ];
        let times: Vec<f32> = events.iter().map(MatchEvent::at).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
