//! JSON entry point for embedding the simulator
//!
//! ```json
//! { "schema_version": 1,
//!   "config": { "red": { "defenders": 1, "attackers": 2 },
//!               "blue": { "defenders": 2, "attackers": 1 },
//!               "seed": 42 },
//!   "include_events": true }
//! ```
//! Omitted config fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::engine::config::MatchConfig;
use crate::engine::events::MatchEvent;
use crate::engine::match_sim::{EventRecorder, Match, MatchSummary};
use crate::error::{Result, SimError};

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub config: MatchConfig,
    /// Return the full event stream (collisions included) with the summary
    #[serde(default)]
    pub include_events: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    pub summary: MatchSummary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<MatchEvent>,
}

/// Run one full match described by `request_json` and return the response
/// as JSON.
pub fn simulate_match_json(request_json: &str) -> Result<String> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(SimError::UnsupportedSchema(request.schema_version));
    }

    let mut sim = Match::new(request.config)?;
    let mut recorder = EventRecorder::default();
    let summary = sim.run_with(&mut recorder);

    let response = MatchResponse {
        schema_version: SCHEMA_VERSION,
        summary,
        events: if request.include_events { recorder.events } else { Vec::new() },
    };
    Ok(serde_json::to_string(&response)?)
}
