pub mod ball;
pub mod collision;
pub mod config;
pub mod events;
pub mod field;
pub mod geometry;
pub mod match_sim;
pub mod passing;
pub mod physics_constants;
pub mod player;
pub mod player_state;
pub mod pursuit;
pub mod snapshot;
pub mod stats;
pub mod steering;
pub mod timestep;
pub mod types;

pub use ball::{Ball, Touch};
pub use collision::{CollisionManager, CollisionRecord};
pub use config::{EngineConfig, MatchConfig, SquadConfig};
pub use events::MatchEvent;
pub use field::{Field, Zone};
pub use match_sim::{EventRecorder, GameState, Match, MatchObserver, MatchSummary, NullObserver, Outcome};
pub use player::{Player, Roster};
pub use player_state::{Condition, Modifier, MovementState};
pub use snapshot::MatchSnapshot;
pub use stats::{MatchStats, RoleCounts, TeamStats};
pub use timestep::SimClock;
pub use types::{Role, Team};
