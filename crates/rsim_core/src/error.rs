use thiserror::Error;

use crate::engine::types::{Role, Team};

/// Errors surfaced at match construction or reconfiguration time.
///
/// A running tick never produces one of these; every in-tick corner case has
/// a defined fallback instead.
#[derive(Error, Debug)]
pub enum SimError {
    #[error(
        "Invalid squad for {team}: {defenders} defenders + {attackers} attackers, expected {expected} outfield players"
    )]
    InvalidSquad { team: Team, defenders: u8, attackers: u8, expected: u8 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),

    #[error("Player index {index} out of range (roster has {len} players)")]
    PlayerIndexOutOfRange { index: usize, len: usize },

    #[error("Cannot change role from {from} to {to}: goalkeeper slot is fixed")]
    IllegalRoleChange { from: Role, to: Role },

    #[error("Unsupported schema version: {0}")]
    UnsupportedSchema(u8),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// Configuration problems the caller can fix by editing its request
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SimError::InvalidSquad { .. }
                | SimError::InvalidConfig(_)
                | SimError::IllegalRoleChange { .. }
                | SimError::PlayerIndexOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_squad_message() {
        let err = SimError::InvalidSquad { team: Team::Red, defenders: 2, attackers: 2, expected: 3 };
        let msg = err.to_string();
        assert!(msg.contains("red"));
        assert!(msg.contains("expected 3"));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<u8, _> = serde_json::from_str("nope");
        let err: SimError = parse.unwrap_err().into();
        assert!(matches!(err, SimError::Json(_)));
        assert!(!err.is_config_error());
    }
}
