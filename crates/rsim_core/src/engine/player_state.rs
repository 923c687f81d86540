//! Player State Machine
//!
//! ## Movement states
//! ```text
//! Idle ──(heading error > threshold)──▶ Turning ──(duration elapsed)──▶ Walking
//!   ▲                                                                     │
//!   └────────────────────(within arrival radius)──────────────────────────┘
//! ```
//!
//! Two orthogonal modifiers sit on top:
//! - [`Condition::Fallen`] suspends everything until the recovery timer
//!   expires (driven by the collision manager).
//! - [`Modifier::ThrowingIn`] freezes the player for a fixed time, then a
//!   scripted throw is performed and the modifier clears.

use serde::{Deserialize, Serialize};

/// Locomotion sub-state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MovementState {
    /// At target, standing still
    #[default]
    Idle,

    /// Rotating on the spot; no translation until `duration` has passed
    Turning { started_at: f32, duration: f32 },

    /// Translating along the facing direction
    Walking,
}

impl MovementState {
    pub fn is_turning(&self) -> bool {
        matches!(self, MovementState::Turning { .. })
    }

    /// Turn finished at `now`?
    pub fn turn_complete(&self, now: f32) -> bool {
        match self {
            MovementState::Turning { started_at, duration } => now - started_at >= *duration,
            _ => false,
        }
    }
}

/// Physical condition after collisions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "condition", rename_all = "snake_case")]
pub enum Condition {
    #[default]
    Active,

    /// Knocked over at `at`; recovers once `now - since >= recovery duration`
    Fallen { since: f32, at: (f32, f32) },
}

impl Condition {
    pub fn is_fallen(&self) -> bool {
        matches!(self, Condition::Fallen { .. })
    }

    /// 0.0 just fallen .. 1.0 ready to stand (renderer hint)
    pub fn recovery_progress(&self, now: f32, recovery_duration: f32) -> f32 {
        match self {
            Condition::Active => 1.0,
            Condition::Fallen { since, .. } => {
                if recovery_duration <= 0.0 {
                    1.0
                } else {
                    ((now - since) / recovery_duration).clamp(0.0, 1.0)
                }
            }
        }
    }
}

/// Scripted action overriding normal steering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "modifier", rename_all = "snake_case")]
pub enum Modifier {
    #[default]
    None,

    ThrowingIn { started_at: f32 },
}

impl Modifier {
    pub fn is_throwing_in(&self) -> bool {
        matches!(self, Modifier::ThrowingIn { .. })
    }
}
