//! Player model
//!
//! A player is identity (team, role) plus kinematic state. Everything that
//! decides *where* a player goes lives in [`crate::engine::steering`]; this
//! module only owns the data and its invariants.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::engine::config::PlayerConfig;
use crate::engine::field::Zone;
use crate::engine::player_state::{Condition, Modifier, MovementState};
use crate::engine::types::{Role, Team};

/// A defender's marking job: hold between `corner` and opponent `opponent_id`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkingAssignment {
    pub corner: (f32, f32),
    pub opponent_id: usize,
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Index in the match roster
    pub id: usize,
    pub team: Team,
    pub role: Role,
    pub position: (f32, f32),
    /// Kick-off position, restored after every stoppage
    pub home: (f32, f32),
    /// Facing angle (radians)
    pub facing: f32,
    pub movement: MovementState,
    pub target: (f32, f32),
    /// Base speed, units per tick
    pub speed: f32,
    pub radius: f32,
    pub condition: Condition,
    pub modifier: Modifier,
    pub is_active_pursuer: bool,
    pub marking: Option<MarkingAssignment>,
    zone: Zone,
    bounds: Zone,
}

impl Player {
    pub fn new(id: usize, team: Team, role: Role, home: (f32, f32), config: &PlayerConfig) -> Self {
        let zone = config.field().zone_limits(team, role);
        let bounds = zone.inset(config.boundary_buffer);
        let position = bounds.clamp(home);
        Self {
            id,
            team,
            role,
            position,
            home: position,
            facing: kickoff_facing(team),
            movement: MovementState::Idle,
            target: position,
            speed: config.speed_for(role),
            radius: config.radius,
            condition: Condition::Active,
            modifier: Modifier::None,
            is_active_pursuer: false,
            marking: None,
            zone,
            bounds,
        }
    }

    /// Raw zone rectangle for this team/role
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Zone inset by the boundary buffer; the player's position never leaves it
    pub fn bounds(&self) -> Zone {
        self.bounds
    }

    pub fn is_fallen(&self) -> bool {
        self.condition.is_fallen()
    }

    pub fn is_throwing_in(&self) -> bool {
        self.modifier.is_throwing_in()
    }

    /// Can take part in play this tick (steering, ball contact, pursuit)
    pub fn is_available(&self) -> bool {
        !self.is_fallen()
    }

    pub fn fall(&mut self, now: f32) {
        if self.is_fallen() {
            return;
        }
        self.condition = Condition::Fallen { since: now, at: self.position };
        self.movement = MovementState::Idle;
        self.is_active_pursuer = false;
    }

    pub fn stand_up(&mut self) {
        self.condition = Condition::Active;
    }

    pub fn begin_throw_in(&mut self, now: f32) {
        self.modifier = Modifier::ThrowingIn { started_at: now };
        self.movement = MovementState::Idle;
    }

    /// Move to `p`, respecting the zone invariant
    pub fn place(&mut self, p: (f32, f32)) {
        self.position = self.bounds.clamp(p);
    }

    /// Restart position after a goal or stoppage
    pub fn return_home(&mut self) {
        self.position = self.home;
        self.target = self.home;
        self.facing = kickoff_facing(self.team);
        self.movement = MovementState::Idle;
        self.modifier = Modifier::None;
        self.is_active_pursuer = false;
    }

    /// Change role: new zone, speed and home line. Movement state is kept.
    pub fn set_role(&mut self, role: Role, home: (f32, f32), config: &PlayerConfig) {
        self.role = role;
        self.zone = config.field().zone_limits(self.team, role);
        self.bounds = self.zone.inset(config.boundary_buffer);
        self.speed = config.speed_for(role);
        self.home = self.bounds.clamp(home);
        if role != Role::Defender {
            self.marking = None;
        }
        self.position = self.bounds.clamp(self.position);
        self.target = self.bounds.clamp(self.target);
    }
}

fn kickoff_facing(team: Team) -> f32 {
    match team {
        Team::Red => 0.0,
        Team::Blue => PI,
    }
}

// ============================================================================
// Roster view
// ============================================================================

/// Read-only view of every player except the one being updated.
///
/// Built by splitting the roster slice around one index, so the updated
/// player can be borrowed mutably while the rest stay readable.
#[derive(Debug, Clone, Copy)]
pub struct Roster<'a> {
    before: &'a [Player],
    after: &'a [Player],
}

impl<'a> Roster<'a> {
    /// Split `players` into (player `index`, everyone else).
    /// Returns `None` when `index` is out of range.
    pub fn split(players: &'a mut [Player], index: usize) -> Option<(&'a mut Player, Roster<'a>)> {
        if index >= players.len() {
            return None;
        }
        let (before, rest) = players.split_at_mut(index);
        let (me, after) = rest.split_first_mut()?;
        Some((me, Roster { before, after }))
    }

    /// View over a whole slice (nobody excluded)
    pub fn all(players: &'a [Player]) -> Roster<'a> {
        Roster { before: players, after: &[] }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Player> + 'a {
        let (before, after) = (self.before, self.after);
        before.iter().chain(after.iter())
    }

    pub fn get(&self, id: usize) -> Option<&'a Player> {
        self.iter().find(|p| p.id == id)
    }

    pub fn teammates(&self, team: Team) -> impl Iterator<Item = &'a Player> + 'a {
        self.iter().filter(move |p| p.team == team)
    }

    pub fn opponents(&self, team: Team) -> impl Iterator<Item = &'a Player> + 'a {
        self.iter().filter(move |p| p.team != team)
    }
}
